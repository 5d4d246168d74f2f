#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `default` when unset or invalid.
fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment
/// variable. Defaults to `default` if the variable is not set or invalid.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var("SEABATTLE_LOG").ok().as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back() {
        assert_eq!(level_from(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(level_from(Some("nonsense"), LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(level_from(None, LevelFilter::Off), LevelFilter::Off);
    }
}
