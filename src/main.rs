#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    cli::{self, Command, PrintSink},
    init_logging, Difficulty, Game, GameConfig, Phase,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Sea Battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value = "medium", help = "Computer difficulty: easy, medium or hard")]
    difficulty: Difficulty,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1500, help = "Pause before each computer shot")]
    delay_ms: u64,
    #[arg(long, help = "Place your fleet at random and go straight to battle")]
    auto_place: bool,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let args = Cli::parse();

    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let config = GameConfig {
        difficulty: args.difficulty,
        seed: args.seed,
        ..GameConfig::default()
    };
    let mut game = Game::with_sink(config, PrintSink).map_err(|e| anyhow::anyhow!(e))?;
    if args.auto_place {
        game.auto_place().map_err(|e| anyhow::anyhow!(e))?;
    }
    println!("{}", cli::HELP);
    println!("{}", cli::render_game(&game));

    run(game, Duration::from_millis(args.delay_ms)).await
}

#[cfg(feature = "std")]
async fn run(mut game: Game<PrintSink>, delay: Duration) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match cli::parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };

        let outcome = match cmd {
            Command::Quit => break,
            Command::Help => {
                println!("{}", cli::HELP);
                continue;
            }
            Command::Show => Ok(()),
            Command::Rotate => game.rotate().map(|_| ()),
            Command::Auto => game.auto_place(),
            Command::Reset => game.reset(),
            Command::Difficulty(level) => {
                game.set_difficulty(level);
                println!("Difficulty set to {}", level);
                Ok(())
            }
            Command::At(x, y) => match game.phase() {
                Phase::Placement => game.place_player_ship(x, y),
                _ => game.shoot_at(x, y).map(|_| ()),
            },
        };
        if let Err(e) = outcome {
            println!("✗ {}", e);
            continue;
        }

        while game.phase() == Phase::ComputerTurn {
            tokio::time::sleep(delay).await;
            let shot = game
                .trigger_computer_shot()
                .map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "Computer fired at {}",
                cli::coord_to_string(shot.x, shot.y)
            );
        }
        println!("{}", cli::render_game(&game));
        if game.phase() == Phase::GameOver {
            println!("Type 'reset' for a new game or 'quit' to leave.");
        }
    }
    Ok(())
}
