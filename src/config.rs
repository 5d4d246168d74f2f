use crate::ai::Difficulty;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Ship lengths in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Chance that a medium-difficulty computer shot ignores known hits.
pub const MEDIUM_RANDOM_SHOT_PROBABILITY: f64 = 0.7;

/// Seed used when no seed is configured and no entropy source is available.
pub const DEFAULT_SEED: u64 = 0x5EA_BA77_1E;

/// How the "destroyed" flag of a hit is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkDetection {
    /// A ship is destroyed once every one of its own cells was shot.
    #[default]
    PerShip,
    /// Ships of equal length count as one unit: a hit destroys only when no
    /// unshot cell of that length is left anywhere on the board.
    SharedLength,
}

/// Runtime settings of a single game instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Fixed RNG seed; makes fleets and computer shots reproducible.
    pub seed: Option<u64>,
    pub sink_detection: SinkDetection,
    /// Random origins sampled per ship before falling back to a scan.
    pub max_random_attempts: usize,
    /// Times a whole fleet is re-placed before giving up.
    pub max_fleet_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            sink_detection: SinkDetection::default(),
            max_random_attempts: 1000,
            max_fleet_restarts: 16,
        }
    }
}

impl GameConfig {
    /// Default settings with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_sink_detection(mut self, sink_detection: SinkDetection) -> Self {
        self.sink_detection = sink_detection;
        self
    }
}
