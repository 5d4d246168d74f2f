// Target selection for the computer opponent.
// Uses no_std and avoids heap allocations.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::{
    board::Board,
    config::{BOARD_SIZE, MEDIUM_RANDOM_SHOT_PROBABILITY},
    ship::BB,
};

const GRID: usize = BOARD_SIZE as usize;

/// Probe order around a known hit: down, right, up, left.
const NEIGHBOURS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// How clever the computer is when choosing its next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniformly random shots.
    Easy,
    /// Mostly random, sometimes follows up a hit.
    #[default]
    Medium,
    /// Always follows up a hit when one is available.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

/// Error for an unrecognised difficulty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("difficulty must be one of: easy, medium, hard")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("easy") {
            Ok(Difficulty::Easy)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Difficulty::Medium)
        } else if s.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Hard)
        } else {
            Err(ParseDifficultyError)
        }
    }
}

/// Pick a cell uniformly among those not yet shot on `board`.
///
/// Returns `None` only when every cell has been shot.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let open: BB = !board.shots();
    let count = open.count_ones();
    if count == 0 {
        return None;
    }
    let k = rng.random_range(0..count);
    open.iter_set_bits().nth(k)
}

/// First unshot 4-neighbour of a struck cell.
///
/// Struck cells are visited column by column (`x` outer, `y` inner) and each
/// one's neighbours in [`NEIGHBOURS`] order. Hits on ships that are already
/// sunk are followed up as well.
pub fn hunt_target(board: &Board) -> Option<(usize, usize)> {
    let hits = board.hits();
    let shots = board.shots();
    for x in 0..GRID {
        for y in 0..GRID {
            if !hits.contains(x, y) {
                continue;
            }
            for (dx, dy) in NEIGHBOURS {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if BB::in_bounds(nx, ny) && !shots.contains(nx, ny) {
                    return Some((nx, ny));
                }
            }
        }
    }
    None
}

/// Choose the computer's next shot against `board`.
pub fn select_target<R: Rng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut R,
) -> Option<(usize, usize)> {
    match difficulty {
        Difficulty::Easy => random_target(board, rng),
        Difficulty::Hard => hunt_target(board).or_else(|| random_target(board, rng)),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_RANDOM_SHOT_PROBABILITY) {
                random_target(board, rng)
            } else {
                hunt_target(board).or_else(|| random_target(board, rng))
            }
        }
    }
}
