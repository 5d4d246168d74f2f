//! Common types for Sea Battle: sides, shot results and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::Phase;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Computer => f.write_str("computer"),
        }
    }
}

/// Outcome of a legal shot. Illegal shots are reported as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Only water.
    Miss,
    /// A ship segment was struck; `destroyed` when that finished the ship.
    Hit { destroyed: bool },
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit { .. })
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Specified fleet index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship would overlap or touch another ship.
    ShipOverlaps,
    /// Ship would leave the grid.
    ShipOutOfBounds,
    /// Shot coordinate outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// The cell was already shot at.
    AlreadyShot { x: usize, y: usize },
    /// Random and exhaustive placement both failed.
    UnableToPlaceShip,
    /// Every cell of the board has been shot.
    NoTargetAvailable,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::OutOfBounds { x, y } => write!(f, "Cell ({}, {}) is off the board", x, y),
            BoardError::AlreadyShot { x, y } => {
                write!(f, "Cell ({}, {}) has already been shot at", x, y)
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NoTargetAvailable => write!(f, "No unshot cell left to target"),
        }
    }
}

/// Errors returned by game commands. All of them are recoverable and leave
/// the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The command is not allowed in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// The board rejected the move.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Not allowed now: expected {}, game is in {}", expected, actual)
            }
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
