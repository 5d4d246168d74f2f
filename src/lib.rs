#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod events;
mod game;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod cli;

pub use ai::{hunt_target, random_target, select_target, Difficulty, ParseDifficultyError};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardSnapshot, Cell};
pub use common::{BoardError, GameError, ShotResult, Side};
pub use config::*;
pub use events::{EventQueue, EventSink, GameEvent, NullSink};
pub use game::{ComputerShot, Game, GameSnapshot, Phase, PlacementCursor};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::{Orientation, Ship};
