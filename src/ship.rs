//! Ship geometry and per-ship hit tracking.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID: usize = BOARD_SIZE as usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along `x`.
    #[default]
    Horizontal,
    /// Extends along `y`.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The `i`-th cell of a ship starting at `(x, y)`.
    #[inline]
    pub(crate) fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Occupancy mask of a ship of `length` at `(x, y)`, or `ShipOutOfBounds`
/// when any segment would leave the grid.
pub(crate) fn footprint(
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> Result<BB, BoardError> {
    if length == 0 || x >= GRID || y >= GRID {
        return Err(BoardError::ShipOutOfBounds);
    }
    let end = match orientation {
        Orientation::Horizontal => x + length,
        Orientation::Vertical => y + length,
    };
    if end > GRID {
        return Err(BoardError::ShipOutOfBounds);
    }
    let mut mask = BB::new();
    for i in 0..length {
        let (cx, cy) = orientation.step(x, y, i);
        mask.set(cx, cy)?;
    }
    Ok(mask)
}

/// A ship of the fleet placed on a board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    index: usize,
    orientation: Orientation,
    x: usize,
    y: usize,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Place fleet ship `index` at `(x, y)` with `orientation`.
    pub fn new(index: usize, x: usize, y: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let mask = footprint(x, y, FLEET[index], orientation)?;
        Ok(Ship {
            index,
            orientation,
            x,
            y,
            mask,
            hits: BB::new(),
        })
    }

    /// Position of this ship in [`FLEET`]; doubles as its identifier.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn length(&self) -> usize {
        FLEET[self.index]
    }

    /// Origin of the ship `(x, y)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Covered cells from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length()).map(move |i| self.orientation.step(self.x, self.y, i))
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.mask.contains(x, y)
    }

    /// Record a hit at `(x, y)`. Returns `false` if the cell is not part of the ship.
    pub fn register_hit(&mut self, x: usize, y: usize) -> bool {
        if self.contains(x, y) {
            let _ = self.hits.set(x, y);
            true
        } else {
            false
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.count_ones()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.length()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ index: {}, length: {}, origin: ({}, {}), orientation: {:?}, hits: {} }}",
            self.index,
            self.length(),
            self.x,
            self.y,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}
