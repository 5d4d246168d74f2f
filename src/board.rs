//! One side's grid: ship occupancy, shot marks and fleet placement rules.

use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::{GameConfig, SinkDetection, BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{footprint, Orientation, Ship, BB};

const GRID: usize = BOARD_SIZE as usize;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Covered by the fleet ship with this index.
    Ship(usize),
}

/// Plain-data view of a board for renderers. Rows are indexed by `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    /// Length of the ship covering each cell, `0` for water.
    pub cells: [[u8; GRID]; GRID],
    pub shots: [[bool; GRID]; GRID],
    pub ships_sunk: usize,
}

#[derive(Clone)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    ships: [Option<Ship>; NUM_SHIPS],
    occupied: BB,
    shots: BB,
    sink_detection: SinkDetection,
}

impl Board {
    /// Create an empty board (no ships, no shots).
    pub fn new() -> Self {
        Self::with_sink_detection(SinkDetection::default())
    }

    pub fn with_sink_detection(sink_detection: SinkDetection) -> Self {
        Board {
            cells: [[Cell::Empty; GRID]; GRID],
            ships: [None; NUM_SHIPS],
            occupied: BB::new(),
            shots: BB::new(),
            sink_detection,
        }
    }

    /// Remove every ship and shot mark.
    pub fn clear(&mut self) {
        *self = Self::with_sink_detection(self.sink_detection);
    }

    pub fn sink_detection(&self) -> SinkDetection {
        self.sink_detection
    }

    /// Cell at `(x, y)`, `None` off the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Length of the ship covering `(x, y)`.
    pub fn ship_length_at(&self, x: usize, y: usize) -> Option<usize> {
        match self.cell(x, y)? {
            Cell::Ship(index) => Some(FLEET[index]),
            Cell::Empty => None,
        }
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    /// Ships placed so far, in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn placed_count(&self) -> usize {
        self.ships().count()
    }

    pub fn is_fleet_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Board occupancy mask of all ships.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    pub fn occupied_cells(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Cells that have been shot at.
    pub fn shots(&self) -> BB {
        self.shots
    }

    pub fn is_shot(&self, x: usize, y: usize) -> bool {
        self.shots.contains(x, y)
    }

    /// Shots that struck a ship.
    pub fn hits(&self) -> BB {
        self.shots & self.occupied
    }

    pub fn unshot_count(&self) -> usize {
        GRID * GRID - self.shots.count_ones()
    }

    pub fn sunk_count(&self) -> usize {
        self.ships().filter(|s| s.is_sunk()).count()
    }

    /// Returns `true` once every placed ship segment has been hit.
    pub fn all_sunk(&self) -> bool {
        self.placed_count() > 0 && (self.occupied & !self.shots).is_empty()
    }

    /// Whether a ship of `length` fits at `(x, y)` without leaving the grid
    /// and without touching any ship, diagonals included.
    pub fn can_place(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        match footprint(x, y, length, orientation) {
            Ok(mask) => (mask.dilate() & self.occupied).is_empty(),
            Err(_) => false,
        }
    }

    /// Place fleet ship `index` at `(x, y)`.
    ///
    /// Re-checks [`can_place`](Self::can_place); a rejected placement leaves
    /// the board unchanged.
    pub fn place(
        &mut self,
        index: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(index, x, y, orientation)?;
        if !(ship.mask().dilate() & self.occupied).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        for (cx, cy) in ship.cells() {
            self.cells[cy][cx] = Cell::Ship(index);
        }
        self.occupied |= ship.mask();
        self.ships[index] = Some(ship);
        debug!(
            "placed ship {} (length {}) at ({}, {}) {}",
            index,
            ship.length(),
            x,
            y,
            orientation
        );
        Ok(())
    }

    /// Returns a legal `(x, y, orientation)` for fleet ship `index`.
    ///
    /// Samples up to `max_attempts` uniformly random origins and orientations;
    /// when none fits, scans every origin row by row and takes the first legal
    /// one.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
        max_attempts: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let length = FLEET[index];
        for _ in 0..max_attempts {
            let x = rng.random_range(0..GRID);
            let y = rng.random_range(0..GRID);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place(x, y, length, orientation) {
                return Ok((x, y, orientation));
            }
        }
        warn!(
            "no random spot for ship {} after {} attempts, scanning",
            index, max_attempts
        );
        for y in 0..GRID {
            for x in 0..GRID {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if self.can_place(x, y, length, orientation) {
                        return Ok((x, y, orientation));
                    }
                }
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Clear the board and place the whole fleet at random.
    ///
    /// A fleet that paints itself into a corner is discarded and placed again,
    /// at most `config.max_fleet_restarts` times.
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &GameConfig,
    ) -> Result<(), BoardError> {
        for attempt in 0..=config.max_fleet_restarts {
            self.clear();
            match self.place_fleet(rng, config.max_random_attempts) {
                Ok(()) => return Ok(()),
                Err(BoardError::UnableToPlaceShip) => {
                    warn!("fleet placement attempt {} got stuck, restarting", attempt + 1);
                }
                Err(e) => return Err(e),
            }
        }
        self.clear();
        Err(BoardError::UnableToPlaceShip)
    }

    fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        for index in 0..NUM_SHIPS {
            let (x, y, orientation) = self.random_placement(rng, index, max_attempts)?;
            self.place(index, x, y, orientation)?;
        }
        Ok(())
    }

    /// Fire at `(x, y)`, marking the cell and reporting what was struck.
    pub fn receive_shot(&mut self, x: usize, y: usize) -> Result<ShotResult, BoardError> {
        if !BB::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.shots.contains(x, y) {
            return Err(BoardError::AlreadyShot { x, y });
        }
        self.shots.set(x, y)?;
        let index = match self.cells[y][x] {
            Cell::Empty => return Ok(ShotResult::Miss),
            Cell::Ship(index) => index,
        };
        if let Some(ship) = self.ships[index].as_mut() {
            ship.register_hit(x, y);
        }
        let destroyed = match self.sink_detection {
            SinkDetection::PerShip => self.ships[index].map_or(false, |s| s.is_sunk()),
            SinkDetection::SharedLength => self.length_class_sunk(FLEET[index]),
        };
        Ok(ShotResult::Hit { destroyed })
    }

    /// No cell of any ship with this length is left unshot.
    fn length_class_sunk(&self, length: usize) -> bool {
        self.ships()
            .filter(|s| s.length() == length)
            .all(|s| (s.mask() & !self.shots).is_empty())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[0u8; GRID]; GRID];
        let mut shots = [[false; GRID]; GRID];
        for y in 0..GRID {
            for x in 0..GRID {
                cells[y][x] = self.ship_length_at(x, y).unwrap_or(0) as u8;
                shots[y][x] = self.shots.contains(x, y);
            }
        }
        BoardSnapshot {
            cells,
            shots,
            ships_sunk: self.sunk_count(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.occupied, self.shots, self.ships
        )
    }
}
