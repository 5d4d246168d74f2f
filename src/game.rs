//! Turn and phase state machine for one player against the computer.
//!
//! [`Game`] owns both boards, the placement cursor, the RNG and the event
//! sink. Front-ends submit intents through its command methods; every
//! rejected intent returns a [`GameError`] and leaves the game unchanged.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::{self, Difficulty},
    board::{Board, BoardSnapshot},
    common::{BoardError, GameError, ShotResult, Side},
    config::{GameConfig, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS},
    events::{EventQueue, EventSink, GameEvent},
    ship::Orientation,
};

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is placing ships.
    Placement,
    PlayerTurn,
    ComputerTurn,
    /// Terminal until the next reset; see [`Game::winner`].
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => f.write_str("placement"),
            Phase::PlayerTurn => f.write_str("player turn"),
            Phase::ComputerTurn => f.write_str("computer turn"),
            Phase::GameOver => f.write_str("game over"),
        }
    }
}

/// Which ship the player places next and how it is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementCursor {
    /// Index into [`FLEET`]; equals [`NUM_SHIPS`] once the fleet is placed.
    pub index: usize,
    pub orientation: Orientation,
}

impl PlacementCursor {
    /// Length of the ship to place next.
    pub fn ship_length(&self) -> Option<usize> {
        FLEET.get(self.index).copied()
    }

    pub fn ships_left(&self) -> usize {
        NUM_SHIPS.saturating_sub(self.index)
    }
}

/// A shot fired by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputerShot {
    pub x: usize,
    pub y: usize,
    pub result: ShotResult,
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub phase: Phase,
    pub winner: Option<Side>,
    pub difficulty: Difficulty,
    pub player_score: usize,
    pub computer_score: usize,
    pub cursor: PlacementCursor,
    pub player_board: BoardSnapshot,
    pub computer_board: BoardSnapshot,
}

pub struct Game<S: EventSink = EventQueue> {
    config: GameConfig,
    player_board: Board,
    computer_board: Board,
    player_score: usize,
    computer_score: usize,
    phase: Phase,
    winner: Option<Side>,
    cursor: PlacementCursor,
    rng: SmallRng,
    sink: S,
}

fn seed_rng(config: &GameConfig) -> SmallRng {
    match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        #[cfg(feature = "std")]
        None => SmallRng::from_rng(&mut rand::rng()),
        #[cfg(not(feature = "std"))]
        None => SmallRng::seed_from_u64(crate::config::DEFAULT_SEED),
    }
}

impl Game<EventQueue> {
    /// New game whose events are queued for polling.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_sink(config, EventQueue::new())
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sink.drain().collect()
    }
}

impl<S: EventSink> Game<S> {
    /// New game reporting to `sink`. The computer fleet is placed right away.
    pub fn with_sink(config: GameConfig, sink: S) -> Result<Self, GameError> {
        let rng = seed_rng(&config);
        Self::with_rng(config, sink, rng)
    }

    /// Like [`with_sink`](Self::with_sink) with a caller supplied RNG.
    pub fn with_rng(config: GameConfig, sink: S, rng: SmallRng) -> Result<Self, GameError> {
        let mut game = Game {
            config,
            player_board: Board::with_sink_detection(config.sink_detection),
            computer_board: Board::with_sink_detection(config.sink_detection),
            player_score: 0,
            computer_score: 0,
            phase: Phase::Placement,
            winner: None,
            cursor: PlacementCursor::default(),
            rng,
            sink,
        };
        game.reset()?;
        Ok(game)
    }

    // ----- queries -----

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set only in [`Phase::GameOver`].
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_score(&self) -> usize {
        self.player_score
    }

    pub fn computer_score(&self) -> usize {
        self.computer_score
    }

    /// Opponent cells hit by `side`.
    pub fn score(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    pub fn cursor(&self) -> PlacementCursor {
        self.cursor
    }

    /// The player's own board, shot at by the computer.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board, shot at by the player.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// The board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Whether the current ship would fit at `(x, y)`; false outside placement.
    pub fn can_place_player_ship(&self, x: usize, y: usize) -> bool {
        match (self.phase, self.cursor.ship_length()) {
            (Phase::Placement, Some(length)) => {
                self.player_board
                    .can_place(x, y, length, self.cursor.orientation)
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            winner: self.winner,
            difficulty: self.config.difficulty,
            player_score: self.player_score,
            computer_score: self.computer_score,
            cursor: self.cursor,
            player_board: self.player_board.snapshot(),
            computer_board: self.computer_board.snapshot(),
        }
    }

    // ----- commands -----

    /// Start over: empty player board, fresh computer fleet, zero scores.
    ///
    /// Allowed in every phase. If the computer fleet cannot be placed the
    /// game keeps its previous state.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let mut computer_board = Board::with_sink_detection(self.config.sink_detection);
        computer_board.auto_place(&mut self.rng, &self.config)?;

        self.computer_board = computer_board;
        self.player_board = Board::with_sink_detection(self.config.sink_detection);
        self.player_score = 0;
        self.computer_score = 0;
        self.winner = None;
        self.cursor = PlacementCursor::default();
        self.set_phase(Phase::Placement);
        info!("game reset, difficulty {}", self.config.difficulty);

        let message = format!("Place your ships! Current ship: {} cells", FLEET[0]);
        self.emit_score(message);
        Ok(())
    }

    /// Place the cursor's ship with its origin at `(x, y)`.
    ///
    /// Placing the last ship starts the battle with the player to move.
    pub fn place_player_ship(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let index = self.cursor.index;
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex.into());
        }
        self.player_board
            .place(index, x, y, self.cursor.orientation)?;
        self.cursor.index += 1;

        match self.cursor.ship_length() {
            Some(next) => {
                let message = format!(
                    "Ship placed! Next: {} cells. Ships left: {}",
                    next,
                    self.cursor.ships_left()
                );
                self.emit_score(message);
            }
            None => self.start_battle(),
        }
        Ok(())
    }

    /// Flip the orientation used for the next placement.
    pub fn rotate(&mut self) -> Result<Orientation, GameError> {
        self.expect_phase(Phase::Placement)?;
        self.cursor.orientation = self.cursor.orientation.flipped();
        let message = format!(
            "Orientation changed. Current ship: {} cells ({})",
            self.cursor.ship_length().unwrap_or(0),
            self.cursor.orientation
        );
        self.emit_score(message);
        Ok(self.cursor.orientation)
    }

    /// Discard any manual placements and place the whole player fleet at
    /// random, then start the battle.
    pub fn auto_place(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let mut board = Board::with_sink_detection(self.config.sink_detection);
        board.auto_place(&mut self.rng, &self.config)?;
        self.player_board = board;
        self.cursor.index = NUM_SHIPS;
        self.start_battle();
        Ok(())
    }

    /// Change the computer's difficulty; takes effect on its next shot.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("difficulty {} -> {}", self.config.difficulty, difficulty);
        self.config.difficulty = difficulty;
    }

    /// The player fires at `(x, y)` on the computer's board.
    pub fn shoot_at(&mut self, x: usize, y: usize) -> Result<ShotResult, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        let result = self.computer_board.receive_shot(x, y)?;
        self.resolve_shot(Side::Player, x, y, result);
        Ok(result)
    }

    /// Let the computer fire a single shot at the player's board.
    pub fn trigger_computer_shot(&mut self) -> Result<ComputerShot, GameError> {
        self.expect_phase(Phase::ComputerTurn)?;
        let (x, y) = ai::select_target(self.config.difficulty, &self.player_board, &mut self.rng)
            .ok_or(BoardError::NoTargetAvailable)?;
        let result = self.player_board.receive_shot(x, y)?;
        self.resolve_shot(Side::Computer, x, y, result);
        Ok(ComputerShot { x, y, result })
    }

    /// Fire computer shots until the turn passes back or the game ends.
    pub fn run_computer_turn(&mut self) -> Result<Vec<ComputerShot>, GameError> {
        self.expect_phase(Phase::ComputerTurn)?;
        let mut shots = Vec::new();
        while self.phase == Phase::ComputerTurn {
            shots.push(self.trigger_computer_shot()?);
        }
        Ok(shots)
    }

    // ----- internals -----

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("phase {} -> {}", self.phase, phase);
        }
        self.phase = phase;
    }

    fn start_battle(&mut self) {
        self.set_phase(Phase::PlayerTurn);
        self.emit_score(String::from("All ships placed! The battle begins! Your turn."));
    }

    fn resolve_shot(&mut self, attacker: Side, x: usize, y: usize, result: ShotResult) {
        debug!("{} fires at ({}, {}): {:?}", attacker, x, y, result);
        match result {
            ShotResult::Hit { destroyed } => {
                let score = match attacker {
                    Side::Player => &mut self.player_score,
                    Side::Computer => &mut self.computer_score,
                };
                *score += 1;
                let lethal = *score == TOTAL_SHIP_CELLS;

                self.sink.notify(GameEvent::ShipHit {
                    x,
                    y,
                    destroyed,
                    target: attacker.opponent(),
                });
                let prefix = match (attacker, destroyed) {
                    (Side::Player, false) => "Hit! Fire again.",
                    (Side::Player, true) => "Ship destroyed! Fire again.",
                    (Side::Computer, false) => "The computer hit your ship!",
                    (Side::Computer, true) => "The computer sank your ship!",
                };
                let message = format!(
                    "{} Score: {} - {}",
                    prefix, self.player_score, self.computer_score
                );
                self.emit_score(message);

                if lethal {
                    self.finish(attacker);
                }
            }
            ShotResult::Miss => {
                let (next, message) = match attacker {
                    Side::Player => (Phase::ComputerTurn, "Miss! Computer's turn."),
                    Side::Computer => (Phase::PlayerTurn, "The computer missed! Your turn."),
                };
                self.set_phase(next);
                self.emit_score(String::from(message));
            }
        }
    }

    fn finish(&mut self, winner: Side) {
        self.winner = Some(winner);
        self.set_phase(Phase::GameOver);
        info!(
            "{} wins {} - {}",
            winner, self.player_score, self.computer_score
        );
        let message = match winner {
            Side::Player => "Congratulations! You won!",
            Side::Computer => "The computer won! Try again.",
        };
        self.sink.notify(GameEvent::GameOver {
            message: String::from(message),
            winner,
        });
    }

    fn emit_score(&mut self, message: String) {
        let score = self.player_score;
        self.sink.notify(GameEvent::ScoreChanged { message, score });
    }
}

impl<S: EventSink> fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("winner", &self.winner)
            .field("difficulty", &self.config.difficulty)
            .field("player_score", &self.player_score)
            .field("computer_score", &self.computer_score)
            .field("cursor", &self.cursor)
            .finish()
    }
}
