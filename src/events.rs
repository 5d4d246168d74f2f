//! Notifications the engine sends to whatever renders the game.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::common::Side;

/// A state change worth showing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// Status line update. `score` is always the player's score.
    ScoreChanged { message: String, score: usize },
    /// A ship on `target`'s board was struck at `(x, y)`.
    ShipHit {
        x: usize,
        y: usize,
        destroyed: bool,
        target: Side,
    },
    /// The game ended.
    GameOver { message: String, winner: Side },
}

impl GameEvent {
    /// Human readable text carried by the event, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            GameEvent::ScoreChanged { message, .. } | GameEvent::GameOver { message, .. } => {
                Some(message)
            }
            GameEvent::ShipHit { .. } => None,
        }
    }
}

/// Receiver of [`GameEvent`]s, owned by the game.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(GameEvent),
{
    fn notify(&mut self, event: GameEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Buffers events until the caller drains them.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }
}

impl EventSink for EventQueue {
    fn notify(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
