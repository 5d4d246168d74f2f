#![cfg(feature = "std")]

//! Terminal front-end helpers: coordinate parsing, command parsing, board
//! rendering and an event sink that prints notifications.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    ai::Difficulty,
    board::Board,
    common::Side,
    config::BOARD_SIZE,
    events::{EventSink, GameEvent},
    game::{Game, Phase},
};

const GRID: usize = BOARD_SIZE as usize;

/// Format `(x, y)` as a column letter and a 1-based row, e.g. `(0, 4)` → `A5`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse `A5`-style coordinates into `(x, y)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8).wrapping_sub(b'A') as usize;
    if x >= GRID {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > GRID {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((x, row - 1))
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current ship during placement, fire during the battle.
    At(usize, usize),
    Rotate,
    Auto,
    Reset,
    Difficulty(Difficulty),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or("Empty input")?;
    let cmd = match head.to_ascii_lowercase().as_str() {
        "r" | "rotate" => Command::Rotate,
        "a" | "auto" => Command::Auto,
        "reset" | "new" => Command::Reset,
        "s" | "show" => Command::Show,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "d" | "difficulty" => {
            let level = parts.next().ok_or("Usage: difficulty easy|medium|hard")?;
            Command::Difficulty(level.parse().map_err(|e| format!("{}", e))?)
        }
        "f" | "fire" | "p" | "place" => {
            let target = parts.next().ok_or("Missing coordinate (e.g., fire B7)")?;
            let (x, y) = parse_coord(target)?;
            Command::At(x, y)
        }
        _ => {
            let (x, y) = parse_coord(head)?;
            Command::At(x, y)
        }
    };
    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected '{}'", extra));
    }
    Ok(cmd)
}

fn header(out: &mut String) {
    out.push_str("    ");
    for x in 0..GRID {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
}

/// The player's own board: ships visible.
pub fn render_own_board(board: &Board) -> String {
    let mut out = String::new();
    header(&mut out);
    for y in 0..GRID {
        let _ = write!(out, "  {:2}", y + 1);
        for x in 0..GRID {
            let ship = board.ship_length_at(x, y).is_some();
            let ch = match (board.is_shot(x, y), ship) {
                (true, true) => 'X',
                (true, false) => 'o',
                (false, true) => 'S',
                (false, false) => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// The computer's board as the player knows it: only shots are shown.
pub fn render_target_board(board: &Board) -> String {
    let mut out = String::new();
    header(&mut out);
    for y in 0..GRID {
        let _ = write!(out, "  {:2}", y + 1);
        for x in 0..GRID {
            let ch = if !board.is_shot(x, y) {
                '.'
            } else if board.ship_length_at(x, y).is_some() {
                'X'
            } else {
                'o'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards plus the status line.
pub fn render_game<S: EventSink>(game: &Game<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Score {} - {} | {} | difficulty {}",
        game.player_score(),
        game.computer_score(),
        game.phase(),
        game.difficulty()
    );
    if game.phase() == Phase::Placement {
        let cursor = game.cursor();
        let _ = writeln!(
            out,
            "Next ship: {} cells, {}",
            cursor.ship_length().unwrap_or(0),
            cursor.orientation
        );
    } else {
        out.push_str("Enemy waters:\n");
        out.push_str(&render_target_board(game.computer_board()));
    }
    out.push_str("Your fleet:\n");
    out.push_str(&render_own_board(game.player_board()));
    out
}

pub const HELP: &str = "\
Commands:
  A5 | place A5     place the current ship with its bow at A5
  r  | rotate       turn the current ship
  a  | auto         place the whole fleet at random
  B7 | fire B7      fire at B7 on the enemy board
  d hard            set difficulty (easy, medium, hard)
  s  | show         redraw the boards
  reset             start a new game
  q  | quit         leave
Legend: S=ship X=hit o=miss .=unknown";

/// Prints every event to stdout.
#[derive(Debug, Default)]
pub struct PrintSink;

impl EventSink for PrintSink {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged { message, .. } => println!("{}", message),
            GameEvent::ShipHit {
                x,
                y,
                destroyed,
                target,
            } => {
                let whose = match target {
                    Side::Computer => "Enemy",
                    Side::Player => "Your",
                };
                let what = if destroyed { "destroyed" } else { "hit" };
                println!("{} ship {} at {}", whose, what, coord_to_string(x, y));
            }
            GameEvent::GameOver { message, .. } => {
                println!("\n=== GAME OVER ===\n{}", message);
            }
        }
    }
}
