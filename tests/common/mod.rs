#![allow(dead_code)]

use seabattle::{Board, EventSink, Game, Orientation, BitBoard, BOARD_SIZE};

pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// A legal hand-made fleet: origins of ships 0..10, all horizontal.
pub const LAYOUT: [(usize, usize); 10] = [
    (0, 0),
    (0, 2),
    (4, 2),
    (0, 4),
    (3, 4),
    (6, 4),
    (0, 6),
    (2, 6),
    (4, 6),
    (6, 6),
];

/// Place [`LAYOUT`] through the player's placement cursor.
pub fn place_layout<S: EventSink>(game: &mut Game<S>) {
    for (x, y) in LAYOUT {
        game.place_player_ship(x, y).unwrap();
    }
}

pub fn layout_board() -> Board {
    let mut board = Board::new();
    for (i, (x, y)) in LAYOUT.iter().enumerate() {
        board.place(i, *x, *y, Orientation::Horizontal).unwrap();
    }
    board
}

/// First unshot water cell on `board`, if any is left.
pub fn try_water(board: &Board) -> Option<(usize, usize)> {
    let open = !(board.occupied() | board.shots());
    open.iter_set_bits().next()
}

/// First unshot water cell on `board`.
pub fn water(board: &Board) -> (usize, usize) {
    try_water(board).expect("no water left")
}

/// First unshot ship cell on `board`.
pub fn ship_cell(board: &Board) -> (usize, usize) {
    let open = board.occupied() & !board.shots();
    open.iter_set_bits().next().expect("no ship cell left")
}

/// No two ships overlap or touch, diagonals included.
pub fn fleet_is_spaced(board: &Board) -> bool {
    let ships: Vec<_> = board.ships().collect();
    for (i, a) in ships.iter().enumerate() {
        for b in ships.iter().skip(i + 1) {
            if !(a.mask().dilate() & b.mask()).is_empty() {
                return false;
            }
        }
    }
    true
}
