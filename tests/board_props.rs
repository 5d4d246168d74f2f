mod common;

use common::{fleet_is_spaced, layout_board};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Board, BoardError, GameConfig, Orientation, BOARD_SIZE, TOTAL_SHIP_CELLS};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_place_always_yields_spaced_standard_fleet(seed in any::<u64>()) {
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        board.auto_place(&mut rng, &GameConfig::default()).unwrap();
        prop_assert!(board.is_fleet_complete());
        prop_assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
        prop_assert!(fleet_is_spaced(&board));
    }

    /// Arbitrary placement attempts never produce touching ships, and a
    /// rejected attempt never changes the board.
    #[test]
    fn manual_placement_keeps_spacing(
        attempts in prop::collection::vec(
            (0..BOARD_SIZE as usize + 1, 0..BOARD_SIZE as usize + 1, orientation()),
            1..80,
        )
    ) {
        let mut board = Board::new();
        let mut next = 0usize;
        for (x, y, o) in attempts {
            if next == seabattle::NUM_SHIPS {
                break;
            }
            let length = seabattle::FLEET[next];
            let allowed = board.can_place(x, y, length, o);
            let before = board.snapshot();
            match board.place(next, x, y, o) {
                Ok(()) => {
                    prop_assert!(allowed);
                    next += 1;
                }
                Err(_) => {
                    prop_assert!(!allowed);
                    prop_assert_eq!(board.snapshot(), before);
                }
            }
            prop_assert!(fleet_is_spaced(&board));
        }
    }

    #[test]
    fn reshoot_is_rejected(x in 0..BOARD_SIZE as usize, y in 0..BOARD_SIZE as usize) {
        let mut board = layout_board();
        board.receive_shot(x, y).unwrap();
        let after_first = board.snapshot();
        let err = board.receive_shot(x, y).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyShot { x, y });
        prop_assert_eq!(board.snapshot(), after_first);
    }
}
