mod common;

use common::{fleet_is_spaced, try_water};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    select_target, Difficulty, Game, GameConfig, GameError, NullSink, Phase, ShotResult, Side,
    SinkDetection, BOARD_SIZE, TOTAL_SHIP_CELLS,
};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard)
    ]
}

fn sink_detection() -> impl Strategy<Value = SinkDetection> {
    prop_oneof![Just(SinkDetection::PerShip), Just(SinkDetection::SharedLength)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Plays whole games and checks the turn rules after every shot.
    #[test]
    fn full_game_follows_turn_rules(
        seed in any::<u64>(),
        computer in difficulty(),
        player in difficulty(),
        rule in sink_detection(),
    ) {
        let config = GameConfig::seeded(seed)
            .with_difficulty(computer)
            .with_sink_detection(rule);
        let mut game = Game::with_sink(config, NullSink).unwrap();
        game.auto_place().unwrap();
        prop_assert!(fleet_is_spaced(game.player_board()));
        prop_assert!(fleet_is_spaced(game.computer_board()));

        let mut rng = SmallRng::seed_from_u64(seed ^ 0xA5A5);
        let mut shots = 0;
        while game.phase() != Phase::GameOver {
            shots += 1;
            prop_assert!(shots <= 200, "game did not finish");
            let attacker = match game.phase() {
                Phase::PlayerTurn => Side::Player,
                Phase::ComputerTurn => Side::Computer,
                other => return Err(TestCaseError::fail(format!("unexpected phase {}", other))),
            };
            let score_before = game.score(attacker);
            let result = match attacker {
                Side::Player => {
                    let (x, y) = select_target(player, game.computer_board(), &mut rng).unwrap();
                    game.shoot_at(x, y).unwrap()
                }
                Side::Computer => game.trigger_computer_shot().unwrap().result,
            };
            match result {
                ShotResult::Miss => {
                    prop_assert_eq!(game.score(attacker), score_before);
                    let expected = match attacker {
                        Side::Player => Phase::ComputerTurn,
                        Side::Computer => Phase::PlayerTurn,
                    };
                    prop_assert_eq!(game.phase(), expected);
                }
                ShotResult::Hit { .. } => {
                    prop_assert_eq!(game.score(attacker), score_before + 1);
                    if game.score(attacker) == TOTAL_SHIP_CELLS {
                        prop_assert_eq!(game.phase(), Phase::GameOver);
                        prop_assert_eq!(game.winner(), Some(attacker));
                    } else {
                        let expected = match attacker {
                            Side::Player => Phase::PlayerTurn,
                            Side::Computer => Phase::ComputerTurn,
                        };
                        prop_assert_eq!(game.phase(), expected);
                    }
                }
            }
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.score(winner), TOTAL_SHIP_CELLS);
        prop_assert!(game.score(winner.opponent()) < TOTAL_SHIP_CELLS);
        prop_assert!(game.board(winner.opponent()).all_sunk());
        prop_assert!(game.board(winner).sunk_count() < 10);
    }

    /// Hits are never double counted: shooting any cell twice fails without
    /// touching score or phase.
    #[test]
    fn reshoot_never_changes_state(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE as usize,
        y in 0..BOARD_SIZE as usize,
    ) {
        let mut game = Game::with_sink(GameConfig::seeded(seed), NullSink).unwrap();
        game.auto_place().unwrap();
        let first = game.shoot_at(x, y).unwrap();
        if !first.is_hit() {
            // Hand the turn back to the player.
            game.run_computer_turn().unwrap();
            if game.phase() != Phase::PlayerTurn {
                return Ok(());
            }
        }
        let before = game.snapshot();
        let err = game.shoot_at(x, y).unwrap_err();
        prop_assert!(matches!(err, GameError::Board(_)));
        prop_assert_eq!(game.snapshot(), before);
    }

    /// Resetting from any point restores a clean placement phase.
    #[test]
    fn reset_from_any_point(seed in any::<u64>(), steps in 0usize..60) {
        let mut game = Game::with_sink(GameConfig::seeded(seed), NullSink).unwrap();
        game.auto_place().unwrap();
        for _ in 0..steps {
            match game.phase() {
                Phase::PlayerTurn => {
                    match try_water(game.computer_board()) {
                        Some((x, y)) => { game.shoot_at(x, y).unwrap(); }
                        None => break,
                    }
                }
                Phase::ComputerTurn => { game.trigger_computer_shot().unwrap(); }
                _ => break,
            }
        }
        game.reset().unwrap();
        let snap = game.snapshot();
        prop_assert_eq!(snap.phase, Phase::Placement);
        prop_assert_eq!(snap.winner, None);
        prop_assert_eq!(snap.player_score, 0);
        prop_assert_eq!(snap.computer_score, 0);
        prop_assert_eq!(snap.cursor.index, 0);
        prop_assert!(game.player_board().shots().is_empty());
        prop_assert!(game.computer_board().shots().is_empty());
        prop_assert_eq!(game.computer_board().occupied_cells(), TOTAL_SHIP_CELLS);
        prop_assert!(fleet_is_spaced(game.computer_board()));
    }
}
