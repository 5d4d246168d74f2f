mod common;

use common::layout_board;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{hunt_target, random_target, select_target, Board, Difficulty, Orientation};

#[test]
fn test_hunt_follows_single_hit() {
    let mut board = Board::new();
    board.place(0, 3, 5, Orientation::Horizontal).unwrap();
    board.receive_shot(4, 5).unwrap();
    // Neighbours are probed down, right, up, left.
    assert_eq!(hunt_target(&board), Some((4, 6)));

    board.receive_shot(4, 6).unwrap();
    assert_eq!(hunt_target(&board), Some((5, 5)));

    board.receive_shot(5, 5).unwrap();
    // (5, 5) is also a hit, but (4, 5) comes first in the scan.
    assert_eq!(hunt_target(&board), Some((4, 4)));
}

#[test]
fn test_hunt_skips_edges_and_exhausted_hits() {
    let mut board = Board::new();
    board.place(6, 9, 9, Orientation::Horizontal).unwrap();
    board.receive_shot(9, 9).unwrap();
    // Down and right are off the board.
    assert_eq!(hunt_target(&board), Some((9, 8)));

    board.receive_shot(9, 8).unwrap();
    board.receive_shot(8, 9).unwrap();
    assert_eq!(hunt_target(&board), None);
}

#[test]
fn test_hunt_ignores_misses() {
    let mut board = layout_board();
    board.receive_shot(9, 9).unwrap();
    assert_eq!(hunt_target(&board), None);
}

#[test]
fn test_hard_picks_neighbour_regardless_of_seed() {
    let mut board = layout_board();
    board.receive_shot(1, 0).unwrap();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(
            select_target(Difficulty::Hard, &board, &mut rng),
            Some((1, 1))
        );
    }
}

#[test]
fn test_hard_without_hits_is_random_unshot() {
    let mut board = layout_board();
    board.receive_shot(9, 9).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..50 {
        let (x, y) = select_target(Difficulty::Hard, &board, &mut rng).unwrap();
        assert!(!board.is_shot(x, y));
    }
}

#[test]
fn test_random_target_never_repeats_and_exhausts() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..100 {
        let (x, y) = random_target(&board, &mut rng).unwrap();
        board.receive_shot(x, y).unwrap();
    }
    assert_eq!(random_target(&board, &mut rng), None);
    assert_eq!(select_target(Difficulty::Hard, &board, &mut rng), None);
}

#[test]
fn test_easy_is_uniform_over_unshot_cells() {
    let mut board = Board::new();
    for x in 0..10 {
        board.receive_shot(x, 0).unwrap();
    }
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut counts = [[0u32; 10]; 10];
    const TRIALS: u32 = 45_000;
    for _ in 0..TRIALS {
        let (x, y) = select_target(Difficulty::Easy, &board, &mut rng).unwrap();
        counts[y][x] += 1;
    }
    assert!(counts[0].iter().all(|&c| c == 0));
    let expected = TRIALS as f64 / 90.0;
    for row in &counts[1..] {
        for &c in row {
            let deviation = (c as f64 - expected).abs() / expected;
            assert!(deviation < 0.25, "count {} vs expected {}", c, expected);
        }
    }
}

#[test]
fn test_medium_mixes_hunting_and_random() {
    let mut board = layout_board();
    board.receive_shot(1, 0).unwrap();
    let mut rng = SmallRng::seed_from_u64(77);
    let trials = 2000;
    let hunted = (0..trials)
        .filter(|_| select_target(Difficulty::Medium, &board, &mut rng) == Some((1, 1)))
        .count();
    // About 30% hunt, plus the odd random pick landing on the same cell.
    let share = hunted as f64 / trials as f64;
    assert!(share > 0.22 && share < 0.40, "hunt share {}", share);
}

#[test]
fn test_same_seed_same_choices() {
    let board = layout_board();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut a = SmallRng::seed_from_u64(31);
        let mut b = SmallRng::seed_from_u64(31);
        let first: Vec<_> = (0..30)
            .map(|_| select_target(difficulty, &board, &mut a))
            .collect();
        let second: Vec<_> = (0..30)
            .map(|_| select_target(difficulty, &board, &mut b))
            .collect();
        assert_eq!(first, second);
    }
}

#[test]
fn test_difficulty_parsing() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("brutal".parse::<Difficulty>().is_err());
    assert_eq!(Difficulty::default(), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.to_string(), "medium");
}
