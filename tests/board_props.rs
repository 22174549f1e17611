use broadside::{Board, CellView, Coordinate, ShotResult, BOARD_SIZE, NUM_SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(1);
    board.place_fleet_random(&mut rng).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let _ = board.resolve_shot(Coordinate::random(&mut rng));
    }
    board
}

fn snapshot(board: &Board) -> Vec<CellView> {
    Coordinate::all().map(|c| board.cell_view(c)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_shot_is_repeat_and_changes_nothing(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        let target = Coordinate::new(row, col).unwrap();
        let _ = board.resolve_shot(target);
        let views = snapshot(&board);
        let remaining = board.remaining_ships();

        prop_assert_eq!(board.resolve_shot(target), ShotResult::Repeat);
        prop_assert_eq!(board.resolve_shot(target), ShotResult::Repeat);
        prop_assert_eq!(snapshot(&board), views);
        prop_assert_eq!(board.remaining_ships(), remaining);
    }

    #[test]
    fn remaining_matches_afloat_ships(seed in any::<u64>()) {
        let board = random_board(seed);
        let afloat = board.ships().iter().filter(|s| !s.is_sunk()).count();
        prop_assert_eq!(board.remaining_ships(), afloat);
        prop_assert!(board.remaining_ships() <= NUM_SHIPS);
        prop_assert_eq!(board.is_defeated(), afloat == 0);
    }
}
