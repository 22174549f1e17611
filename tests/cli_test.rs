use std::collections::VecDeque;
use std::io::{self, Write};

use broadside::{
    fire, Board, CellContent, CliPlayer, Coordinate, Direction, Player, ShotResult, NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(text: &str) -> Coordinate {
    text.parse().unwrap()
}

fn scripted(lines: &[&str]) -> CliPlayer<VecDeque<String>, Vec<u8>> {
    CliPlayer::with_io(lines.iter().map(|l| l.to_string()).collect(), Vec::new())
}

fn transcript(player: &CliPlayer<VecDeque<String>, Vec<u8>>) -> String {
    String::from_utf8_lossy(player.output()).into_owned()
}

#[test]
fn test_placement_reprompts_on_bad_input() {
    let mut player = scripted(&[
        "help",
        "Z9 E",  // no row Z
        "A1 Q",  // no such direction
        "A1 E",  // submarine
        "a1 e",  // overlaps the first submarine
        "A3 E",  // submarine
        "C1 E",  // destroyer
        "C4 E",  // destroyer
        "A1 N",  // off the top edge
        "E1 S",  // cruiser
        "H1 E",  // battleship
        "J6 W",  // aircraft carrier
    ]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(1);
    player.place_fleet(&mut rng, &mut board).unwrap();

    assert!(board.has_full_fleet());
    let occupied: Vec<_> = Coordinate::all()
        .filter(|&x| board.content(x) != CellContent::Empty)
        .collect();
    let expected: Vec<_> = [
        "A1", "A3", "C1", "C2", "C4", "C5", "E1", "F1", "G1", "H1", "H2", "H3", "H4", "J2", "J3",
        "J4", "J5", "J6",
    ]
    .iter()
    .map(|s| c(s))
    .collect();
    assert_eq!(occupied, expected);

    let out = transcript(&player);
    assert_eq!(out.matches("✗ Error").count(), 4);
    assert!(out.contains("Format: <ROW><COLUMN> <DIRECTION>"));
    assert!(out.contains("All ships placed"));
}

#[test]
fn test_blank_lines_place_at_random() {
    let blanks = vec![""; NUM_SHIPS];
    let mut player = scripted(&blanks);
    let mut rng = SmallRng::seed_from_u64(8);
    let mut board = Board::new(2);
    player.place_fleet(&mut rng, &mut board).unwrap();
    assert!(board.has_full_fleet());
    assert_eq!(transcript(&player).matches("placed at random").count(), NUM_SHIPS);
}

#[test]
fn test_closed_input_is_an_error() {
    let mut player = scripted(&["A1 E"]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(1);
    assert!(player.place_fleet(&mut rng, &mut board).is_err());
}

#[test]
fn test_turn_retries_until_a_real_shot() {
    let mut own = Board::new(1);
    let mut opponent = Board::new(2);
    opponent.place_ship(c("A1"), Direction::East, 3).unwrap();
    fire(&mut own, &mut opponent, "A2");

    let mut player = scripted(&["K1", "A2", "help", "a1"]);
    let mut rng = SmallRng::seed_from_u64(1);
    let shot = player.take_turn(&mut rng, &mut own, &mut opponent).unwrap();

    assert_eq!(shot.target, c("A1"));
    assert_eq!(shot.result, ShotResult::Hit);
    assert_eq!(own.shots_fired(), 2);

    let out = transcript(&player);
    assert_eq!(out.matches("Please try again").count(), 2);
    assert!(out.contains("Your shot at A1: hit"));
}

#[test]
fn test_hears_about_opponent_shots() {
    let mut player = scripted(&[]);
    let board = Board::new(1);
    let shot = broadside::Shot {
        target: c("B2"),
        result: ShotResult::Miss,
    };
    player.handle_opponent_shot(shot, &board);
    assert!(transcript(&player).contains("Opponent fired at B2: miss"));
    assert!(player.is_human());
}

struct ClosedTerminal;

impl Write for ClosedTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_opponent_report_survives_closed_terminal() {
    let mut player = CliPlayer::with_io(VecDeque::<String>::new(), ClosedTerminal);
    let board = Board::new(1);
    let shot = broadside::Shot {
        target: c("C3"),
        result: ShotResult::Hit,
    };
    player.handle_opponent_shot(shot, &board);
}
