use std::collections::VecDeque;

use broadside::{
    AiPlayer, Board, CliPlayer, Coordinate, Match, MatchPhase, Mode, Player, Shot, MAX_TURNS,
    NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ai_match() -> Match {
    Match::new([Box::new(AiPlayer::new()), Box::new(AiPlayer::new())])
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = ai_match();
    assert_eq!(game.phase(), MatchPhase::Setup);
    game.setup(&mut rng).unwrap();
    assert_eq!(game.phase(), MatchPhase::InProgress);

    let winner = game.run(&mut rng).unwrap();
    assert_eq!(game.phase(), MatchPhase::Finished { winner });

    let loser = if winner == 1 { 2 } else { 1 };
    assert!(game.board(loser).unwrap().is_defeated());
    assert!(!game.board(winner).unwrap().is_defeated());

    let summary = game.summary();
    assert_eq!(summary.winner, Some(winner));
    assert_eq!(summary.shots[0] + summary.shots[1], game.turns());
    assert!(game.turns() <= MAX_TURNS);
    assert_eq!(summary.ships_remaining[(loser - 1) as usize], 0);
}

#[test]
fn test_turns_alternate_starting_with_player_one() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = ai_match();
    game.setup(&mut rng).unwrap();
    for turn in 0..10 {
        let report = game.play_turn(&mut rng).unwrap();
        assert_eq!(report.shooter, if turn % 2 == 0 { 1 } else { 2 });
    }
}

#[test]
fn test_seeded_matches_are_reproducible() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = ai_match();
        let winner = game.run(&mut rng).unwrap();
        (winner, game.summary())
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_no_turns_outside_play() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = ai_match();
    assert!(game.play_turn(&mut rng).is_err());
    game.run(&mut rng).unwrap();
    assert!(game.play_turn(&mut rng).is_err());
    assert!(game.setup(&mut rng).is_err());
}

struct LazyPlayer;

impl Player for LazyPlayer {
    fn place_fleet(&mut self, _rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board
            .place_ship("A1".parse().unwrap(), broadside::Direction::East, 5)
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn take_turn(
        &mut self,
        _rng: &mut SmallRng,
        _own: &mut Board,
        _opponent: &mut Board,
    ) -> anyhow::Result<Shot> {
        anyhow::bail!("never gets a turn")
    }
}

#[test]
fn test_incomplete_fleet_fails_setup() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Match::new([Box::new(LazyPlayer), Box::new(AiPlayer::new())]);
    assert!(game.setup(&mut rng).is_err());
    assert_eq!(game.phase(), MatchPhase::Setup);
}

#[test]
fn test_failed_setup_leaves_boards_empty() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Match::new([Box::new(AiPlayer::new()), Box::new(LazyPlayer)]);
    assert!(game.setup(&mut rng).is_err());
    assert_eq!(game.phase(), MatchPhase::Setup);
    for owner in [1, 2] {
        assert!(game.board(owner).unwrap().ships().is_empty());
    }

    // a retry starts from scratch instead of stacking a second fleet
    assert!(game.setup(&mut rng).is_err());
    assert!(game.board(1).unwrap().ships().is_empty());
}

#[test]
fn test_scripted_human_against_ai() {
    // random placement for every ship, then fire row by row
    let mut script: VecDeque<String> = (0..NUM_SHIPS).map(|_| String::new()).collect();
    script.extend(Coordinate::all().map(|c| c.to_string()));
    let human = CliPlayer::with_io(script, Vec::new());

    let mut rng = SmallRng::seed_from_u64(31);
    let mut game = Match::new([Box::new(human), Box::new(AiPlayer::new())]);
    let winner = game.run(&mut rng).unwrap();
    assert!(winner == 1 || winner == 2);
    assert!(game.board(1).unwrap().has_full_fleet());
}

#[test]
fn test_mode_from_player_count() {
    assert_eq!(Mode::try_from(0u8), Ok(Mode::Spectate));
    assert_eq!(Mode::try_from(1u8), Ok(Mode::Single));
    assert_eq!(Mode::try_from(2u8), Ok(Mode::Duel));
    assert_eq!(Mode::try_from(3u8), Err(3));
    assert_eq!(Mode::Duel.humans(), 2);
}

#[test]
fn test_people_take_the_first_seats() {
    let seats = |mode: Mode| mode.players().map(|p| p.is_human());
    assert_eq!(seats(Mode::Spectate), [false, false]);
    assert_eq!(seats(Mode::Single), [true, false]);
    assert_eq!(seats(Mode::Duel), [true, true]);

    for mode in [Mode::Spectate, Mode::Single, Mode::Duel] {
        let game = Match::new(mode.players());
        assert_eq!(game.humans(), mode.humans() as usize);
    }
}
