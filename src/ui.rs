#![cfg(feature = "std")]

//! Plain-text rendering of boards and shot results.

use std::fmt::Write;
use std::string::String;

use crate::core::{
    board::Board,
    common::{CellView, Shot, ShotMarker, ShotResult},
    config::{ship_name, BOARD_SIZE},
    coord::Coordinate,
};

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
}

fn grid(out: &mut String, symbol: impl Fn(Coordinate) -> char) {
    header(out);
    for r in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", (b'A' + r as u8) as char);
        for c in 0..BOARD_SIZE {
            let ch = Coordinate::new(r, c).map(&symbol).unwrap_or(' ');
            let _ = write!(out, "  {}", ch);
        }
        out.push('\n');
    }
}

/// The owner's own board with ships revealed.
pub fn render_own_board(board: &Board) -> String {
    let mut out = String::new();
    grid(&mut out, |c| match board.cell_view(c) {
        CellView::Empty => '.',
        CellView::Miss => 'o',
        CellView::ShipIntact => 'S',
        CellView::ShipHit => 'X',
    });
    out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    out
}

/// What the owner knows of the opponent board: only its own shots.
pub fn render_target_grid(board: &Board) -> String {
    let mut out = String::new();
    grid(&mut out, |c| match board.shot_at(c) {
        Some(ShotMarker::Hit) => 'X',
        Some(ShotMarker::Miss) => 'o',
        None => '.',
    });
    out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    out
}

/// Opponent grid on top, own board underneath.
pub fn render_player_view(board: &Board) -> String {
    let mut out = std::format!("Player {}'s gameboard\n", board.owner());
    out.push_str("Opponent board:\n");
    out.push_str(&render_target_grid(board));
    out.push_str("\nYour board:\n");
    out.push_str(&render_own_board(board));
    let _ = writeln!(out, "Ships remaining: {}", board.remaining_ships());
    out
}

/// One-line description of a shot, e.g. `"B4: sank the cruiser"`.
pub fn describe_shot(shot: &Shot) -> String {
    let what = match shot.result {
        ShotResult::Miss => String::from("miss"),
        ShotResult::Hit => String::from("hit"),
        ShotResult::Repeat => String::from("already fired there"),
        ShotResult::Sunk(size) => std::format!("sank the {}", ship_name(size).unwrap_or("ship")),
    };
    std::format!("{}: {}", shot.target, what)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board::fire, coord::Direction};

    #[test]
    fn own_board_marks_hits_and_misses() {
        let mut own = Board::new(1);
        let mut other = Board::new(2);
        own.place_ship("A1".parse().unwrap(), Direction::East, 2).unwrap();
        fire(&mut other, &mut own, "A1");
        fire(&mut other, &mut own, "B1");
        let text = render_own_board(&own);
        let row_a = text.lines().nth(1).unwrap();
        let row_b = text.lines().nth(2).unwrap();
        assert!(row_a.starts_with(" A   X  S  ."), "{row_a:?}");
        assert!(row_b.starts_with(" B   o  ."), "{row_b:?}");

        let grid = render_target_grid(&other);
        assert!(grid.lines().nth(1).unwrap().starts_with(" A   X  ."));
    }

    #[test]
    fn describes_sinking_by_name() {
        let shot = Shot {
            target: "C3".parse().unwrap(),
            result: ShotResult::Sunk(5),
        };
        assert_eq!(describe_shot(&shot), "C3: sank the aircraft carrier");
    }
}
