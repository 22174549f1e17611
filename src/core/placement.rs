//! Turning a start square, facing and length into a validated ship run.

use alloc::vec::Vec;
use core::cmp::{max, min};

use crate::core::{
    board::Board,
    common::{BoardError, PlacementError},
    config::ship_name,
    coord::{Coordinate, Direction},
    ship::ShipId,
};

/// Terminal cell of a run of `size` cells starting at `start` and heading
/// `direction`. `None` if it falls off the board or `size` is zero.
pub fn compute_endpoint(size: usize, start: Coordinate, direction: Direction) -> Option<Coordinate> {
    if size == 0 {
        return None;
    }
    start.step(direction, size - 1)
}

/// Every cell between `start` and `end` inclusive, ascending along the axis
/// that varies. `None` unless the two share a row or a column.
pub fn expand_run(start: Coordinate, end: Coordinate) -> Option<Vec<Coordinate>> {
    if start.row() == end.row() {
        let (lo, hi) = (min(start.col(), end.col()), max(start.col(), end.col()));
        (lo..=hi).map(|c| Coordinate::new(start.row(), c)).collect()
    } else if start.col() == end.col() {
        let (lo, hi) = (min(start.row(), end.row()), max(start.row(), end.row()));
        (lo..=hi).map(|r| Coordinate::new(r, start.col())).collect()
    } else {
        None
    }
}

/// Validate a placement and commit it to `board` only if every check passes.
/// On error the board is left untouched.
pub fn validate_and_place(
    start: Coordinate,
    direction: Direction,
    size: usize,
    board: &mut Board,
) -> Result<ShipId, BoardError> {
    if ship_name(size).is_none() {
        return Err(PlacementError::InvalidSize.into());
    }
    let end = compute_endpoint(size, start, direction).ok_or(PlacementError::OutOfBounds)?;
    let run = expand_run(start, end).ok_or(PlacementError::NotStraight)?;
    if run.len() != size {
        return Err(PlacementError::WrongLength.into());
    }
    if run.iter().any(|&c| board.is_occupied(c)) {
        return Err(PlacementError::Overlaps.into());
    }
    Ok(board.commit_ship(run))
}
