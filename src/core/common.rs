//! Common types for the engine: board errors, shot outcomes and cell views.

use crate::core::{config::ship_size, coord::Coordinate};

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot missed every ship and left a miss marker.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Cell was already resolved; nothing changed.
    Repeat,
    /// Shot struck the last afloat cell of a ship, carrying its size.
    Sunk(usize),
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk(_))
    }
}

/// Outcome of firing at a typed coordinate, as reported to the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Miss,
    Hit,
    /// Sank a ship, carrying its class name.
    Sunk(&'static str),
    Repeat,
    InvalidCoordinate,
}

impl FireOutcome {
    /// The recoverable error behind a rejected shot, if any. The caller is
    /// expected to ask for another target when this is `Some`.
    pub fn rejection(self) -> Option<BoardError> {
        match self {
            FireOutcome::Repeat => Some(BoardError::RepeatShot),
            FireOutcome::InvalidCoordinate => Some(BoardError::InvalidCoordinate),
            _ => None,
        }
    }

    /// The engine result behind an accepted shot.
    pub fn shot_result(self) -> Option<ShotResult> {
        match self {
            FireOutcome::Miss => Some(ShotResult::Miss),
            FireOutcome::Hit => Some(ShotResult::Hit),
            FireOutcome::Sunk(name) => ship_size(name).map(ShotResult::Sunk),
            FireOutcome::Repeat => Some(ShotResult::Repeat),
            FireOutcome::InvalidCoordinate => None,
        }
    }
}

/// Marker recorded on the aggressor's side for each square it fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotMarker {
    Hit,
    Miss,
}

/// What the owner sees on one square of their own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Miss,
    ShipIntact,
    ShipHit,
}

/// A shot that was actually taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Why a ship could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Size has no entry in the ship table.
    InvalidSize,
    /// The run would leave the board.
    OutOfBounds,
    /// Endpoints share neither a row nor a column.
    NotStraight,
    /// Expanded run does not have the requested number of cells.
    WrongLength,
    /// A cell of the run is already taken.
    Overlaps,
}

/// Errors returned by board operations. Every variant is recoverable by
/// asking for different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Malformed or out-of-range coordinate text.
    InvalidCoordinate,
    /// Ship placement rejected.
    InvalidPlacement(PlacementError),
    /// Target was already resolved.
    RepeatShot,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Every square has already been fired at.
    NoTargetsRemaining,
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidPlacement(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::InvalidSize => write!(f, "no ship has that size"),
            PlacementError::OutOfBounds => write!(f, "ship would leave the board"),
            PlacementError::NotStraight => write!(f, "ship must lie along one row or column"),
            PlacementError::WrongLength => write!(f, "ship run has the wrong length"),
            PlacementError::Overlaps => write!(f, "ship overlaps another ship"),
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate => write!(f, "Coordinate must be a letter A-J followed by 1-10"),
            BoardError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            BoardError::RepeatShot => write!(f, "That square has already been fired at"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NoTargetsRemaining => write!(f, "Every square has already been fired at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
