//! Core game engine (no_std compatible)
//!
//! Pure game logic: coordinates, placement, shot resolution and the
//! computer targeting heuristic. Needs only `alloc` and `rand`.

pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod placement;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use board::{fire, fire_at, Board, CellContent};
pub use common::{BoardError, CellView, FireOutcome, PlacementError, Shot, ShotMarker, ShotResult};
pub use config::*;
pub use coord::{format_coordinate, parse_coordinate, Coordinate, Direction};
pub use placement::{compute_endpoint, expand_run, validate_and_place};
pub use ship::{Ship, ShipId};
pub use targeting::{choose_heuristic_target, Candidate, Targeting};
