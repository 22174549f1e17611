//! Commonly used types and utilities for ease of import.

pub use crate::{
    fire, fire_at, parse_coordinate, AiPlayer, Board, BoardError, Coordinate, Direction,
    FireOutcome, Match, MatchPhase, Mode, Player, ShotResult, Targeting,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    ui::{describe_shot, render_own_board, render_player_view, render_target_grid},
    CliPlayer,
};
