//! Player trait and implementations
//!
//! - AiPlayer: hunt-then-follow targeting with random fleet placement
//! - CliPlayer: interactive terminal player

use crate::core::{board::Board, common::Shot};
use rand::rngs::SmallRng;

/// Interface implemented by the participants of a match.
///
/// A Player is responsible for:
/// - Placing its fleet on its own board
/// - Taking exactly one real (non-repeat) shot per turn
/// - Reacting to shots against its board
pub trait Player {
    /// Place the full fleet onto `board`.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()>;

    /// Fire one shot from `own` at `opponent`.
    fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        own: &mut Board,
        opponent: &mut Board,
    ) -> anyhow::Result<Shot>;

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _shot: Shot, _own: &Board) {}

    /// `true` when a person chooses this player's moves.
    fn is_human(&self) -> bool {
        false
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{CliPlayer, LineSource};
