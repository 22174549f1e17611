use crate::core::{board::Board, common::Shot, targeting::Targeting};
use rand::rngs::SmallRng;

use super::Player;

/// Computer player: random fleet, hunt-then-follow shots.
#[derive(Debug, Default)]
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board
            .place_fleet_random(rng)
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        own: &mut Board,
        opponent: &mut Board,
    ) -> anyhow::Result<Shot> {
        self.targeting
            .take_turn(rng, own, opponent)
            .map_err(|e| anyhow::anyhow!(e))
    }
}
