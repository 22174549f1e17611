//! Hunt-then-follow targeting for computer-controlled sides.
//!
//! Random probes until something is hit, then the hit's neighbours, then
//! straight lines along whichever neighbour also hits.

use alloc::collections::VecDeque;
use rand::Rng;

use crate::core::{
    board::{fire_at, Board},
    common::{BoardError, CellView, Shot, ShotMarker, ShotResult},
    config::BOARD_SIZE,
    coord::{Coordinate, Direction},
};

/// A square worth firing at, with the direction from the hit that produced
/// it. Random probes carry no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub target: Coordinate,
    pub direction: Option<Direction>,
}

impl Candidate {
    pub fn probe(target: Coordinate) -> Self {
        Candidate {
            target,
            direction: None,
        }
    }
}

/// FIFO queue of follow-up candidates for one side.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    queue: VecDeque<Candidate>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates still waiting, front first.
    pub fn pending(&self) -> impl Iterator<Item = &Candidate> {
        self.queue.iter()
    }

    pub fn is_hunting(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Next queued candidate, or a random probe when the queue is empty.
    pub fn choose_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Candidate {
        self.queue
            .pop_front()
            .unwrap_or_else(|| Candidate::probe(Coordinate::random(rng)))
    }

    /// Queue follow-ups for a shot taken at `candidate`.
    pub fn observe(&mut self, candidate: Candidate, result: ShotResult) {
        if !result.is_hit() {
            return;
        }
        match candidate.direction {
            Some(direction) => {
                if let Some(next) = candidate.target.step(direction, 1) {
                    self.queue.push_back(Candidate {
                        target: next,
                        direction: Some(direction),
                    });
                }
            }
            None => {
                for (direction, target) in candidate.target.neighbors() {
                    self.queue.push_back(Candidate {
                        target,
                        direction: Some(direction),
                    });
                }
            }
        }
    }

    /// Take one real shot from `own` at `opponent`, skipping squares already
    /// fired at.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        own: &mut Board,
        opponent: &mut Board,
    ) -> Result<Shot, BoardError> {
        loop {
            let candidate =
                choose_heuristic_target(own, self, rng).ok_or(BoardError::NoTargetsRemaining)?;
            let result = fire_at(own, opponent, candidate.target);
            if result == ShotResult::Repeat {
                // Resolved by someone else; adopt what the board shows so the
                // square is not chosen again.
                let marker = match opponent.cell_view(candidate.target) {
                    CellView::ShipHit => ShotMarker::Hit,
                    _ => ShotMarker::Miss,
                };
                own.record_shot(candidate.target, marker);
                continue;
            }
            self.observe(candidate, result);
            return Ok(Shot {
                target: candidate.target,
                result,
            });
        }
    }
}

/// Pick the next square for `board`'s owner to fire at, discarding
/// candidates it has already fired at. `None` once every square is taken.
pub fn choose_heuristic_target<R: Rng + ?Sized>(
    board: &Board,
    targeting: &mut Targeting,
    rng: &mut R,
) -> Option<Candidate> {
    if board.shots_fired() >= BOARD_SIZE * BOARD_SIZE {
        return None;
    }
    loop {
        let candidate = targeting.choose_target(rng);
        if board.shot_at(candidate.target).is_none() {
            return Some(candidate);
        }
    }
}
