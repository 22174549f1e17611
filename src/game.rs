//! Match loop: two boards, two players, alternating turns.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    core::{board::Board, common::Shot, config::BOARD_SIZE},
    player::Player,
};

/// Upper bound on turns per match. Each side has at most one real shot per
/// square, so a well-behaved match always ends before this.
pub const MAX_TURNS: usize = 2 * BOARD_SIZE * BOARD_SIZE;

/// How many of the two seats are played by people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two computer players.
    Spectate,
    /// Person as player 1, computer as player 2.
    Single,
    /// Two people sharing the terminal.
    Duel,
}

impl Mode {
    pub fn humans(self) -> u8 {
        match self {
            Mode::Spectate => 0,
            Mode::Single => 1,
            Mode::Duel => 2,
        }
    }
}

#[cfg(feature = "std")]
impl Mode {
    /// Seat the players for this mode. People take the first seats, so a
    /// single person always moves first.
    pub fn players(self) -> [Box<dyn Player>; 2] {
        use crate::player::{AiPlayer, CliPlayer};

        match self {
            Mode::Spectate => [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())],
            Mode::Single => [Box::new(CliPlayer::new()), Box::new(AiPlayer::new())],
            Mode::Duel => [Box::new(CliPlayer::new()), Box::new(CliPlayer::new())],
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = u8;

    fn try_from(humans: u8) -> Result<Self, Self::Error> {
        match humans {
            0 => Ok(Mode::Spectate),
            1 => Ok(Mode::Single),
            2 => Ok(Mode::Duel),
            other => Err(other),
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Setup,
    InProgress,
    /// Terminal. `winner` is the owner number of the surviving board.
    Finished { winner: u8 },
}

/// A shot together with the player who took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: u8,
    pub shot: Shot,
}

/// End-of-match statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Option<u8>,
    pub turns: usize,
    pub shots: [usize; 2],
    pub ships_remaining: [usize; 2],
}

pub struct Match {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    phase: MatchPhase,
    active: usize,
    turns: usize,
}

impl Match {
    /// New match in the setup phase. `players[0]` owns board 1 and moves
    /// first.
    pub fn new(players: [Box<dyn Player>; 2]) -> Self {
        Self {
            boards: [Board::new(1), Board::new(2)],
            players,
            phase: MatchPhase::Setup,
            active: 0,
            turns: 0,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Board owned by player `owner` (1 or 2).
    pub fn board(&self, owner: u8) -> Option<&Board> {
        self.boards.iter().find(|b| b.owner() == owner)
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Number of seats taken by people.
    pub fn humans(&self) -> usize {
        self.players.iter().filter(|p| p.is_human()).count()
    }

    /// Let both players place their fleets.
    pub fn setup(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        if self.phase != MatchPhase::Setup {
            anyhow::bail!("match is already past setup");
        }
        if let Err(e) = self.place_fleets(rng) {
            // start over from empty boards on the next attempt
            self.boards = [Board::new(1), Board::new(2)];
            return Err(e);
        }
        self.phase = MatchPhase::InProgress;
        log::info!("both fleets placed, match in progress");
        Ok(())
    }

    fn place_fleets(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        for (player, board) in self.players.iter_mut().zip(self.boards.iter_mut()) {
            player.place_fleet(rng, board)?;
            if !board.has_full_fleet() {
                anyhow::bail!("player {} did not place the full fleet", board.owner());
            }
        }
        Ok(())
    }

    /// Active player takes one shot. The match finishes as soon as the
    /// opponent has no ships left.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if self.phase != MatchPhase::InProgress {
            anyhow::bail!("no turn to play in phase {:?}", self.phase);
        }
        let (first, second) = self.boards.split_at_mut(1);
        let (own, opponent) = if self.active == 0 {
            (&mut first[0], &mut second[0])
        } else {
            (&mut second[0], &mut first[0])
        };

        let shot = self.players[self.active].take_turn(rng, own, opponent)?;
        self.players[1 - self.active].handle_opponent_shot(shot, opponent);
        self.turns += 1;

        let report = TurnReport {
            shooter: own.owner(),
            shot,
        };
        if opponent.is_defeated() {
            self.phase = MatchPhase::Finished {
                winner: own.owner(),
            };
            log::info!("player {} wins after {} turns", own.owner(), self.turns);
        } else {
            self.active = 1 - self.active;
        }
        Ok(report)
    }

    /// Run setup if needed, then turns until someone wins. Returns the
    /// winner's owner number.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<u8> {
        self.run_with(rng, |_| {})
    }

    /// Like [`Match::run`], calling `on_turn` after every shot.
    pub fn run_with<F: FnMut(&TurnReport)>(
        &mut self,
        rng: &mut SmallRng,
        mut on_turn: F,
    ) -> anyhow::Result<u8> {
        if self.phase == MatchPhase::Setup {
            self.setup(rng)?;
        }
        loop {
            if let MatchPhase::Finished { winner } = self.phase {
                return Ok(winner);
            }
            if self.turns >= MAX_TURNS {
                log::warn!("match aborted after {} turns", self.turns);
                anyhow::bail!("match did not finish within {} turns", MAX_TURNS);
            }
            let report = self.play_turn(rng)?;
            on_turn(&report);
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: match self.phase {
                MatchPhase::Finished { winner } => Some(winner),
                _ => None,
            },
            turns: self.turns,
            shots: [self.boards[0].shots_fired(), self.boards[1].shots_fired()],
            ships_remaining: [
                self.boards[0].remaining_ships(),
                self.boards[1].remaining_ships(),
            ],
        }
    }
}
