#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::{self, Write};
use std::string::String;

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use crate::core::{
    board::{fire, Board},
    common::{BoardError, Shot},
    config::{ship_name, FLEET, NUM_SHIPS},
    coord::{parse_coordinate, Coordinate, Direction},
};
use crate::ui::{describe_shot, render_own_board, render_player_view};

use super::Player;

/// Where a terminal player reads its answers from.
pub trait LineSource {
    /// Next line of input, `None` once input is closed.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Scripted input, one entry per line.
impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Human player driven through a terminal.
pub struct CliPlayer<I = io::Stdin, W = io::Stdout> {
    input: I,
    output: W,
}

impl CliPlayer {
    /// Player reading stdin and writing stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin(), io::stdout())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: LineSource, W: Write> CliPlayer<I, W> {
    pub fn with_io(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        match self.input.next_line().context("failed to read input")? {
            Some(line) => Ok(line.trim().to_string()),
            None => bail!("input closed"),
        }
    }

    fn place_one(&mut self, rng: &mut SmallRng, board: &mut Board, index: usize, size: usize) -> anyhow::Result<()> {
        let name = ship_name(size).unwrap_or("ship");
        loop {
            write!(self.output, "\n{}", render_own_board(board))?;
            writeln!(self.output, "\nShip {}/{}: {} (length {})", index + 1, NUM_SHIPS, name, size)?;
            let line = self.prompt(&std::format!(
                "Player {}, enter start and direction (e.g. A5 E), ENTER for random, 'help' for help: ",
                board.owner()
            ))?;

            if line.is_empty() {
                board.place_random(rng, size).map_err(|e| anyhow::anyhow!(e))?;
                writeln!(self.output, "✓ {} placed at random", name)?;
                return Ok(());
            }
            if line.eq_ignore_ascii_case("help") {
                print_placement_help(&mut self.output)?;
                continue;
            }

            let mut parts = line.split_whitespace();
            let start = match parts.next().map(parse_coordinate) {
                Some(Ok(start)) => start,
                _ => {
                    log::debug!("rejected placement start {:?}", line);
                    writeln!(self.output, "✗ Error: {}", BoardError::InvalidCoordinate)?;
                    continue;
                }
            };
            let direction = match (parts.next().map(str::parse::<Direction>), parts.next()) {
                (Some(Ok(direction)), None) => direction,
                _ => {
                    writeln!(self.output, "✗ Error: direction must be one of N, E, S, W")?;
                    continue;
                }
            };

            match board.place_ship(start, direction, size) {
                Ok(_) => {
                    writeln!(self.output, "✓ {} placed from {} facing {}", name, start, direction)?;
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("rejected placement {} {} size {}: {}", start, direction, size, e);
                    writeln!(self.output, "✗ Error: {}", e)?;
                    writeln!(self.output, "   Hint: Make sure the ship fits and doesn't overlap with others.")?;
                }
            }
        }
    }
}

impl<I: LineSource, W: Write> Player for CliPlayer<I, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        writeln!(self.output, "\n════════════════════════════════════════════════════════════")?;
        writeln!(self.output, "              PLAYER {} SHIP PLACEMENT", board.owner())?;
        writeln!(self.output, "════════════════════════════════════════════════════════════")?;
        for (index, &size) in FLEET.iter().enumerate() {
            self.place_one(rng, board, index, size)?;
        }
        writeln!(self.output, "\n✓ All ships placed! Ready to begin battle.\n")?;
        Ok(())
    }

    fn take_turn(
        &mut self,
        _rng: &mut SmallRng,
        own: &mut Board,
        opponent: &mut Board,
    ) -> anyhow::Result<Shot> {
        write!(self.output, "\n{}", render_player_view(own))?;
        loop {
            let line = self.prompt(&std::format!(
                "\nPlayer {}, select a coordinate to fire at (or 'help'): ",
                own.owner()
            ))?;
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help(&mut self.output)?;
                continue;
            }

            let outcome = fire(own, opponent, &line);
            if let Some(err) = outcome.rejection() {
                log::debug!("player {} shot {:?} rejected: {}", own.owner(), line, err);
                writeln!(self.output, "✗ {}. Please try again.", err)?;
                continue;
            }
            let target: Coordinate = parse_coordinate(&line).map_err(|e| anyhow::anyhow!(e))?;
            let result = outcome
                .shot_result()
                .context("accepted shot without an engine result")?;
            let shot = Shot { target, result };
            writeln!(self.output, "Your shot at {}", describe_shot(&shot))?;
            return Ok(shot);
        }
    }

    fn handle_opponent_shot(&mut self, shot: Shot, own: &Board) {
        if let Err(e) = writeln!(
            self.output,
            "\nOpponent fired at {} ({} ships left)",
            describe_shot(&shot),
            own.remaining_ships()
        ) {
            log::debug!("player {} missed an opponent shot report: {}", own.owner(), e);
        }
    }

    fn is_human(&self) -> bool {
        true
    }
}

fn print_placement_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nFormat: <ROW><COLUMN> <DIRECTION>")?;
    writeln!(out, "  A5 E   - ship starts at A5 and extends east (A5, A6, ...)")?;
    writeln!(out, "  C3 S   - ship starts at C3 and extends south (C3, D3, ...)")?;
    writeln!(out, "Rows: A-J (A is topmost), columns: 1-10 (1 is leftmost)")?;
    writeln!(out, "Directions: N, E, S, W")?;
    writeln!(out, "Press ENTER without input to place the current ship at random.\n")
}

fn print_targeting_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nFormat: <ROW><COLUMN>, e.g. A5, B10, J1")?;
    writeln!(out, "Board symbols:")?;
    writeln!(out, "  X = Hit (you struck an enemy ship)")?;
    writeln!(out, "  o = Miss (shot hit water)")?;
    writeln!(out, "  . = Unknown (not yet targeted)\n")
}
