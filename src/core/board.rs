//! Board state: ship placements, incoming fire, and the owner's record of
//! shots against the opponent.

use alloc::{collections::BTreeMap, vec::Vec};
use core::fmt;
use rand::Rng;

use crate::core::{
    common::{BoardError, CellView, FireOutcome, PlacementError, ShotMarker, ShotResult},
    config::{ship_name, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS},
    coord::{parse_coordinate, Coordinate, Direction},
    placement::validate_and_place,
    ship::{Ship, ShipId},
};

/// Contents of one square of a board. `Empty` is what a lookup of an
/// untouched square yields; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Miss,
    Ship(ShipId),
}

pub struct Board {
    owner: u8,
    cells: BTreeMap<Coordinate, CellContent>,
    ships: Vec<Ship>,
    shots: BTreeMap<Coordinate, ShotMarker>,
    remaining_ships: usize,
}

impl Board {
    /// Create an empty board for player `owner`.
    pub fn new(owner: u8) -> Self {
        Board {
            owner,
            cells: BTreeMap::new(),
            ships: Vec::with_capacity(NUM_SHIPS),
            shots: BTreeMap::new(),
            remaining_ships: NUM_SHIPS,
        }
    }

    pub fn owner(&self) -> u8 {
        self.owner
    }

    /// Ships not yet sunk. Starts at the full fleet count.
    pub fn remaining_ships(&self) -> usize {
        self.remaining_ships
    }

    /// `true` once every ship of the fleet has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.remaining_ships == 0
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// `true` when exactly the standard fleet has been placed.
    pub fn has_full_fleet(&self) -> bool {
        let mut sizes: Vec<usize> = self.ships.iter().map(Ship::size).collect();
        sizes.sort_unstable();
        sizes == FLEET
    }

    pub fn content(&self, coord: Coordinate) -> CellContent {
        self.cells.get(&coord).copied().unwrap_or(CellContent::Empty)
    }

    /// `true` if anything (a ship or a miss marker) sits on `coord`.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Owner-facing view of one square.
    pub fn cell_view(&self, coord: Coordinate) -> CellView {
        match self.content(coord) {
            CellContent::Empty => CellView::Empty,
            CellContent::Miss => CellView::Miss,
            CellContent::Ship(id) if self.ships[id].is_afloat_at(coord) => CellView::ShipIntact,
            CellContent::Ship(_) => CellView::ShipHit,
        }
    }

    /// This owner's marker for a square of the opponent board, if fired at.
    pub fn shot_at(&self, coord: Coordinate) -> Option<ShotMarker> {
        self.shots.get(&coord).copied()
    }

    /// Number of squares this owner has fired at.
    pub fn shots_fired(&self) -> usize {
        self.shots.len()
    }

    /// Place a ship of `size` cells starting at `start` and heading
    /// `direction`. Nothing is written unless the whole run is valid.
    pub fn place_ship(
        &mut self,
        start: Coordinate,
        direction: Direction,
        size: usize,
    ) -> Result<ShipId, BoardError> {
        validate_and_place(start, direction, size, self)
    }

    /// Place a ship of `size` at a random valid start and facing.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        size: usize,
    ) -> Result<ShipId, BoardError> {
        if ship_name(size).is_none() {
            return Err(PlacementError::InvalidSize.into());
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let start = Coordinate::random(rng);
            let direction = Direction::random(rng);
            if let Ok(id) = validate_and_place(start, direction, size, self) {
                return Ok(id);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the whole standard fleet at random.
    pub fn place_fleet_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for &size in FLEET.iter() {
            self.place_random(rng, size)?;
        }
        Ok(())
    }

    /// Commit a validated run as a new ship.
    pub(crate) fn commit_ship(&mut self, run: Vec<Coordinate>) -> ShipId {
        let id = self.ships.len();
        for &c in run.iter() {
            self.cells.insert(c, CellContent::Ship(id));
        }
        self.ships.push(Ship::new(run));
        id
    }

    /// Apply an incoming shot at `target`.
    pub fn resolve_shot(&mut self, target: Coordinate) -> ShotResult {
        match self.content(target) {
            CellContent::Empty => {
                self.cells.insert(target, CellContent::Miss);
                ShotResult::Miss
            }
            CellContent::Miss => ShotResult::Repeat,
            CellContent::Ship(id) => {
                let ship = &mut self.ships[id];
                if !ship.strike(target) {
                    return ShotResult::Repeat;
                }
                if ship.is_sunk() {
                    self.remaining_ships = self.remaining_ships.saturating_sub(1);
                    ShotResult::Sunk(ship.size())
                } else {
                    ShotResult::Hit
                }
            }
        }
    }

    pub(crate) fn record_shot(&mut self, target: Coordinate, marker: ShotMarker) {
        self.shots.insert(target, marker);
    }
}

/// Fire from `aggressor` at `target` on `opponent`, recording the marker on
/// the aggressor's side unless the shot was a repeat.
pub fn fire_at(aggressor: &mut Board, opponent: &mut Board, target: Coordinate) -> ShotResult {
    let result = opponent.resolve_shot(target);
    match result {
        ShotResult::Hit | ShotResult::Sunk(_) => aggressor.record_shot(target, ShotMarker::Hit),
        ShotResult::Miss => aggressor.record_shot(target, ShotMarker::Miss),
        ShotResult::Repeat => {}
    }
    log::debug!(
        "player {} fires at {} -> {:?}",
        aggressor.owner(),
        target,
        result
    );
    result
}

/// Fire at typed coordinate text, as entered by a person.
pub fn fire(aggressor: &mut Board, opponent: &mut Board, text: &str) -> FireOutcome {
    let Ok(target) = parse_coordinate(text) else {
        return FireOutcome::InvalidCoordinate;
    };
    match fire_at(aggressor, opponent, target) {
        ShotResult::Miss => FireOutcome::Miss,
        ShotResult::Hit => FireOutcome::Hit,
        ShotResult::Repeat => FireOutcome::Repeat,
        ShotResult::Sunk(size) => FireOutcome::Sunk(ship_name(size).unwrap_or("ship")),
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  owner: {},\n  remaining: {},\n  ships: {:?},\n  shots: {}\n}}",
            self.owner,
            self.remaining_ships,
            self.ships,
            self.shots.len()
        )
    }
}
