//! A single vessel and the cells it still holds.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::core::{config::ship_name, coord::Coordinate};

/// Index of a ship within its owning board.
pub type ShipId = usize;

/// A straight-line ship. `afloat` starts as the full run and shrinks as hits
/// land; the ship is sunk once it is empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    afloat: BTreeSet<Coordinate>,
}

impl Ship {
    /// Create a ship covering `cells`. Its size is the number of cells.
    pub fn new<I: IntoIterator<Item = Coordinate>>(cells: I) -> Self {
        let afloat: BTreeSet<Coordinate> = cells.into_iter().collect();
        Ship {
            size: afloat.len(),
            afloat,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Class name, e.g. `"cruiser"` for size 3.
    pub fn name(&self) -> &'static str {
        ship_name(self.size).unwrap_or("ship")
    }

    /// Remove `coord` from the afloat set. Returns `true` if it was there.
    pub fn strike(&mut self, coord: Coordinate) -> bool {
        self.afloat.remove(&coord)
    }

    pub fn is_afloat_at(&self, coord: Coordinate) -> bool {
        self.afloat.contains(&coord)
    }

    pub fn is_sunk(&self) -> bool {
        self.afloat.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, afloat: {} }}",
            self.name(),
            self.size,
            self.afloat.len(),
        )
    }
}
