//! Grid coordinates and compass directions.
//!
//! Rows are lettered `A`-`J` and columns numbered `1`-`10` in the human form,
//! so `"C7"` is row 2, column 6.

use alloc::string::String;
use core::{fmt, str::FromStr};

use rand::Rng;

use crate::core::{common::BoardError, config::BOARD_SIZE};

/// A square on the board. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` unless both indices are below `BOARD_SIZE`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Shift by a signed amount on each axis.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = (self.row as isize).checked_add(d_row)?;
        let col = (self.col as isize).checked_add(d_col)?;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Move `distance` squares in `direction`.
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let distance = distance as isize;
        self.offset(d_row * distance, d_col * distance)
    }

    /// In-bounds orthogonal neighbours, each tagged with the direction that
    /// leads to it, in the order N, S, W, E.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Coordinate)> {
        [Direction::North, Direction::South, Direction::West, Direction::East]
            .into_iter()
            .filter_map(move |d| self.step(d, 1).map(|c| (d, c)))
    }

    /// Every square, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Coordinate { row: r as u8, col: c as u8 }))
    }

    /// A uniformly random square.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Coordinate {
            row: rng.random_range(0..BOARD_SIZE) as u8,
            col: rng.random_range(0..BOARD_SIZE) as u8,
        }
    }
}

/// Parse `"B7"`-style text. The row letter is case-insensitive; the column
/// must be `1`-`10` written without sign or leading zeros.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, BoardError> {
    let mut chars = text.chars();
    let letter = chars.next().ok_or(BoardError::InvalidCoordinate)?;
    if !letter.is_ascii_alphabetic() {
        return Err(BoardError::InvalidCoordinate);
    }
    let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoardError::InvalidCoordinate);
    }
    let number: usize = digits.parse().map_err(|_| BoardError::InvalidCoordinate)?;
    if number == 0 {
        return Err(BoardError::InvalidCoordinate);
    }
    Coordinate::new(row, number - 1).ok_or(BoardError::InvalidCoordinate)
}

/// Uppercase letter followed by the 1-based column.
pub fn format_coordinate(coord: Coordinate) -> String {
    alloc::format!("{}", coord)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

/// Compass facing. North and South move along rows, East and West along
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// (row, column) change for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ();

    /// Accepts exactly one of `N`, `E`, `S`, `W` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(());
        };
        match ch.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            _ => Err(()),
        }
    }
}
