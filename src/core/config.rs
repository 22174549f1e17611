/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Ship sizes every side places during setup, in placement order.
pub const FLEET: [usize; 7] = [1, 1, 2, 2, 3, 4, 5];
pub const NUM_SHIPS: usize = FLEET.len();

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 1 + 2 + 2 + 3 + 4 + 5;

/// Random placement gives up after this many rejected attempts.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Ship class names keyed by size. Size doubles as the ship type.
pub const SHIP_NAMES: [(usize, &str); 5] = [
    (1, "submarine"),
    (2, "destroyer"),
    (3, "cruiser"),
    (4, "battleship"),
    (5, "aircraft carrier"),
];

/// Look up the class name for a ship size. Returns `None` for sizes outside
/// the fixed table.
pub fn ship_name(size: usize) -> Option<&'static str> {
    SHIP_NAMES
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, name)| *name)
}

/// Inverse of [`ship_name`].
pub fn ship_size(name: &str) -> Option<usize> {
    SHIP_NAMES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(size, _)| *size)
}
