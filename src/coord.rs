//! Board coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A `(row, col)` cell address. The playable range is `1..=BOARD_SIZE` on both
/// axes; construction does not validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

const NEIGHBOR_OFFSETS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    /// True when both axes lie in `1..=BOARD_SIZE`.
    pub const fn in_bounds(&self) -> bool {
        self.row >= 1 && self.row <= BOARD_SIZE && self.col >= 1 && self.col <= BOARD_SIZE
    }

    /// The in-bounds cells of the 3×3 block centred on this coordinate,
    /// including the coordinate itself.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let cell = Coordinate::new(row, col);
            cell.in_bounds().then_some(cell)
        })
    }

    /// Every playable coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
