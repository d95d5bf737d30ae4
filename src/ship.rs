//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Decks extend along the row, column increasing.
    Horizontal,
    /// Decks extend down the column, row increasing.
    Vertical,
}

/// A straight ship anchored at its bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    bow: Coordinate,
    length: u8,
    remaining_hits: u8,
}

impl Ship {
    /// Construct an undamaged ship. Bounds are checked when it is placed.
    pub const fn new(orientation: Orientation, bow: Coordinate, length: u8) -> Self {
        Self {
            orientation,
            bow,
            length,
            remaining_hits: length,
        }
    }

    /// The `length` cells starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (bow, orientation) = (self.bow, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(bow.row(), bow.col().saturating_add(i)),
            Orientation::Vertical => Coordinate::new(bow.row().saturating_add(i), bow.col()),
        })
    }

    /// True if one of the decks sits on `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record one damaged deck.
    pub fn register_hit(&mut self) -> Result<(), BoardError> {
        if self.remaining_hits == 0 {
            return Err(BoardError::InvalidState);
        }
        self.remaining_hits -= 1;
        Ok(())
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Decks not yet hit.
    pub fn remaining_hits(&self) -> u8 {
        self.remaining_hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: {}, orientation: {:?}, length: {}, remaining_hits: {} }}",
            self.bow, self.orientation, self.length, self.remaining_hits,
        )
    }
}
