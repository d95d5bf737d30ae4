//! Common types for the engine: board errors and shot outcomes.

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot hit nothing.
    Miss,
    /// Shot destroyed the last deck of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the attacker moves again after this outcome.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// A resolved shot: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Target lies outside the playable grid.
    OutOfBounds(Coordinate),
    /// Target was already fired on, or lies in the margin of a sunk ship.
    AlreadyTargeted(Coordinate),
    /// Ship leaves the grid, overlaps or touches another ship, or the fleet
    /// is already complete.
    ShipPlacementRejected,
    /// Random fleet generation ran out of attempts.
    PlacementBudgetExhausted,
    /// Shot fired before the board left the placement phase.
    PlacementOpen,
    /// Placement attempted after the board entered play.
    PlacementClosed,
    /// A ship was hit after it had already sunk.
    InvalidState,
}

impl BoardError {
    /// Conditions a player recovers from by choosing another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds(c) => write!(f, "Coordinates {} are outside the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "A shot at {} was already made", c),
            BoardError::ShipPlacementRejected => write!(f, "Ship cannot be placed there"),
            BoardError::PlacementBudgetExhausted => {
                write!(f, "Ran out of attempts while placing the fleet")
            }
            BoardError::PlacementOpen => write!(f, "Board is still being set up"),
            BoardError::PlacementClosed => write!(f, "Board is already in play"),
            BoardError::InvalidState => write!(f, "Ship is already sunk"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
