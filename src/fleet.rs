//! Random fleet generation.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPT_BUDGET};
use crate::coord::Coordinate;
use crate::random::RandomSource;
use crate::ship::{Orientation, Ship};

/// Places the standard fleet at random positions.
pub struct FleetPlacer;

impl FleetPlacer {
    /// Try to place every ship of [`FLEET`] onto a fresh board.
    ///
    /// All ships share one budget of [`PLACEMENT_ATTEMPT_BUDGET`] attempts; when
    /// it runs out the partial board is dropped and
    /// `BoardError::PlacementBudgetExhausted` is returned. On success the board
    /// is already finalized and ready for play.
    pub fn try_generate<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let mut attempts = 0u32;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > PLACEMENT_ATTEMPT_BUDGET {
                    return Err(BoardError::PlacementBudgetExhausted);
                }
                let ship = Self::candidate(rng, length);
                match board.place_ship(ship) {
                    Ok(()) => break,
                    Err(BoardError::ShipPlacementRejected) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.finalize_placement()?;
        log::debug!("fleet placed after {} attempts", attempts);
        Ok(board)
    }

    /// Generate boards until one succeeds.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Board {
        let mut discarded = 0usize;
        loop {
            match Self::try_generate(rng) {
                Ok(board) => return board,
                Err(e) => {
                    discarded += 1;
                    log::debug!("discarding board #{}: {}", discarded, e);
                }
            }
        }
    }

    fn candidate<R: RandomSource + ?Sized>(rng: &mut R, length: u8) -> Ship {
        let orientation = if rng.uniform_int(0, 1) == 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let bow = Coordinate::new(rng.uniform_int(1, BOARD_SIZE), rng.uniform_int(1, BOARD_SIZE));
        Ship::new(orientation, bow, length)
    }
}
