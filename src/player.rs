//! The two kinds of participant and how each takes a turn.

use crate::board::Board;
use crate::common::Shot;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::game::{MatchError, Side};
use crate::input::{InputError, InputSource};
use crate::observer::MatchObserver;
use crate::random::RandomSource;

/// A participant, distinguished only by where its targets come from.
#[derive(Debug)]
pub enum Player<I, R> {
    /// Targets are typed in by a person.
    Human(I),
    /// Targets are drawn uniformly at random.
    Computer(R),
}

impl<I, R> Player<I, R>
where
    I: InputSource,
    R: RandomSource,
{
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human(_))
    }

    /// Pick the next coordinate to fire at.
    ///
    /// Malformed human input is reported to `observer` and asked for again.
    pub fn produce_target<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<Coordinate, MatchError> {
        match self {
            Player::Human(input) => loop {
                match input.read_coordinate() {
                    Ok(target) => return Ok(target),
                    Err(InputError::Closed) => return Err(MatchError::InputClosed),
                    Err(e @ InputError::InvalidFormat) => observer.input_rejected(&e),
                }
            },
            Player::Computer(rng) => Ok(Coordinate::new(
                rng.uniform_int(1, BOARD_SIZE),
                rng.uniform_int(1, BOARD_SIZE),
            )),
        }
    }

    /// Fire at `opponent` until a shot is accepted.
    ///
    /// Out-of-bounds and repeated targets are reported and retried; they never
    /// cost the turn.
    pub fn take_turn<O: MatchObserver + ?Sized>(
        &mut self,
        side: Side,
        opponent: &mut Board,
        observer: &mut O,
    ) -> Result<Shot, MatchError> {
        loop {
            let target = self.produce_target(observer)?;
            observer.target_chosen(side, target);
            match opponent.resolve_shot(target) {
                Ok(outcome) => {
                    let shot = Shot { target, outcome };
                    observer.shot_resolved(side, shot);
                    return Ok(shot);
                }
                Err(e) if e.is_retryable_shot() => observer.shot_rejected(side, &e),
                Err(e) => return Err(e.into()),
            }
        }
    }
}
