use crate::board::Board;
use crate::common::{BoardError, Shot};
use crate::coord::Coordinate;
use crate::game::{MatchSummary, Side};
use crate::input::InputError;

/// Receives match events for presentation. Every method defaults to doing
/// nothing; `()` is the silent observer.
pub trait MatchObserver {
    /// A side is about to move.
    fn turn_started(&mut self, _side: Side, _player_board: &Board, _computer_board: &Board) {}

    /// A target was picked, before the board judged it.
    fn target_chosen(&mut self, _side: Side, _target: Coordinate) {}

    /// The board refused a target; the same side picks again.
    fn shot_rejected(&mut self, _side: Side, _error: &BoardError) {}

    fn shot_resolved(&mut self, _side: Side, _shot: Shot) {}

    /// Human input could not be parsed.
    fn input_rejected(&mut self, _error: &InputError) {}

    fn match_finished(&mut self, _summary: &MatchSummary) {}
}

impl MatchObserver for () {}
