//! Turn sequencing between the player and the computer.

use core::fmt;

use crate::board::Board;
use crate::common::BoardError;
use crate::fleet::FleetPlacer;
use crate::input::InputSource;
use crate::observer::MatchObserver;
use crate::player::Player;
use crate::random::RandomSource;

/// Which seat of the match an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn turn(self) -> MatchState {
        match self {
            Side::Player => MatchState::PlayerTurn,
            Side::Computer => MatchState::ComputerTurn,
        }
    }
}

/// State of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
}

impl MatchState {
    pub fn is_finished(self) -> bool {
        matches!(self, MatchState::PlayerWon | MatchState::ComputerWon)
    }

    /// Side to move, if the match is still running.
    pub fn active_side(self) -> Option<Side> {
        match self {
            MatchState::PlayerTurn => Some(Side::Player),
            MatchState::ComputerTurn => Some(Side::Computer),
            MatchState::PlayerWon | MatchState::ComputerWon => None,
        }
    }

    /// Winning side, once the match is over.
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::PlayerWon => Some(Side::Player),
            MatchState::ComputerWon => Some(Side::Computer),
            MatchState::PlayerTurn | MatchState::ComputerTurn => None,
        }
    }
}

/// Errors that stop a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A board refused an operation for a reason no retry can fix.
    Board(BoardError),
    /// The human's input ended mid-match.
    InputClosed,
    /// A turn was requested after the match finished.
    MatchOver,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Board(e) => write!(f, "Board error: {}", e),
            MatchError::InputClosed => write!(f, "Input ended before the match was decided"),
            MatchError::MatchOver => write!(f, "The match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Final report of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub state: MatchState,
    pub winner: Side,
    /// Accepted shots by both sides.
    pub turns: usize,
    pub player_shots: usize,
    pub computer_shots: usize,
}

/// Runs one match: whoever hits moves again, a miss hands the turn over.
pub struct MatchController<I, R> {
    player: Player<I, R>,
    computer: Player<I, R>,
    player_board: Board,
    computer_board: Board,
    state: MatchState,
    player_shots: usize,
    computer_shots: usize,
}

impl<I, R> MatchController<I, R>
where
    I: InputSource,
    R: RandomSource,
{
    /// Start a match on two finalized boards. The computer's board is hidden
    /// from the player's view. The player moves first.
    pub fn new(
        player: Player<I, R>,
        computer: Player<I, R>,
        player_board: Board,
        mut computer_board: Board,
    ) -> Self {
        computer_board.set_hidden(true);
        Self {
            player,
            computer,
            player_board,
            computer_board,
            state: MatchState::PlayerTurn,
            player_shots: 0,
            computer_shots: 0,
        }
    }

    /// Start a match with a random fleet on each side.
    pub fn with_random_boards<G: RandomSource + ?Sized>(
        player: Player<I, R>,
        computer: Player<I, R>,
        rng: &mut G,
    ) -> Self {
        let player_board = FleetPlacer::generate(rng);
        let computer_board = FleetPlacer::generate(rng);
        Self::new(player, computer, player_board, computer_board)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Show or hide the computer's fleet in the player's view.
    pub fn reveal_computer_board(&mut self, reveal: bool) {
        self.computer_board.set_hidden(!reveal);
    }

    /// Play one accepted shot for the side to move and return the new state.
    pub fn step<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<MatchState, MatchError> {
        let side = self.state.active_side().ok_or(MatchError::MatchOver)?;
        observer.turn_started(side, &self.player_board, &self.computer_board);

        let shot = match side {
            Side::Player => {
                let shot = self
                    .player
                    .take_turn(side, &mut self.computer_board, observer)?;
                self.player_shots += 1;
                shot
            }
            Side::Computer => {
                let shot = self
                    .computer
                    .take_turn(side, &mut self.player_board, observer)?;
                self.computer_shots += 1;
                shot
            }
        };

        self.state = if self.computer_board.is_destroyed() {
            MatchState::PlayerWon
        } else if self.player_board.is_destroyed() {
            MatchState::ComputerWon
        } else if shot.outcome.keeps_turn() {
            side.turn()
        } else {
            side.opponent().turn()
        };
        Ok(self.state)
    }

    /// Step until one fleet is destroyed.
    pub fn run<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<MatchSummary, MatchError> {
        while !self.state.is_finished() {
            self.step(observer)?;
        }
        let summary = self.summary().ok_or(MatchError::MatchOver)?;
        log::info!(
            "match over: {:?} won after {} shots",
            summary.winner,
            summary.turns
        );
        observer.match_finished(&summary);
        Ok(summary)
    }

    /// Summary of the match, once it has finished.
    pub fn summary(&self) -> Option<MatchSummary> {
        let winner = self.state.winner()?;
        Some(MatchSummary {
            state: self.state,
            winner,
            turns: self.player_shots + self.computer_shots,
            player_shots: self.player_shots,
            computer_shots: self.computer_shots,
        })
    }
}
