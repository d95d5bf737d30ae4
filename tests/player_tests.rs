use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, BoardError, Coordinate, InputError, InputSource, MatchError, MatchObserver,
    Orientation, Player, Ship, Shot, ShotOutcome, Side,
};

struct ScriptedInput(VecDeque<Result<Coordinate, InputError>>);

impl ScriptedInput {
    fn new(script: impl IntoIterator<Item = Result<Coordinate, InputError>>) -> Self {
        Self(script.into_iter().collect())
    }
}

impl InputSource for ScriptedInput {
    fn read_coordinate(&mut self) -> Result<Coordinate, InputError> {
        self.0.pop_front().unwrap_or(Err(InputError::Closed))
    }
}

#[derive(Default)]
struct Recorder {
    rejected_shots: Vec<BoardError>,
    rejected_inputs: usize,
    targets: Vec<Coordinate>,
    resolved: Vec<Shot>,
}

impl MatchObserver for Recorder {
    fn target_chosen(&mut self, _side: Side, target: Coordinate) {
        self.targets.push(target);
    }

    fn shot_rejected(&mut self, _side: Side, error: &BoardError) {
        self.rejected_shots.push(*error);
    }

    fn shot_resolved(&mut self, _side: Side, shot: Shot) {
        self.resolved.push(shot);
    }

    fn input_rejected(&mut self, _error: &InputError) {
        self.rejected_inputs += 1;
    }
}

type TestPlayer = Player<ScriptedInput, SmallRng>;

fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

fn target_board() -> Board {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(Orientation::Horizontal, c(2, 2), 2))
        .unwrap();
    board.finalize_placement().unwrap();
    board
}

#[test]
fn test_human_skips_malformed_input() {
    let mut player: TestPlayer = Player::Human(ScriptedInput::new([
        Err(InputError::InvalidFormat),
        Err(InputError::InvalidFormat),
        Ok(c(3, 4)),
    ]));
    let mut recorder = Recorder::default();
    assert!(player.is_human());
    assert_eq!(player.produce_target(&mut recorder), Ok(c(3, 4)));
    assert_eq!(recorder.rejected_inputs, 2);
}

#[test]
fn test_human_target_is_not_bounds_checked() {
    let mut player: TestPlayer = Player::Human(ScriptedInput::new([Ok(c(9, 0))]));
    assert_eq!(player.produce_target(&mut ()), Ok(c(9, 0)));
}

#[test]
fn test_human_input_closed() {
    let mut player: TestPlayer = Player::Human(ScriptedInput::new([]));
    let mut board = target_board();
    assert_eq!(
        player.take_turn(Side::Player, &mut board, &mut ()),
        Err(MatchError::InputClosed)
    );
}

#[test]
fn test_take_turn_retries_rejected_targets() {
    let mut board = target_board();
    board.resolve_shot(c(5, 5)).unwrap();

    let mut player: TestPlayer = Player::Human(ScriptedInput::new([
        Ok(c(0, 0)),
        Ok(c(7, 7)),
        Ok(c(5, 5)),
        Ok(c(2, 3)),
    ]));
    let mut recorder = Recorder::default();
    let shot = player
        .take_turn(Side::Player, &mut board, &mut recorder)
        .unwrap();

    assert_eq!(
        shot,
        Shot {
            target: c(2, 3),
            outcome: ShotOutcome::Hit
        }
    );
    assert_eq!(
        recorder.rejected_shots,
        vec![
            BoardError::OutOfBounds(c(0, 0)),
            BoardError::OutOfBounds(c(7, 7)),
            BoardError::AlreadyTargeted(c(5, 5)),
        ]
    );
    assert_eq!(recorder.targets.len(), 4);
    assert_eq!(recorder.resolved, vec![shot]);
}

#[test]
fn test_take_turn_propagates_unrecoverable_errors() {
    let mut board = Board::new();
    let mut player: TestPlayer = Player::Human(ScriptedInput::new([Ok(c(1, 1))]));
    assert_eq!(
        player.take_turn(Side::Player, &mut board, &mut ()),
        Err(MatchError::Board(BoardError::PlacementOpen))
    );
}

#[test]
fn test_computer_targets_stay_on_board() {
    let mut player: TestPlayer = Player::Computer(SmallRng::seed_from_u64(99));
    assert!(!player.is_human());
    for _ in 0..500 {
        let target = player.produce_target(&mut ()).unwrap();
        assert!(target.in_bounds(), "{} off the board", target);
    }
}

#[test]
fn test_computer_eventually_clears_board() {
    let mut board = target_board();
    let mut player: TestPlayer = Player::Computer(SmallRng::seed_from_u64(5));
    let mut recorder = Recorder::default();
    while !board.is_destroyed() {
        player
            .take_turn(Side::Computer, &mut board, &mut recorder)
            .unwrap();
    }
    assert!(recorder
        .rejected_shots
        .iter()
        .all(|e| matches!(e, BoardError::AlreadyTargeted(_))));
    assert_eq!(
        recorder
            .resolved
            .iter()
            .filter(|s| s.outcome == ShotOutcome::Sunk)
            .count(),
        1
    );
}
