use seabattle::{Board, BoardError, Cell, Coordinate, Orientation, Ship, ShotOutcome};

fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

fn cruiser_board() -> Board {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(Orientation::Horizontal, c(1, 1), 3))
        .unwrap();
    board
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut board = cruiser_board();
    let before = board.clone();
    assert_eq!(
        board.place_ship(Ship::new(Orientation::Horizontal, c(1, 4), 1)),
        Err(BoardError::ShipPlacementRejected)
    );
    // diagonal contact is rejected too
    assert_eq!(
        board.place_ship(Ship::new(Orientation::Vertical, c(2, 4), 2)),
        Err(BoardError::ShipPlacementRejected)
    );
    assert_eq!(board, before);

    board
        .place_ship(Ship::new(Orientation::Horizontal, c(1, 5), 2))
        .unwrap();
    assert_eq!(board.ships().count(), 2);
}

#[test]
fn test_overlap_and_out_of_bounds_rejected_without_mutation() {
    let mut board = cruiser_board();
    let before = board.clone();
    for ship in [
        Ship::new(Orientation::Vertical, c(1, 2), 2),
        Ship::new(Orientation::Horizontal, c(4, 5), 3),
        Ship::new(Orientation::Vertical, c(6, 6), 2),
        Ship::new(Orientation::Vertical, c(0, 6), 1),
        Ship::new(Orientation::Vertical, c(4, 4), 0),
    ] {
        assert_eq!(
            board.place_ship(ship),
            Err(BoardError::ShipPlacementRejected)
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_fleet_capacity() {
    let mut board = Board::new();
    for bow in [c(1, 1), c(1, 3), c(1, 5), c(3, 1), c(3, 3), c(3, 5), c(5, 1)] {
        board
            .place_ship(Ship::new(Orientation::Horizontal, bow, 1))
            .unwrap();
    }
    assert_eq!(
        board.place_ship(Ship::new(Orientation::Horizontal, c(5, 5), 1)),
        Err(BoardError::ShipPlacementRejected)
    );
    assert_eq!(board.remaining_ship_count(), 7);
}

#[test]
fn test_phase_rules() {
    let mut board = cruiser_board();
    assert!(!board.is_in_play());
    assert_eq!(board.resolve_shot(c(1, 1)), Err(BoardError::PlacementOpen));

    board.finalize_placement().unwrap();
    assert!(board.is_in_play());
    assert_eq!(board.finalize_placement(), Err(BoardError::PlacementClosed));
    assert_eq!(
        board.place_ship(Ship::new(Orientation::Horizontal, c(5, 5), 1)),
        Err(BoardError::PlacementClosed)
    );
}

#[test]
fn test_finalize_clears_adjacency_buffer() {
    let mut board = cruiser_board();
    assert!(board.is_excluded(c(2, 2)));
    board.finalize_placement().unwrap();
    assert!(Coordinate::all().all(|coord| !board.is_excluded(coord)));
    assert_eq!(board.resolve_shot(c(2, 2)), Ok(ShotOutcome::Miss));
}

#[test]
fn test_shots_until_sunk() {
    let mut board = cruiser_board();
    board
        .place_ship(Ship::new(Orientation::Vertical, c(4, 6), 2))
        .unwrap();
    board.finalize_placement().unwrap();
    assert_eq!(board.remaining_ship_count(), 2);

    assert_eq!(board.resolve_shot(c(1, 1)), Ok(ShotOutcome::Hit));
    assert_eq!(board.ships().next().unwrap().remaining_hits(), 2);
    assert_eq!(board.resolve_shot(c(1, 2)), Ok(ShotOutcome::Hit));
    assert_eq!(board.ships().next().unwrap().remaining_hits(), 1);
    assert_eq!(board.resolve_shot(c(1, 3)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.ships().next().unwrap().remaining_hits(), 0);
    assert_eq!(board.remaining_ship_count(), 1);
    assert!(!board.is_destroyed());

    for coord in [c(1, 4), c(2, 1), c(2, 2), c(2, 3), c(2, 4)] {
        assert_eq!(board.cell(coord), Cell::ExclusionMarker);
        assert!(board.is_excluded(coord));
        assert_eq!(
            board.resolve_shot(coord),
            Err(BoardError::AlreadyTargeted(coord))
        );
    }
    for coord in [c(1, 1), c(1, 2), c(1, 3)] {
        assert_eq!(board.cell(coord), Cell::Hit);
    }
    assert_eq!(board.hits_recorded(), 3);
}

#[test]
fn test_sinking_last_ship_destroys_fleet() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(Orientation::Vertical, c(3, 3), 1))
        .unwrap();
    board.finalize_placement().unwrap();
    assert_eq!(board.resolve_shot(c(3, 3)), Ok(ShotOutcome::Sunk));
    assert_eq!(board.remaining_ship_count(), 0);
    assert!(board.is_destroyed());
}

#[test]
fn test_miss_and_repeat() {
    let mut board = cruiser_board();
    board.finalize_placement().unwrap();
    assert_eq!(board.resolve_shot(c(5, 5)), Ok(ShotOutcome::Miss));
    assert_eq!(board.cell(c(5, 5)), Cell::Miss);
    assert_eq!(
        board.resolve_shot(c(5, 5)),
        Err(BoardError::AlreadyTargeted(c(5, 5)))
    );
}

#[test]
fn test_out_of_bounds_shot() {
    let mut board = cruiser_board();
    board.finalize_placement().unwrap();
    let before = board.clone();
    for coord in [c(0, 0), c(7, 7), c(0, 3), c(3, 7)] {
        assert_eq!(board.resolve_shot(coord), Err(BoardError::OutOfBounds(coord)));
    }
    assert_eq!(board, before);
}

#[test]
fn test_hidden_view() {
    let mut board = cruiser_board();
    board.finalize_placement().unwrap();
    board.set_hidden(true);
    assert!(board.is_hidden());
    assert_eq!(board.cell(c(1, 2)), Cell::Ship);
    assert_eq!(board.visible_cell(c(1, 2)), Cell::Empty);
    board.resolve_shot(c(1, 2)).unwrap();
    assert_eq!(board.visible_cell(c(1, 2)), Cell::Hit);

    board.set_hidden(false);
    assert_eq!(board.visible_cell(c(1, 1)), Cell::Ship);
}

#[test]
fn test_outcome_turn_retention() {
    assert!(ShotOutcome::Hit.keeps_turn());
    assert!(ShotOutcome::Sunk.keeps_turn());
    assert!(!ShotOutcome::Miss.keeps_turn());
}
