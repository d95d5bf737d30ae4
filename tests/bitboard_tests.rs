use seabattle::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u64, 6>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_is_one_indexed() {
    let mut bb = BitBoard::<u64, 6>::new();
    assert!(bb.is_empty());

    bb.set(Coordinate::new(1, 1)).unwrap();
    bb.set(Coordinate::new(6, 6)).unwrap();
    assert!(bb.get(Coordinate::new(1, 1)).unwrap());
    assert!(bb.get(Coordinate::new(6, 6)).unwrap());
    assert!(!bb.get(Coordinate::new(1, 2)).unwrap());
    assert_eq!(bb.count_ones(), 2);

    assert_eq!(
        bb.set(Coordinate::new(0, 1)),
        Err(BitBoardError::OutOfBounds { row: 0, col: 1 })
    );
    assert!(bb.get(Coordinate::new(7, 1)).is_err());

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_from_coords_and_iter() {
    let a = BitBoard::<u64, 6>::from_coords([Coordinate::new(2, 3), Coordinate::new(1, 5)]).unwrap();
    let members: Vec<_> = a.iter().collect();
    assert_eq!(members, vec![Coordinate::new(1, 5), Coordinate::new(2, 3)]);

    let b = BitBoard::<u64, 6>::from_coords([Coordinate::new(2, 3)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 2);
}
