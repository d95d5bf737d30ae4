/// Side length of the square board. Coordinates run `1..=BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths of one fleet, placed in this order.
pub const FLEET: [u8; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of decks in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts shared by all ships of one board generation.
pub const PLACEMENT_ATTEMPT_BUDGET: u32 = 2000;
