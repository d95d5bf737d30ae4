//! Game board state: ship placement, the exclusion set and shot resolution.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::ship::Ship;
use core::fmt;

type BB = BitBoard<u64, { BOARD_SIZE as usize }>;

const GRID: usize = BOARD_SIZE as usize;

/// Logical state of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Undamaged deck of a ship.
    Ship,
    Hit,
    Miss,
    /// Water next to a sunk ship, revealed as safe.
    ExclusionMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Placement,
    InPlay,
}

/// One player's grid and fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    ships: [Option<Ship>; NUM_SHIPS],
    ship_count: usize,
    occupied: BB,
    excluded: BB,
    remaining_ships: usize,
    hidden: bool,
    phase: Phase,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board in the placement phase.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID]; GRID],
            ships: [None; NUM_SHIPS],
            ship_count: 0,
            occupied: BB::new(),
            excluded: BB::new(),
            remaining_ships: 0,
            hidden: false,
            phase: Phase::Placement,
        }
    }

    /// Place `ship`, reserving its 8-neighborhood so no other ship can touch it.
    ///
    /// Either the whole ship is placed or the board is left untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.phase == Phase::InPlay {
            return Err(BoardError::PlacementClosed);
        }
        if self.ship_count == NUM_SHIPS || ship.length() == 0 {
            return Err(BoardError::ShipPlacementRejected);
        }
        let mask = BB::from_coords(ship.cells()).map_err(|_| BoardError::ShipPlacementRejected)?;
        if !(mask & (self.occupied | self.excluded)).is_empty() {
            return Err(BoardError::ShipPlacementRejected);
        }

        let mut contour = self.excluded;
        for cell in mask.iter() {
            for near in cell.neighborhood() {
                contour.set(near)?;
            }
        }

        for cell in mask.iter() {
            self.set_cell(cell, Cell::Ship);
        }
        self.occupied |= mask;
        self.excluded = contour;
        self.ships[self.ship_count] = Some(ship);
        self.ship_count += 1;
        self.remaining_ships += 1;
        log::debug!("placed {:?}", ship);
        Ok(())
    }

    /// Close the placement phase and forget the adjacency buffer, so only
    /// real shots count as exclusions from here on.
    pub fn finalize_placement(&mut self) -> Result<(), BoardError> {
        if self.phase == Phase::InPlay {
            return Err(BoardError::PlacementClosed);
        }
        self.excluded.clear_all();
        self.phase = Phase::InPlay;
        Ok(())
    }

    /// Fire at `target` and report what happened.
    ///
    /// Rejected shots leave the board unchanged.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.phase == Phase::Placement {
            return Err(BoardError::PlacementOpen);
        }
        if !target.in_bounds() {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.excluded.get(target)? {
            return Err(BoardError::AlreadyTargeted(target));
        }

        let slot = self
            .ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.contains(target));
        let Some(slot) = slot else {
            self.excluded.set(target)?;
            self.set_cell(target, Cell::Miss);
            log::debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        let mut ship = *slot;
        ship.register_hit()?;
        *slot = ship;
        self.excluded.set(target)?;
        self.set_cell(target, Cell::Hit);

        if !ship.is_sunk() {
            log::debug!("shot at {} hit {:?}", target, ship);
            return Ok(ShotOutcome::Hit);
        }

        self.remaining_ships -= 1;
        self.mark_contour(&ship)?;
        log::info!(
            "ship at {} sunk, {} remaining",
            ship.bow(),
            self.remaining_ships
        );
        Ok(ShotOutcome::Sunk)
    }

    fn mark_contour(&mut self, ship: &Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            for near in cell.neighborhood() {
                self.excluded.set(near)?;
                if self.cell(near) == Cell::Empty {
                    self.set_cell(near, Cell::ExclusionMarker);
                }
            }
        }
        Ok(())
    }

    /// Logical state of `coord`; out-of-range coordinates read as empty.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        match Self::grid_index(coord) {
            Some((r, c)) => self.cells[r][c],
            None => Cell::Empty,
        }
    }

    /// State of `coord` as the opponent may see it: a hidden board shows
    /// undamaged decks as water.
    pub fn visible_cell(&self, coord: Coordinate) -> Cell {
        match self.cell(coord) {
            Cell::Ship if self.hidden => Cell::Empty,
            other => other,
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Number of placed ships still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.remaining_ships
    }

    /// True once every placed ship has sunk.
    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::InPlay && self.remaining_ships == 0
    }

    pub fn is_excluded(&self, coord: Coordinate) -> bool {
        self.excluded.get(coord).unwrap_or(false)
    }

    /// Number of decks hit so far.
    pub fn hits_recorded(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Hit)
            .count()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Whether placement has been finalized.
    pub fn is_in_play(&self) -> bool {
        self.phase == Phase::InPlay
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        if let Some((r, c)) = Self::grid_index(coord) {
            self.cells[r][c] = cell;
        }
    }

    fn grid_index(coord: Coordinate) -> Option<(usize, usize)> {
        coord
            .in_bounds()
            .then(|| (coord.row() as usize - 1, coord.col() as usize - 1))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  phase: {:?},\n  remaining_ships: {},\n  occupied: {:?},\n  excluded: {:?},\n  ships: {:?}\n}}",
            self.phase, self.remaining_ships, self.occupied, self.excluded, self.ships
        )
    }
}
