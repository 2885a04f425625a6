//! The playing field: ships, the cell index and shot resolution.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::fmt;
use core::fmt::Write as _;

use crate::common::{BoardError, Coord, FireOutcome};
use crate::config::{BOARD_SIZE, DECK_ALIVE, DECK_DEAD, WATER};
use crate::ship::Ship;

/// Content of a single grid cell as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Alive,
    Dead,
}

impl Cell {
    pub const fn symbol(&self) -> char {
        match self {
            Cell::Water => WATER,
            Cell::Alive => DECK_ALIVE,
            Cell::Dead => DECK_DEAD,
        }
    }
}

type CellIndex = [[Option<usize>; BOARD_SIZE]; BOARD_SIZE];

/// All ships plus an index from grid cell to owning ship.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    cells: CellIndex,
}

impl Board {
    /// Build a board with one ship per `(start, end)` pair, failing on the
    /// first ship that is not axis-aligned or leaves the grid.
    ///
    /// Overlapping ships are not rejected: the later ship owns a shared cell.
    pub fn new(fleet: &[(Coord, Coord)]) -> Result<Self, BoardError> {
        let ships = fleet
            .iter()
            .map(|&(start, end)| Ship::new(start, end))
            .collect::<Result<Vec<_>, _>>()?;

        let mut cells: CellIndex = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (i, ship) in ships.iter().enumerate() {
            for deck in ship.decks() {
                let (row, col) = deck.position();
                cells[row][col] = Some(i);
            }
        }

        log::debug!("board built with {} ships", ships.len());
        Ok(Board { ships, cells })
    }

    /// Fire at `location` and report the outcome.
    pub fn fire(&mut self, location: Coord) -> FireOutcome {
        let (row, col) = location;
        let Some(i) = self.owner(row, col) else {
            log::trace!("shot at ({}, {}) hit water", row, col);
            return FireOutcome::Miss;
        };

        let ship = &mut self.ships[i];
        if !ship.fire(row, col) {
            log::debug!("shot at ({}, {}) found a dead deck", row, col);
            return FireOutcome::Miss;
        }
        if !ship.is_sunk() {
            log::debug!("shot at ({}, {}) hit ship {}", row, col, i);
            return FireOutcome::Hit;
        }
        ship.mark_sunk();
        log::debug!("shot at ({}, {}) sank ship {}", row, col, i);
        FireOutcome::Sunk
    }

    /// Ships in construction order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship that owns `location`, if any.
    pub fn ship_at(&self, location: Coord) -> Option<&Ship> {
        self.owner(location.0, location.1).map(|i| &self.ships[i])
    }

    /// Rendering state of `location`. Off-grid positions are water.
    pub fn cell(&self, location: Coord) -> Cell {
        let (row, col) = location;
        match self.ship_at(location).and_then(|s| s.deck(row, col)) {
            Some(deck) if deck.is_alive() => Cell::Alive,
            Some(_) => Cell::Dead,
            None => Cell::Water,
        }
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Tab-separated grid, one newline-terminated line per row.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", self);
        out
    }

    /// Print the rendered grid to stdout.
    #[cfg(feature = "std")]
    pub fn print_field(&self) {
        std::print!("{}", self);
    }

    fn owner(&self, row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.cells[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if c > 0 {
                    f.write_char('\t')?;
                }
                f.write_char(self.cell((r, c)).symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("sunk", &self.ships.iter().filter(|s| s.is_sunk()).count())
            .finish()
    }
}
