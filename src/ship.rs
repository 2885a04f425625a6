//! Ship construction from endpoints and per-deck damage tracking.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;
use crate::deck::Deck;

/// Orientation of a ship on the board. Single-deck ships report `Horizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight run of decks between two endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    decks: Vec<Deck>,
    orientation: Orientation,
    alive: usize,
    sunk: bool,
}

impl Ship {
    /// Build a ship spanning `start` to `end` inclusive.
    ///
    /// Endpoints may be given in either order; decks are always stored with
    /// increasing column (horizontal) or increasing row (vertical). Fails with
    /// [`BoardError::InvalidShipShape`] when the endpoints share neither a row
    /// nor a column, and with [`BoardError::ShipOutOfBounds`] for the first
    /// endpoint that lies off the board.
    pub fn new(start: Coord, end: Coord) -> Result<Self, BoardError> {
        let ((r0, c0), (r1, c1)) = (start, end);
        let orientation = if r0 == r1 {
            Orientation::Horizontal
        } else if c0 == c1 {
            Orientation::Vertical
        } else {
            return Err(BoardError::InvalidShipShape { start, end });
        };

        // Ensure both endpoints fit before any decks are built
        for (row, col) in [start, end] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(BoardError::ShipOutOfBounds { row, col });
            }
        }

        let decks: Vec<Deck> = match orientation {
            Orientation::Horizontal => (c0.min(c1)..=c0.max(c1))
                .map(|c| Deck::new(r0, c))
                .collect(),
            Orientation::Vertical => (r0.min(r1)..=r0.max(r1))
                .map(|r| Deck::new(r, c0))
                .collect(),
        };

        let alive = decks.len();
        Ok(Ship {
            decks,
            orientation,
            alive,
            sunk: false,
        })
    }

    /// Deck at (`row`, `col`) if this ship occupies it.
    pub fn deck(&self, row: usize, col: usize) -> Option<&Deck> {
        self.decks
            .iter()
            .find(|d| d.row() == row && d.column() == col)
    }

    /// Fire at (`row`, `col`). Returns `true` only if a live deck was there;
    /// that deck is now dead.
    pub fn fire(&mut self, row: usize, col: usize) -> bool {
        match self
            .decks
            .iter_mut()
            .find(|d| d.row() == row && d.column() == col)
        {
            Some(deck) if deck.is_alive() => {
                deck.kill();
                self.alive -= 1;
                true
            }
            _ => false,
        }
    }

    /// `true` once every deck is dead.
    pub fn is_sunk(&self) -> bool {
        self.alive == 0
    }

    /// Sunk flag, set by the board on the shot that sinks the ship.
    pub fn is_marked_sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn mark_sunk(&mut self) {
        self.sunk = true;
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lowest endpoint of the run.
    pub fn start(&self) -> Coord {
        self.decks[0].position()
    }

    /// Highest endpoint of the run.
    pub fn end(&self) -> Coord {
        self.decks[self.decks.len() - 1].position()
    }

    /// Decks still afloat.
    pub fn decks_alive(&self) -> usize {
        self.alive
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {:?}, end: {:?}, orientation: {:?}, alive: {}/{}, sunk: {} }}",
            self.start(),
            self.end(),
            self.orientation,
            self.alive,
            self.decks.len(),
            self.sunk,
        )
    }
}
