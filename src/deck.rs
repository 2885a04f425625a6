//! A single ship segment.

use crate::common::Coord;

/// One grid cell occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    row: usize,
    column: usize,
    alive: bool,
}

impl Deck {
    /// A live deck at (`row`, `column`).
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            alive: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Coord {
        (self.row, self.column)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
