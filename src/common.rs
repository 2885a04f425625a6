//! Common types for the board: coordinates, shot outcomes and errors.

use core::fmt;

/// A `(row, column)` position on the board.
pub type Coord = (usize, usize);

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum FireOutcome {
    /// Shot killed a live deck of a ship that is still afloat.
    #[cfg_attr(feature = "std", serde(rename = "Hit!"))]
    Hit,
    /// Shot killed the last live deck of a ship.
    #[cfg_attr(feature = "std", serde(rename = "Sunk!"))]
    Sunk,
    /// Water, off the grid, or a deck that was already dead.
    #[cfg_attr(feature = "std", serde(rename = "Miss!"))]
    Miss,
}

impl FireOutcome {
    /// Label reported to the player.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
            FireOutcome::Miss => "Miss!",
        }
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while building ships and boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Endpoints share neither a row nor a column.
    InvalidShipShape { start: Coord, end: Coord },
    /// A deck lies outside the board grid.
    ShipOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShipShape { start, end } => write!(
                f,
                "Ships must be either horizontal or vertical: {:?} -> {:?}",
                start, end
            ),
            BoardError::ShipOutOfBounds { row, col } => {
                write!(f, "Ship deck out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
