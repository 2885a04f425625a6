use crate::common::Coord;

pub const BOARD_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 10;

/// Reference fleet: one four-deck, two three-deck, three two-deck and four
/// single-deck ships, as `(start, end)` pairs.
pub const FLEET: [(Coord, Coord); FLEET_SIZE] = [
    ((2, 0), (2, 3)),
    ((4, 5), (4, 6)),
    ((3, 8), (3, 9)),
    ((6, 0), (8, 0)),
    ((6, 4), (6, 6)),
    ((6, 8), (6, 9)),
    ((9, 9), (9, 9)),
    ((9, 5), (9, 5)),
    ((9, 3), (9, 3)),
    ((9, 7), (9, 7)),
];

/// Untouched water.
pub const WATER: char = '~';
/// A deck that is still afloat.
pub const DECK_ALIVE: char = '□';
/// A deck that has been hit.
pub const DECK_DEAD: char = 'x';
