use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::movement_patterns::{slide_destinations, Offset};

/// Counter-clockwise from north east.
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

#[inline]
pub fn bishop_moves(
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    slide_destinations(origin, &BISHOP_DIRECTIONS, own, enemy, out);
}
