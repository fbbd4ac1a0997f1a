use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::movement_patterns::{slide_destinations, Offset};

/// East, west, north, south.
pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_moves(
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    slide_destinations(origin, &ROOK_DIRECTIONS, own, enemy, out);
}
