use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::movement_patterns::{leap_destinations, Offset};

/// Counter-clockwise starting east-north-east.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_moves(origin: BoardLocation, own: LocationSet, out: &mut Vec<BoardLocation>) {
    leap_destinations(origin, &KNIGHT_OFFSETS, own, out);
}
