use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::movement_patterns::{slide_destinations, Offset};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook rays followed by bishop rays.
pub const QUEEN_DIRECTIONS: [Offset; 8] = concat_directions(ROOK_DIRECTIONS, BISHOP_DIRECTIONS);

const fn concat_directions(first: [Offset; 4], second: [Offset; 4]) -> [Offset; 8] {
    let mut table = [(0, 0); 8];
    let mut i = 0;
    while i < 4 {
        table[i] = first[i];
        table[i + 4] = second[i];
        i += 1;
    }
    table
}

#[inline]
pub fn queen_moves(
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    slide_destinations(origin, &QUEEN_DIRECTIONS, own, enemy, out);
}
