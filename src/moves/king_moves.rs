//! King steps. Castling is left to the caller.

use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::movement_patterns::{leap_destinations, Offset};

/// Counter-clockwise from east.
pub const KING_OFFSETS: [Offset; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[inline]
pub fn king_moves(origin: BoardLocation, own: LocationSet, out: &mut Vec<BoardLocation>) {
    leap_destinations(origin, &KING_OFFSETS, own, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(label: &str) -> BoardLocation {
        BoardLocation::from_algebraic(label).unwrap()
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        let mut out = Vec::new();
        king_moves(loc("a1"), [loc("a1")].into_iter().collect(), &mut out);
        assert_eq!(out, vec![loc("b1"), loc("b2"), loc("a2")]);
    }

    #[test]
    fn boxed_in_king_has_no_moves() {
        let own: LocationSet = [loc("a1"), loc("a2"), loc("b1"), loc("b2")].into_iter().collect();
        let mut out = Vec::new();
        king_moves(loc("a1"), own, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn king_in_centre_counter_clockwise() {
        let mut out = Vec::new();
        king_moves(loc("e4"), LocationSet::EMPTY, &mut out);
        let labels: Vec<String> = out.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["f4", "f5", "e5", "d5", "d4", "d3", "e3", "f3"]);
    }
}
