//! Movement primitives shared by every piece.
//!
//! Pieces other than the pawn reduce to one of two shapes: a set of sliding
//! rays walked square by square, or a set of fixed single-step leaps. Each
//! piece module only supplies its direction or offset table.

use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::piece_class::PieceClass;

/// A `(d_file, d_rank)` step.
pub type Offset = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    /// Rays extended one square at a time, in table order.
    Slide(&'static [Offset]),
    /// Single-step jumps, in table order.
    Leap(&'static [Offset]),
    /// Color dependent pushes and diagonal captures.
    Pawn,
}

pub fn movement_pattern(class: PieceClass) -> MovementPattern {
    match class {
        PieceClass::Rook => MovementPattern::Slide(&ROOK_DIRECTIONS),
        PieceClass::Bishop => MovementPattern::Slide(&BISHOP_DIRECTIONS),
        PieceClass::Queen => MovementPattern::Slide(&QUEEN_DIRECTIONS),
        PieceClass::Knight => MovementPattern::Leap(&KNIGHT_OFFSETS),
        PieceClass::King => MovementPattern::Leap(&KING_OFFSETS),
        PieceClass::Pawn => MovementPattern::Pawn,
    }
}

/// Walks each ray from `origin`, nearest square first.
///
/// A ray ends at the board edge, before an `own` blocker, or on an `enemy`
/// blocker (which is emitted as a capture).
pub fn slide_destinations(
    origin: BoardLocation,
    directions: &[Offset],
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    for &(d_file, d_rank) in directions {
        let mut current = origin;
        while let Some(next) = current.moved_by(d_file, d_rank) {
            if own.contains(next) {
                break;
            }
            out.push(next);
            if enemy.contains(next) {
                break;
            }
            current = next;
        }
    }
}

/// Emits every on-board landing square not held by `own`.
pub fn leap_destinations(
    origin: BoardLocation,
    offsets: &[Offset],
    own: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_file, d_rank)| origin.moved_by(d_file, d_rank))
            .filter(|target| !own.contains(*target)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(label: &str) -> BoardLocation {
        BoardLocation::from_algebraic(label).unwrap()
    }

    #[test]
    fn slide_stops_at_edge() {
        let mut out = Vec::new();
        slide_destinations(
            loc("f1"),
            &[(1, 0)],
            LocationSet::EMPTY,
            LocationSet::EMPTY,
            &mut out,
        );
        assert_eq!(out, vec![loc("g1"), loc("h1")]);
    }

    #[test]
    fn slide_with_empty_direction_table_emits_nothing() {
        let mut out = Vec::new();
        slide_destinations(loc("d4"), &[], LocationSet::EMPTY, LocationSet::EMPTY, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn leap_skips_off_board_and_own() {
        let own: LocationSet = [loc("b3")].into_iter().collect();
        let mut out = Vec::new();
        leap_destinations(loc("a1"), &[(1, 2), (2, 1), (-1, 2)], own, &mut out);
        assert_eq!(out, vec![loc("c2")]);
    }

    #[test]
    fn every_class_has_a_pattern() {
        assert!(matches!(
            movement_pattern(PieceClass::Queen),
            MovementPattern::Slide(d) if d.len() == 8
        ));
        assert!(matches!(
            movement_pattern(PieceClass::Knight),
            MovementPattern::Leap(o) if o.len() == 8
        ));
        assert_eq!(movement_pattern(PieceClass::Pawn), MovementPattern::Pawn);
    }
}
