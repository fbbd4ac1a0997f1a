//! Per-piece move generation.
//!
//! `CheckedMoveGenerator` validates the board before generating and is the
//! default policy. `UncheckedMoveGenerator` trusts the caller: with a corrupt
//! board its output is unspecified, though still on the board and never a
//! panic.

use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::move_generation::board_validation::{validate_board_state, validate_origin_coordinates};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::movement_patterns::{
    leap_destinations, movement_pattern, slide_destinations, MovementPattern,
};
use crate::moves::pawn_moves::pawn_moves;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedMoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct UncheckedMoveGenerator;

impl MoveGenerator for CheckedMoveGenerator {
    fn generate_piece_moves(
        &self,
        class: PieceClass,
        team: PieceTeam,
        origin: BoardLocation,
        own: LocationSet,
        enemy: LocationSet,
    ) -> MoveGenResult<Vec<BoardLocation>> {
        validate_board_state(origin, own, enemy)?;
        Ok(UncheckedMoveGenerator.destinations(class, team, origin, own, enemy))
    }
}

impl MoveGenerator for UncheckedMoveGenerator {
    fn generate_piece_moves(
        &self,
        class: PieceClass,
        team: PieceTeam,
        origin: BoardLocation,
        own: LocationSet,
        enemy: LocationSet,
    ) -> MoveGenResult<Vec<BoardLocation>> {
        Ok(self.destinations(class, team, origin, own, enemy))
    }
}

impl UncheckedMoveGenerator {
    fn destinations(
        &self,
        class: PieceClass,
        team: PieceTeam,
        origin: BoardLocation,
        own: LocationSet,
        enemy: LocationSet,
    ) -> Vec<BoardLocation> {
        let mut out = Vec::with_capacity(if class.is_slider() { 28 } else { 8 });
        append_piece_moves(class, team, origin, own, enemy, &mut out);
        out
    }
}

/// Appends the destinations of one piece to `out` without validating.
pub fn append_piece_moves(
    class: PieceClass,
    team: PieceTeam,
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    match movement_pattern(class) {
        MovementPattern::Slide(directions) => {
            slide_destinations(origin, directions, own, enemy, out)
        }
        MovementPattern::Leap(offsets) => leap_destinations(origin, offsets, own, out),
        MovementPattern::Pawn => pawn_moves(origin, team, own, enemy, out),
    }
}

/// Validating generation, the crate's default entry point.
pub fn generate_moves(
    class: PieceClass,
    team: PieceTeam,
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
) -> MoveGenResult<Vec<BoardLocation>> {
    CheckedMoveGenerator.generate_piece_moves(class, team, origin, own, enemy)
}

/// Like [`generate_moves`] but takes raw `(file, rank)` coordinates, so an
/// off-board origin surfaces as an invalid board state.
pub fn generate_moves_at(
    class: PieceClass,
    team: PieceTeam,
    file: i8,
    rank: i8,
    own: LocationSet,
    enemy: LocationSet,
) -> MoveGenResult<Vec<BoardLocation>> {
    let origin = validate_origin_coordinates(file, rank)?;
    generate_moves(class, team, origin, own, enemy)
}
