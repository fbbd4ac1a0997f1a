//! Pawn pushes and diagonal captures.
//!
//! Order: single push, double push, capture toward the lower file, capture
//! toward the higher file. Promotion and en-passant belong to the caller.

use crate::board_location::BoardLocation;
use crate::location_set::LocationSet;
use crate::piece_team::PieceTeam;

pub const PAWN_CAPTURE_FILE_DELTAS: [i8; 2] = [-1, 1];

pub fn pawn_moves(
    origin: BoardLocation,
    team: PieceTeam,
    own: LocationSet,
    enemy: LocationSet,
    out: &mut Vec<BoardLocation>,
) {
    let direction = team.pawn_direction();
    let occupied = own.union(enemy);

    if let Some(one_step) = origin.moved_by(0, direction) {
        if !occupied.contains(one_step) {
            out.push(one_step);

            if origin.rank() == team.pawn_start_rank() {
                if let Some(two_step) = one_step.moved_by(0, direction) {
                    if !occupied.contains(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in PAWN_CAPTURE_FILE_DELTAS {
        let Some(target) = origin.moved_by(file_delta, direction) else {
            continue;
        };
        if enemy.contains(target) && !own.contains(target) {
            out.push(target);
        }
    }
}
