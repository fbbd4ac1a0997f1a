//! Precondition checks for one generation call.
//!
//! A board is consistent when the origin is on the board, the origin is held
//! by the moving side, and no square is held by both sides.

use crate::board_location::BoardLocation;
use crate::chess_errors::BoardStateViolation;
use crate::location_set::LocationSet;
use crate::move_generation::move_generator::MoveGenResult;

pub fn validate_board_state(
    origin: BoardLocation,
    own: LocationSet,
    enemy: LocationSet,
) -> MoveGenResult<()> {
    if !own.contains(origin) {
        return Err(BoardStateViolation::OriginNotInOwn(origin).into());
    }
    if let Some(shared) = own.intersection(enemy).first() {
        return Err(BoardStateViolation::OccupancyOverlap(shared).into());
    }
    Ok(())
}

/// Converts raw coordinates to an origin, reporting off-board values as a
/// board-state violation rather than a parse failure.
pub fn validate_origin_coordinates(file: i8, rank: i8) -> MoveGenResult<BoardLocation> {
    BoardLocation::new(file, rank)
        .map_err(|_| BoardStateViolation::OriginOffBoard((file, rank)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    fn loc(label: &str) -> BoardLocation {
        BoardLocation::from_algebraic(label).unwrap()
    }

    #[test]
    fn consistent_board_passes() {
        let own: LocationSet = [loc("e2")].into_iter().collect();
        let enemy: LocationSet = [loc("e7")].into_iter().collect();
        assert_eq!(validate_board_state(loc("e2"), own, enemy), Ok(()));
    }

    #[test]
    fn origin_must_be_own() {
        let enemy: LocationSet = [loc("e2")].into_iter().collect();
        assert_eq!(
            validate_board_state(loc("e2"), LocationSet::EMPTY, enemy),
            Err(ChessErrors::InvalidBoardState(
                BoardStateViolation::OriginNotInOwn(loc("e2"))
            ))
        );
    }

    #[test]
    fn overlap_reports_lowest_square() {
        let own: LocationSet = [loc("e2"), loc("c3"), loc("h8")].into_iter().collect();
        let enemy: LocationSet = [loc("h8"), loc("c3")].into_iter().collect();
        assert_eq!(
            validate_board_state(loc("e2"), own, enemy),
            Err(ChessErrors::InvalidBoardState(
                BoardStateViolation::OccupancyOverlap(loc("c3"))
            ))
        );
    }

    #[test]
    fn off_board_origin() {
        assert_eq!(validate_origin_coordinates(4, 4), Ok(loc("e4")));
        assert_eq!(
            validate_origin_coordinates(8, 1),
            Err(ChessErrors::InvalidBoardState(
                BoardStateViolation::OriginOffBoard((8, 1))
            ))
        );
        assert!(validate_origin_coordinates(0, 0).is_err());
    }
}
