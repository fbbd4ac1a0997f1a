//! Errors used throughout the move generator.
//!
//! `ChessErrors` is the single error type of the crate. Board-integrity
//! failures are grouped under `InvalidBoardState`, which carries the exact
//! precondition that the caller's snapshot violated. Parsing failures carry
//! the offending character or string so callers can report it.
//!
//! Usage guidelines:
//! - Generation never fails because a piece has nothing to do; an empty
//!   destination list is a valid result.
//! - `InvalidBoardState` means the caller handed in a corrupt board. Treat it
//!   as a board-integrity fault of the calling layer, not something to retry.

use thiserror::Error;

use crate::board_location::BoardLocation;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The occupancy handed to the generator breaks one of its preconditions.
    #[error("invalid board state: {0}")]
    InvalidBoardState(BoardStateViolation),

    /// Tried to build a location outside `0..=7` files or `1..=8` ranks.
    ///
    /// Payload: (file, rank) as supplied.
    #[error("file/rank ({0}, {1}) is off the board")]
    InvalidFileOrRank(i8, i8),

    /// A single character of a square label was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A square label did not have the `<file><rank>` form.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Unexpected character in a piece placement string.
    #[error("invalid placement token '{0}'")]
    InvalidPlacementToken(char),

    /// Piece placement string had the wrong overall shape.
    #[error("invalid placement form: {0}")]
    InvalidPlacementForm(String),

    /// Tried to put a second piece on an occupied square of a snapshot.
    #[error("board location {0} is already occupied")]
    BoardLocationOccupied(BoardLocation),
}

/// The specific precondition broken by a board handed to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStateViolation {
    /// The origin coordinates are not on the board.
    OriginOffBoard((i8, i8)),
    /// The origin square is not part of the moving side's occupancy.
    OriginNotInOwn(BoardLocation),
    /// A square is claimed by both sides. Payload: the lowest such square.
    OccupancyOverlap(BoardLocation),
}

impl std::fmt::Display for BoardStateViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardStateViolation::OriginOffBoard((file, rank)) => {
                write!(f, "origin ({file}, {rank}) is off the board")
            }
            BoardStateViolation::OriginNotInOwn(origin) => {
                write!(f, "origin {origin} is not occupied by the moving side")
            }
            BoardStateViolation::OccupancyOverlap(location) => {
                write!(f, "{location} is occupied by both sides")
            }
        }
    }
}

impl From<BoardStateViolation> for ChessErrors {
    fn from(violation: BoardStateViolation) -> Self {
        ChessErrors::InvalidBoardState(violation)
    }
}
