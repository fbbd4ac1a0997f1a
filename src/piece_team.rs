/// Represents the team (color) of a chess piece.
/// Only pawn movement depends on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    /// The light side, moving up the board.
    White,
    /// The dark side, moving down the board.
    Black,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::White => 0,
            PieceTeam::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }

    /// Rank step of a pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceTeam::White => 1,
            PieceTeam::Black => -1,
        }
    }

    /// Rank from which a pawn may double step.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            PieceTeam::White => 2,
            PieceTeam::Black => 7,
        }
    }
}
