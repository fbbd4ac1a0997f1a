use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::location_set::LocationSet;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

pub type MoveGenResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Destination is empty.
    Quiet,
    /// Destination holds an enemy piece.
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedMove {
    pub to: BoardLocation,
    pub kind: MoveKind,
}

impl ClassifiedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.kind == MoveKind::Capture
    }
}

/// Tags each destination as a capture when it is held by `enemy`.
pub fn classify_moves(destinations: &[BoardLocation], enemy: LocationSet) -> Vec<ClassifiedMove> {
    destinations
        .iter()
        .map(|&to| ClassifiedMove {
            to,
            kind: if enemy.contains(to) {
                MoveKind::Capture
            } else {
                MoveKind::Quiet
            },
        })
        .collect()
}

/// Produces the squares one piece can reach, ignoring check.
///
/// Implementations are stateless; every call reads only its arguments.
pub trait MoveGenerator: Send + Sync {
    fn generate_piece_moves(
        &self,
        class: PieceClass,
        team: PieceTeam,
        origin: BoardLocation,
        own: LocationSet,
        enemy: LocationSet,
    ) -> MoveGenResult<Vec<BoardLocation>>;

    fn generate_classified_moves(
        &self,
        class: PieceClass,
        team: PieceTeam,
        origin: BoardLocation,
        own: LocationSet,
        enemy: LocationSet,
    ) -> MoveGenResult<Vec<ClassifiedMove>> {
        let destinations = self.generate_piece_moves(class, team, origin, own, enemy)?;
        Ok(classify_moves(&destinations, enemy))
    }
}
