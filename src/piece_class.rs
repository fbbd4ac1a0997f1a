/// Represents the type (class) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    pub const ALL: [PieceClass; 6] = [
        PieceClass::Pawn,
        PieceClass::Knight,
        PieceClass::Bishop,
        PieceClass::Rook,
        PieceClass::Queen,
        PieceClass::King,
    ];

    /// Sliding pieces extend along rays until blocked.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceClass::Rook | PieceClass::Bishop | PieceClass::Queen)
    }

    /// Upper-case placement letter (`P`, `N`, `B`, `R`, `Q`, `K`).
    pub const fn to_char(self) -> char {
        match self {
            PieceClass::Pawn => 'P',
            PieceClass::Knight => 'N',
            PieceClass::Bishop => 'B',
            PieceClass::Rook => 'R',
            PieceClass::Queen => 'Q',
            PieceClass::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceClass::to_char`].
    pub fn from_char(c: char) -> Option<PieceClass> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceClass::Pawn),
            'N' => Some(PieceClass::Knight),
            'B' => Some(PieceClass::Bishop),
            'R' => Some(PieceClass::Rook),
            'Q' => Some(PieceClass::Queen),
            'K' => Some(PieceClass::King),
            _ => None,
        }
    }
}
