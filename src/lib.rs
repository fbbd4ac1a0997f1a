//! Crate root module declarations for the piece move generator.
//!
//! Given a piece, its team, its square, and the occupancy of both sides, the
//! generator lists the squares the piece can reach under movement rules.
//! Check, castling, en-passant, and promotion are left to the caller.

pub mod board_location;
pub mod chess_errors;
pub mod location_set;
pub mod piece_class;
pub mod piece_team;

pub mod game_state {
    pub mod board_snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_patterns;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod board_moves;
    pub mod board_validation;
    pub mod move_generator;
    pub mod piece_move_generator;
}

pub mod utils {
    pub mod placement_parser;
    pub mod random_board;
}

pub use board_location::BoardLocation;
pub use chess_errors::{BoardStateViolation, ChessErrors};
pub use location_set::LocationSet;
pub use move_generation::move_generator::{ClassifiedMove, MoveGenResult, MoveGenerator, MoveKind};
pub use move_generation::piece_move_generator::{
    generate_moves, generate_moves_at, CheckedMoveGenerator, UncheckedMoveGenerator,
};
pub use piece_class::PieceClass;
pub use piece_team::PieceTeam;
