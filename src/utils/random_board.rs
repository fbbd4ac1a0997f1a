//! Seeded random board snapshots for tests and benchmarks.
//!
//! Pieces are drawn uniformly from all six classes and dropped on distinct
//! random squares. The result is a consistent occupancy, not necessarily a
//! reachable chess position.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomBoardConfig {
    pub seed: u64,
    pub white_pieces: u8,
    pub black_pieces: u8,
}

impl Default for RandomBoardConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            white_pieces: 12,
            black_pieces: 12,
        }
    }
}

/// Builds a board from `config`. Piece counts are capped so both sides fit.
pub fn random_board(config: RandomBoardConfig) -> Result<BoardSnapshot, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut squares: Vec<usize> = (0..64).collect();
    squares.shuffle(&mut rng);

    let white = usize::from(config.white_pieces).min(64);
    let black = usize::from(config.black_pieces).min(64 - white);

    let mut board = BoardSnapshot::new_empty();
    let teams = std::iter::repeat(PieceTeam::White)
        .take(white)
        .chain(std::iter::repeat(PieceTeam::Black).take(black));

    for (index, team) in squares.into_iter().zip(teams) {
        let Some(location) = BoardLocation::from_index(index) else {
            continue;
        };
        let class = PieceClass::ALL[rng.random_range(0..PieceClass::ALL.len())];
        board.place(location, class, team)?;
    }

    Ok(board)
}
