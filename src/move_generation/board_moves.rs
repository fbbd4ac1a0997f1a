//! Whole-side move generation over a board snapshot.
//!
//! Each piece is generated independently, so the work splits into
//! contiguous chunks of pieces run on scoped threads. Chunks are re-joined in
//! order, which keeps the output identical to the single-threaded path:
//! one entry per piece, in ascending origin square index.

use std::time::Instant;

use crate::board_location::BoardLocation;
use crate::game_state::board_snapshot::{BoardSnapshot, PlacedPiece};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::move_generation::piece_move_generator::CheckedMoveGenerator;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

pub const THREADS_ENV_VAR: &str = "PIECE_MOVES_THREADS";
pub const VERBOSE_ENV_VAR: &str = "PIECE_MOVES_VERBOSE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub threads: usize,
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            verbose: false,
        }
    }
}

impl BatchConfig {
    /// Defaults overridden by `PIECE_MOVES_THREADS` and `PIECE_MOVES_VERBOSE`.
    /// Unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(threads) = lookup(THREADS_ENV_VAR).and_then(|v| v.trim().parse().ok()) {
            config.threads = threads;
        }
        if let Some(verbose) = lookup(VERBOSE_ENV_VAR) {
            let verbose = verbose.trim();
            config.verbose = verbose == "1" || verbose.eq_ignore_ascii_case("true");
        }
        config
    }

    #[inline]
    pub fn normalized_threads(self) -> usize {
        self.threads.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub origin: BoardLocation,
    pub class: PieceClass,
    pub destinations: Vec<BoardLocation>,
}

pub fn total_destinations(moves: &[PieceMoves]) -> usize {
    moves.iter().map(|m| m.destinations.len()).sum()
}

/// Generates every piece of `team` with the validating generator.
pub fn generate_team_moves(
    board: &BoardSnapshot,
    team: PieceTeam,
    config: BatchConfig,
) -> MoveGenResult<Vec<PieceMoves>> {
    generate_team_moves_with(&CheckedMoveGenerator, board, team, config)
}

pub fn generate_team_moves_with<G: MoveGenerator>(
    generator: &G,
    board: &BoardSnapshot,
    team: PieceTeam,
    config: BatchConfig,
) -> MoveGenResult<Vec<PieceMoves>> {
    let started = Instant::now();
    let pieces: Vec<PlacedPiece> = board.pieces(team).collect();
    let threads = config.normalized_threads().min(pieces.len().max(1));

    let moves = if threads <= 1 {
        generate_chunk(generator, board, team, &pieces)?
    } else {
        let chunk_size = pieces.len().div_ceil(threads);
        let chunk_results: Vec<MoveGenResult<Vec<PieceMoves>>> = std::thread::scope(|scope| {
            let handles: Vec<_> = pieces
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || generate_chunk(generator, board, team, chunk)))
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut merged = Vec::with_capacity(pieces.len());
        for chunk in chunk_results {
            merged.extend(chunk?);
        }
        merged
    };

    if config.verbose {
        println!(
            "[movegen] team={:?} pieces={} destinations={} threads={} elapsed_us={}",
            team,
            moves.len(),
            total_destinations(&moves),
            threads,
            started.elapsed().as_micros()
        );
    }

    Ok(moves)
}

fn generate_chunk<G: MoveGenerator>(
    generator: &G,
    board: &BoardSnapshot,
    team: PieceTeam,
    pieces: &[PlacedPiece],
) -> MoveGenResult<Vec<PieceMoves>> {
    let own = board.occupancy(team);
    let enemy = board.occupancy(team.opposite());
    pieces
        .iter()
        .map(|piece| {
            let destinations =
                generator.generate_piece_moves(piece.class, team, piece.location, own, enemy)?;
            Ok(PieceMoves {
                origin: piece.location,
                class: piece.class,
                destinations,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::placement_parser::{parse_placement, START_PLACEMENT};
    use crate::utils::random_board::{random_board, RandomBoardConfig};

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let board = parse_placement(START_PLACEMENT).unwrap();
        for team in [PieceTeam::White, PieceTeam::Black] {
            let moves = generate_team_moves(&board, team, BatchConfig::default()).unwrap();
            assert_eq!(moves.len(), 16);
            assert_eq!(total_destinations(&moves), 20);
        }
    }

    #[test]
    fn known_positions_destination_counts() {
        let cases = [
            ("8/8/8/3Q4/8/8/8/8", PieceTeam::White, 27),
            ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", PieceTeam::Black, 17),
            ("8/8/8/2BQR3/8/8/8/8", PieceTeam::White, 41),
        ];
        for (placement, team, expected) in cases {
            let board = parse_placement(placement).unwrap();
            let moves = generate_team_moves(&board, team, BatchConfig::default()).unwrap();
            assert_eq!(total_destinations(&moves), expected, "{placement}");
        }
    }

    #[test]
    fn output_is_in_origin_index_order() {
        let board = parse_placement(START_PLACEMENT).unwrap();
        let moves = generate_team_moves(&board, PieceTeam::White, BatchConfig::default()).unwrap();
        assert_eq!(moves[0].origin.to_string(), "a1");
        assert_eq!(moves[0].class, PieceClass::Rook);
        assert!(moves[0].destinations.is_empty());
        assert!(moves.windows(2).all(|w| w[0].origin.index() < w[1].origin.index()));
    }

    #[test]
    fn threaded_generation_matches_single_threaded() {
        for seed in 0..20 {
            let board = random_board(RandomBoardConfig {
                seed,
                ..RandomBoardConfig::default()
            })
            .unwrap();
            for team in [PieceTeam::White, PieceTeam::Black] {
                let single = generate_team_moves(&board, team, BatchConfig::default()).unwrap();
                for threads in [2, 3, 8, 64] {
                    let config = BatchConfig {
                        threads,
                        ..BatchConfig::default()
                    };
                    assert_eq!(generate_team_moves(&board, team, config).unwrap(), single);
                }
            }
        }
    }

    #[test]
    fn side_without_pieces_yields_nothing() {
        let board = parse_placement("8/8/8/8/8/8/8/4K3").unwrap();
        let config = BatchConfig {
            threads: 4,
            ..BatchConfig::default()
        };
        assert!(generate_team_moves(&board, PieceTeam::Black, config)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn config_reads_overrides() {
        let config = BatchConfig::from_lookup(|key| match key {
            THREADS_ENV_VAR => Some(" 6 ".to_owned()),
            VERBOSE_ENV_VAR => Some("TRUE".to_owned()),
            _ => None,
        });
        assert_eq!(
            config,
            BatchConfig {
                threads: 6,
                verbose: true
            }
        );

        let fallback = BatchConfig::from_lookup(|key| match key {
            THREADS_ENV_VAR => Some("many".to_owned()),
            _ => None,
        });
        assert_eq!(fallback, BatchConfig::default());
        assert_eq!(
            BatchConfig {
                threads: 0,
                verbose: false
            }
            .normalized_threads(),
            1
        );
    }
}
