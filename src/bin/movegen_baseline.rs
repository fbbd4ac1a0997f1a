//! Baseline runner for whole-side move generation.
//!
//! Usage:
//! `cargo run --release --bin movegen_baseline`
//! `cargo run --release --bin movegen_baseline -- --threads 4 --iterations 20000`
//!
//! `PIECE_MOVES_THREADS` / `PIECE_MOVES_VERBOSE` set the defaults that the
//! flags override.

use std::time::Instant;

use piece_moves::move_generation::board_moves::{
    generate_team_moves, total_destinations, BatchConfig,
};
use piece_moves::utils::placement_parser::{parse_placement, START_PLACEMENT};
use piece_moves::utils::random_board::{random_board, RandomBoardConfig};
use piece_moves::PieceTeam;

fn parse_arg_usize(flag: &str, default: usize) -> usize {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<usize>() {
                return v.max(1);
            }
        }
    }
    default
}

fn run_case(
    name: &str,
    board: &piece_moves::game_state::board_snapshot::BoardSnapshot,
    iterations: usize,
    config: BatchConfig,
) -> Result<(), String> {
    let started = Instant::now();
    let mut destinations = 0usize;
    for _ in 0..iterations {
        for team in [PieceTeam::White, PieceTeam::Black] {
            let moves = generate_team_moves(board, team, config).map_err(|e| e.to_string())?;
            destinations += total_destinations(&moves);
        }
    }
    let elapsed = started.elapsed();
    let per_second = destinations as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!(
        "{name}: iterations={iterations} destinations={destinations} elapsed_ms={} destinations_per_s={per_second:.0}",
        elapsed.as_millis()
    );
    Ok(())
}

fn main() -> Result<(), String> {
    let env_config = BatchConfig::from_env();
    let config = BatchConfig {
        threads: parse_arg_usize("--threads", env_config.normalized_threads()),
        ..env_config
    };
    let iterations = parse_arg_usize("--iterations", 10_000);

    let mut suite = vec![
        (
            "startpos".to_owned(),
            parse_placement(START_PLACEMENT).map_err(|e| e.to_string())?,
        ),
        (
            "rook_endgame".to_owned(),
            parse_placement("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8").map_err(|e| e.to_string())?,
        ),
    ];
    for seed in 0..3 {
        suite.push((
            format!("random_{seed}"),
            random_board(RandomBoardConfig {
                seed,
                ..RandomBoardConfig::default()
            })
            .map_err(|e| e.to_string())?,
        ));
    }

    println!(
        "movegen baseline run: threads={} iterations={iterations}",
        config.normalized_threads()
    );
    for (name, board) in &suite {
        run_case(name, board, iterations, config)?;
    }
    Ok(())
}
