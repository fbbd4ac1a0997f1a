//! Piece placement parsing and generation.
//!
//! Reads and writes the board field of a FEN string, rank 8 first:
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`. Upper case is white.
//! A full FEN line is accepted; fields after the first are ignored.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub fn parse_placement(placement: &str) -> Result<BoardSnapshot, ChessErrors> {
    let board_part = placement
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidPlacementForm("empty placement".to_owned()))?;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPlacementForm(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = BoardSnapshot::new_empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row as i8;
        let mut file: i8 = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacementToken(ch));
                }
                file += empty_count as i8;
            } else {
                let class = PieceClass::from_char(ch)
                    .ok_or(ChessErrors::InvalidPlacementToken(ch))?;
                let team = if ch.is_ascii_uppercase() {
                    PieceTeam::White
                } else {
                    PieceTeam::Black
                };
                let location = BoardLocation::new(file, rank).map_err(|_| {
                    ChessErrors::InvalidPlacementForm(format!("rank {rank} overflows: {rank_str}"))
                })?;
                board.place(location, class, team)?;
                file += 1;
            }

            if file > 8 {
                return Err(ChessErrors::InvalidPlacementForm(format!(
                    "rank {rank} overflows: {rank_str}"
                )));
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidPlacementForm(format!(
                "rank {rank} has {file} files: {rank_str}"
            )));
        }
    }

    Ok(board)
}

pub fn generate_placement(board: &BoardSnapshot) -> String {
    let mut out = String::with_capacity(71);
    for rank in (1..=8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8 {
            let piece = BoardLocation::new(file, rank)
                .ok()
                .and_then(|location| board.piece_at(location));
            match piece {
                Some((class, team)) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    let c = class.to_char();
                    out.push(match team {
                        PieceTeam::White => c,
                        PieceTeam::Black => c.to_ascii_lowercase(),
                    });
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 1 {
            out.push('/');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(label: &str) -> BoardLocation {
        BoardLocation::from_algebraic(label).unwrap()
    }

    #[test]
    fn start_placement_has_thirty_two_pieces() {
        let board = parse_placement(START_PLACEMENT).unwrap();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.piece_at(loc("d1")),
            Some((PieceClass::Queen, PieceTeam::White))
        );
        assert_eq!(
            board.piece_at(loc("g8")),
            Some((PieceClass::Knight, PieceTeam::Black))
        );
        assert_eq!(board.piece_at(loc("e4")), None);
        assert_eq!(generate_placement(&board), START_PLACEMENT);
    }

    #[test]
    fn full_fen_line_is_accepted() {
        let board =
            parse_placement("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
        assert_eq!(board.piece_count(), 10);
        assert_eq!(
            board.piece_at(loc("h5")),
            Some((PieceClass::Rook, PieceTeam::Black))
        );
        assert_eq!(generate_placement(&board), "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8");
    }

    #[test]
    fn malformed_placements_are_rejected() {
        assert!(matches!(
            parse_placement(""),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementToken('9'))
        ));
        assert!(matches!(
            parse_placement("7/8/8/8/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("ppppppppp/8/8/8/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("8/8/8/3x4/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementToken('x'))
        ));
    }
}
