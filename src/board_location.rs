use std::fmt;

use crate::chess_errors::ChessErrors;

pub const FILE_COUNT: i8 = 8;
pub const FIRST_RANK: i8 = 1;
pub const LAST_RANK: i8 = 8;

/// A square on the board: file `0..=7` (a..h) and rank `1..=8`.
///
/// The fields are private so a `BoardLocation` is always on the board.
/// Ordering is file-major, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardLocation {
    file: u8,
    rank: u8,
}

impl BoardLocation {
    /// Builds a location, rejecting coordinates off the board.
    pub fn new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if Self::is_on_board(file, rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    #[inline]
    pub const fn is_on_board(file: i8, rank: i8) -> bool {
        file >= 0 && file < FILE_COUNT && rank >= FIRST_RANK && rank <= LAST_RANK
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file as i8
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank as i8
    }

    /// Index `0..=63`, a1 = 0, b1 = 1, ..., h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + self.file as usize
    }

    /// Inverse of [`BoardLocation::index`]; `None` above 63.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index > 63 {
            return None;
        }
        Some(Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8 + 1,
        })
    }

    /// Moves the location by a file and rank offset, `None` if that leaves
    /// the board.
    #[inline]
    pub fn moved_by(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file().checked_add(d_file)?;
        let rank = self.rank().checked_add(d_rank)?;
        Self::new(file, rank).ok()
    }

    /// Parses a square label such as `e4` or `E4`.
    pub fn from_algebraic(label: &str) -> Result<Self, ChessErrors> {
        let mut chars = label.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ChessErrors::InvalidAlgebraicString(label.to_owned()));
        };

        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => (c as u8 - b'a') as i8,
            _ => return Err(ChessErrors::InvalidAlgebraicChar(file_char)),
        };
        let rank = match rank_char {
            c @ '1'..='8' => (c as u8 - b'0') as i8,
            _ => return Err(ChessErrors::InvalidAlgebraicChar(rank_char)),
        };

        Self::new(file, rank)
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Letter label of the file, `'a'..='h'`.
    #[inline]
    pub fn file_label(self) -> char {
        char::from(b'a' + self.file)
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_label(), self.rank)
    }
}
