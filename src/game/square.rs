use std::fmt;
use std::str::FromStr;

use crate::game::error::{GameError, GameResult};

/// A board position. Row 0 is black's back rank, column 0 is the a-file.
///
/// A `Square` can only be built in range, so everything that takes one is
/// total over the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> GameResult<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(GameError::OutOfRangeSquare { row, col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }

    /// The square `(d_row, d_col)` away, if it is still on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(
            self.row as i32 + d_row as i32,
            self.col as i32 + d_col as i32,
        )
        .ok()
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = GameError;

    fn try_from((row, col): (i32, i32)) -> GameResult<Self> {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file.to_ascii_lowercase();
        let rank = rank.to_digit(10).ok_or_else(invalid)?;
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(invalid());
        }

        Square::new(8 - rank as i32, (file as u8 - b'a') as i32)
    }
}
