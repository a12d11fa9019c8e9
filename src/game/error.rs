//! Error types for the rules engine.

use crate::game::piece::Color;

/// Errors reported by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A row or column outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfRangeSquare { row: i32, col: i32 },

    /// A square name that isn't `a1`..`h8`.
    #[error("invalid square notation '{notation}', expected a1-h8")]
    InvalidNotation { notation: String },

    /// A click arrived after a king was already captured.
    #[error("the game is over, {winner} won")]
    GameOver { winner: Color },
}

/// Result type alias for rules engine operations
pub type GameResult<T> = Result<T, GameError>;
