//! Rules engine: board, per-piece legality, move enumeration and the
//! click-driven turn controller. Nothing in here touches the terminal.

pub mod board;
pub mod controller;
pub mod error;
pub mod movement;
pub mod piece;
pub mod rules;
pub mod square;

pub use board::Board;
pub use controller::{ClickOutcome, GameObserver, GameState, Selection};
pub use error::{GameError, GameResult};
pub use movement::{legal_moves, LegalMoves, Move};
pub use piece::{Color, Piece, PieceKind};
pub use rules::is_legal;
pub use square::Square;
