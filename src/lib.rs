//! Chess rules for a point-and-click board where capturing the king wins.
//!
//! The host feeds clicks into [`GameState::handle_click`] and redraws from
//! [`GameState::board`] and [`GameState::selection`].

pub mod game;

pub use game::{
    is_legal, legal_moves, Board, ClickOutcome, Color, GameError, GameObserver, GameResult,
    GameState, LegalMoves, Move, Piece, PieceKind, Selection, Square,
};
