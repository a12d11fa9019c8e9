//! Per-piece move legality.
//!
//! Pure checks of a single candidate move against a board. There is no
//! notion of check here: a king may walk into an attacked square.

use crate::game::board::Board;
use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::square::Square;

/// Whether `piece` standing on `from` may move to `to`.
///
/// The piece itself need not be on `from`; only the other squares matter.
pub fn is_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    // never capture your own pieces
    if let Some(target) = board.get(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(from, to, piece.color, board),
        PieceKind::Rook => is_legal_rook_move(from, to, board),
        PieceKind::Knight => is_legal_knight_move(from, to),
        PieceKind::Bishop => is_legal_bishop_move(from, to, board),
        PieceKind::Queen => {
            is_legal(piece.with_kind(PieceKind::Rook), from, to, board)
                || is_legal(piece.with_kind(PieceKind::Bishop), from, to, board)
        }
        PieceKind::King => is_legal_king_move(from, to),
    }
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn is_legal_pawn_move(from: Square, to: Square, color: Color, board: &Board) -> bool {
    let direction = color.forward();
    let (rank_diff, file_diff) = deltas(from, to);

    if file_diff == 0 {
        // straight moves never capture
        if !board.is_empty(to) {
            return false;
        }
        if rank_diff == direction {
            return true;
        }
        // double step from the home rank, through an empty square
        if rank_diff == 2 * direction && from.row() == color.pawn_rank() {
            return from
                .offset(direction, 0)
                .is_some_and(|between| board.is_empty(between));
        }
        false
    } else if file_diff.abs() == 1 && rank_diff == direction {
        !board.is_empty(to)
    } else {
        false
    }
}

fn is_legal_rook_move(from: Square, to: Square, board: &Board) -> bool {
    // rook moves horizontally or vertically but not diagonally
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_legal_knight_move(from: Square, to: Square) -> bool {
    let (rank_diff, file_diff) = deltas(from, to);
    let (rank_diff, file_diff) = (rank_diff.abs(), file_diff.abs());

    (rank_diff == 2 && file_diff == 1) || (rank_diff == 1 && file_diff == 2)
}

fn is_legal_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (rank_diff, file_diff) = deltas(from, to);

    if rank_diff.abs() != file_diff.abs() {
        return false;
    }

    is_path_clear(from, to, board)
}

fn is_legal_king_move(from: Square, to: Square) -> bool {
    let (rank_diff, file_diff) = deltas(from, to);

    from != to && rank_diff.abs() <= 1 && file_diff.abs() <= 1
}

/// Walks from `from` towards `to` one unit step at a time and reports
/// whether every square strictly between them is empty.
///
/// Callers guarantee the two squares share a row, column or diagonal.
/// A zero-length move has no direction and is rejected up front.
fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }

    let (rank_diff, file_diff) = deltas(from, to);
    let (rank_step, file_step) = (rank_diff.signum(), file_diff.signum());

    let mut current = from.offset(rank_step, file_step);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(rank_step, file_step);
    }

    false
}
