use std::collections::BTreeSet;

use tracing::instrument;

use crate::game::board::Board;
use crate::game::piece::Piece;
use crate::game::rules::is_legal;
use crate::game::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Move { piece, from, to }
    }
}

/// Where a piece may go, and which of those squares take an enemy piece.
///
/// `captures` is always a subset of `destinations`. Both iterate row-major.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LegalMoves {
    pub destinations: BTreeSet<Square>,
    pub captures: BTreeSet<Square>,
}

impl LegalMoves {
    pub fn contains(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }

    pub fn is_capture(&self, square: Square) -> bool {
        self.captures.contains(&square)
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Probes every square on the board for `piece` standing on `from`.
#[instrument(level = "trace", skip(board), ret)]
pub fn legal_moves(piece: Piece, from: Square, board: &Board) -> LegalMoves {
    let mut moves = LegalMoves::default();

    for to in Square::all() {
        if !is_legal(piece, from, to, board) {
            continue;
        }
        moves.destinations.insert(to);
        if board.get(to).is_some_and(|target| target.color != piece.color) {
            moves.captures.insert(to);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::{Color, PieceKind};
    use proptest::prelude::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn squares(coords: &[(i32, i32)]) -> BTreeSet<Square> {
        coords.iter().map(|&(row, col)| sq(row, col)).collect()
    }

    #[test]
    fn knight_on_the_starting_board() {
        let moves = legal_moves(
            Piece::new(Color::White, PieceKind::Knight),
            sq(7, 1),
            &Board::standard(),
        );
        assert_eq!(moves.destinations, squares(&[(5, 0), (5, 2)]));
        assert!(moves.captures.is_empty());
    }

    #[test]
    fn pieces_boxed_in_at_the_start_have_no_moves() {
        let board = Board::standard();
        for (col, kind) in [
            (0, PieceKind::Rook),
            (2, PieceKind::Bishop),
            (3, PieceKind::Queen),
            (4, PieceKind::King),
        ] {
            let moves = legal_moves(Piece::new(Color::White, kind), sq(7, col), &board);
            assert!(moves.is_empty(), "{kind:?} should be boxed in");
        }
    }

    #[test]
    fn captures_are_enemy_occupied_destinations() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.set(sq(4, 4), Some(rook));
        board.set(sq(4, 6), Some(Piece::new(Color::Black, PieceKind::Knight)));
        board.set(sq(1, 4), Some(Piece::new(Color::White, PieceKind::Pawn)));

        let moves = legal_moves(rook, sq(4, 4), &board);
        assert_eq!(moves.captures, squares(&[(4, 6)]));
        assert!(moves.contains(sq(4, 5)));
        assert!(moves.contains(sq(4, 6)));
        assert!(!moves.contains(sq(4, 7)));
        assert!(moves.contains(sq(2, 4)));
        assert!(!moves.contains(sq(1, 4)));
        assert_eq!(moves.destinations.len(), 4 + 3 + 2 + 2);
    }

    #[test]
    fn pawn_capture_options() {
        let mut board = Board::standard();
        board.set(sq(5, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let moves = legal_moves(Piece::new(Color::White, PieceKind::Pawn), sq(6, 4), &board);
        assert_eq!(moves.destinations, squares(&[(4, 4), (5, 3), (5, 4)]));
        assert_eq!(moves.captures, squares(&[(5, 3)]));
    }

    fn any_piece() -> impl Strategy<Value = Piece> {
        (
            prop_oneof![Just(Color::White), Just(Color::Black)],
            prop::sample::select(PieceKind::ALL.to_vec()),
        )
            .prop_map(|(color, kind)| Piece::new(color, kind))
    }

    proptest! {
        #[test]
        fn captures_are_a_subset_of_destinations(
            piece in any_piece(),
            (row, col) in (0..8i32, 0..8i32),
            cells in prop::collection::vec(prop::option::weighted(0.4, any_piece()), 64),
        ) {
            let mut board = Board::empty();
            for (square, cell) in Square::all().zip(cells) {
                board.set(square, cell);
            }
            let from = sq(row, col);

            let moves = legal_moves(piece, from, &board);
            prop_assert!(moves.captures.is_subset(&moves.destinations));
            prop_assert!(!moves.contains(from));
            for to in &moves.destinations {
                prop_assert!(board.get(*to).map_or(true, |p| p.color != piece.color));
            }
        }
    }
}
