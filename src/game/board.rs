use std::fmt;

use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::square::Square;

/// An 8x8 grid of optional pieces.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The usual starting position, black on rows 0 and 1.
    pub fn standard() -> Self {
        let mut board = Board::empty();

        // back rank pieces
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (i, &kind) in back_rank.iter().enumerate() {
            board.squares[0][i] = Some(Piece::new(Color::Black, kind));
            board.squares[1][i] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][i] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][i] = Some(Piece::new(Color::White, kind));
        }

        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every square with its occupant, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |square| (square, self.get(square)))
    }

    pub fn has_king(&self, color: Color) -> bool {
        let king = Piece::new(color, PieceKind::King);
        self.squares().any(|(_, piece)| piece == Some(king))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|piece| piece.map_or('.', |p| p.to_char()))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
