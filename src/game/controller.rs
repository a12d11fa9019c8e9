//! Turn and selection state machine.
//!
//! A game is driven by one kind of input, a click on a square. The first
//! click picks up a piece of the side to move, the second either moves it
//! or drops the selection. The game ends the moment a king is missing from
//! the board; after that every click is refused.

use tracing::{debug, info};

use crate::game::board::Board;
use crate::game::error::{GameError, GameResult};
use crate::game::movement::{legal_moves, LegalMoves, Move};
use crate::game::piece::{Color, Piece};
use crate::game::square::Square;

/// Hooks the host can use to react to a click. Both fire after the board
/// has been updated.
pub trait GameObserver {
    fn on_move_applied(&mut self, _mv: &Move, _captured: Option<Piece>) {}

    fn on_game_ended(&mut self, _winner: Color) {}
}

impl GameObserver for () {}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum Selection {
    #[default]
    None,
    Selected {
        piece: Piece,
        origin: Square,
        moves: LegalMoves,
    },
}

/// What a click did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    /// Nothing selectable there; state unchanged.
    Ignored,
    /// A piece was picked up.
    Selected { origin: Square },
    /// The click wasn't a legal destination, so the selection was dropped.
    Deselected,
    Moved {
        mv: Move,
        captured: Option<Piece>,
        winner: Option<Color>,
    },
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    selection: Selection,
    terminal: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        GameState::with_board(Board::standard(), Color::White)
    }

    pub fn with_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            selection: Selection::None,
            terminal: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The winner, once a king has been captured.
    pub fn is_terminal(&self) -> Option<Color> {
        self.terminal
    }

    pub fn handle_click(
        &mut self,
        square: Square,
        observer: &mut impl GameObserver,
    ) -> GameResult<ClickOutcome> {
        if let Some(winner) = self.terminal {
            debug!(%square, %winner, "click after game over");
            return Err(GameError::GameOver { winner });
        }

        match std::mem::take(&mut self.selection) {
            Selection::None => Ok(self.select(square)),
            Selection::Selected {
                piece,
                origin,
                moves,
            } => {
                if moves.contains(square) {
                    Ok(self.apply(Move::new(piece, origin, square), observer))
                } else {
                    debug!(%origin, %square, "not a destination, selection dropped");
                    Ok(ClickOutcome::Deselected)
                }
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let Some(piece) = self.board.get(square).filter(|p| p.color == self.turn) else {
            debug!(%square, turn = %self.turn, "nothing to select");
            return ClickOutcome::Ignored;
        };

        let moves = legal_moves(piece, square, &self.board);
        debug!(
            %square,
            ?piece,
            destinations = moves.destinations.len(),
            captures = moves.captures.len(),
            "selected"
        );

        self.selection = Selection::Selected {
            piece,
            origin: square,
            moves,
        };
        ClickOutcome::Selected { origin: square }
    }

    fn apply(&mut self, mv: Move, observer: &mut impl GameObserver) -> ClickOutcome {
        let captured = self.board.get(mv.to);
        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece));
        self.turn = self.turn.opposite();
        info!(from = %mv.from, to = %mv.to, piece = ?mv.piece.kind, ?captured, "move applied");

        observer.on_move_applied(&mv, captured);

        self.terminal = self.missing_king().map(|loser| loser.opposite());
        if let Some(winner) = self.terminal {
            info!(%winner, "king captured, game over");
            observer.on_game_ended(winner);
        }

        ClickOutcome::Moved {
            mv,
            captured,
            winner: self.terminal,
        }
    }

    /// White is checked first so that a board with no kings at all goes to black.
    fn missing_king(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&color| !self.board.has_king(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::PieceKind;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        moves: Vec<(Move, Option<Piece>)>,
        ended: Vec<Color>,
    }

    impl GameObserver for Recorder {
        fn on_move_applied(&mut self, mv: &Move, captured: Option<Piece>) {
            self.moves.push((*mv, captured));
        }

        fn on_game_ended(&mut self, winner: Color) {
            self.ended.push(winner);
        }
    }

    #[test]
    fn starts_waiting_for_white() {
        let game = GameState::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), &Selection::None);
        assert_eq!(game.is_terminal(), None);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn empty_and_enemy_squares_are_not_selectable() {
        let mut game = GameState::new();
        assert_eq!(game.handle_click(sq(4, 4), &mut ()), Ok(ClickOutcome::Ignored));
        assert_eq!(game.handle_click(sq(1, 4), &mut ()), Ok(ClickOutcome::Ignored));
        assert_eq!(game.selection(), &Selection::None);
    }

    #[test]
    fn select_then_move_flips_the_turn() {
        let mut game = GameState::new();
        let mut recorder = Recorder::default();

        assert_eq!(
            game.handle_click(sq(6, 4), &mut recorder),
            Ok(ClickOutcome::Selected { origin: sq(6, 4) })
        );
        let Selection::Selected { moves, .. } = game.selection() else {
            panic!("expected a selection");
        };
        assert!(moves.contains(sq(4, 4)));

        let outcome = game.handle_click(sq(4, 4), &mut recorder).unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                mv: Move::new(pawn, sq(6, 4), sq(4, 4)),
                captured: None,
                winner: None,
            }
        );
        assert_eq!(game.board().get(sq(4, 4)), Some(pawn));
        assert_eq!(game.board().get(sq(6, 4)), None);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.selection(), &Selection::None);
        assert_eq!(recorder.moves.len(), 1);
        assert!(recorder.ended.is_empty());
    }

    #[test]
    fn clicking_a_non_destination_drops_the_selection() {
        let mut game = GameState::new();
        game.handle_click(sq(6, 4), &mut ()).unwrap();
        assert_eq!(game.handle_click(sq(2, 2), &mut ()), Ok(ClickOutcome::Deselected));
        assert_eq!(game.selection(), &Selection::None);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn clicking_another_friend_does_not_reselect() {
        let mut game = GameState::new();
        game.handle_click(sq(6, 4), &mut ()).unwrap();
        assert_eq!(game.handle_click(sq(7, 1), &mut ()), Ok(ClickOutcome::Deselected));
        assert_eq!(game.selection(), &Selection::None);
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let black_king = Piece::new(Color::Black, PieceKind::King);
        board.set(sq(7, 0), Some(rook));
        board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq(0, 0), Some(black_king));
        let mut game = GameState::with_board(board, Color::White);
        let mut recorder = Recorder::default();

        game.handle_click(sq(7, 0), &mut recorder).unwrap();
        let outcome = game.handle_click(sq(0, 0), &mut recorder).unwrap();

        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                mv: Move::new(rook, sq(7, 0), sq(0, 0)),
                captured: Some(black_king),
                winner: Some(Color::White),
            }
        );
        assert_eq!(game.is_terminal(), Some(Color::White));
        assert_eq!(recorder.moves, vec![(Move::new(rook, sq(7, 0), sq(0, 0)), Some(black_king))]);
        assert_eq!(recorder.ended, vec![Color::White]);
    }

    #[test]
    fn clicks_after_the_end_are_refused() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::new(Color::Black, PieceKind::Queen)));
        board.set(sq(4, 5), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq(0, 0), Some(Piece::new(Color::Black, PieceKind::King)));
        let mut game = GameState::with_board(board, Color::Black);

        game.handle_click(sq(4, 4), &mut ()).unwrap();
        game.handle_click(sq(4, 5), &mut ()).unwrap();
        assert_eq!(game.is_terminal(), Some(Color::Black));

        let before = game.board().clone();
        let mut recorder = Recorder::default();
        assert_eq!(
            game.handle_click(sq(0, 0), &mut recorder),
            Err(GameError::GameOver {
                winner: Color::Black
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.selection(), &Selection::None);
        assert!(recorder.moves.is_empty());
        assert!(recorder.ended.is_empty());
    }

    #[test]
    fn missing_white_king_is_reported_first() {
        let mut board = Board::empty();
        board.set(sq(3, 3), Some(Piece::new(Color::White, PieceKind::Knight)));
        let mut game = GameState::with_board(board, Color::White);

        game.handle_click(sq(3, 3), &mut ()).unwrap();
        game.handle_click(sq(5, 4), &mut ()).unwrap();
        assert_eq!(game.is_terminal(), Some(Color::Black));
    }
}
