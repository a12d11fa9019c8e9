use std::io::{self, Write};

use clickchess::{
    ClickOutcome, Color as PieceColor, GameObserver, GameResult, GameState, Move, Piece,
    Selection, Square,
};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

use crate::config::Config;
use crate::ui::terminal::{
    Direction, TerminalUI, BOARD_HEIGHT, BOARD_WIDTH, SQUARE_HEIGHT, SQUARE_WIDTH,
};

const LIGHT_BROWN: Color = Color::Rgb(240, 217, 181);
const DARK_BROWN: Color = Color::Rgb(181, 136, 99);
const HIGHLIGHT: Color = Color::Rgb(186, 202, 68);
const CAPTURE_MARK: Color = Color::Rgb(255, 0, 0);

/// Receives the engine's notifications: rings the bell on every move and
/// remembers how the game went for the status line.
pub struct Feedback {
    sound: bool,
    pub last_move: Option<String>,
    pub winner: Option<PieceColor>,
}

impl Feedback {
    fn new(sound: bool) -> Self {
        Self {
            sound,
            last_move: None,
            winner: None,
        }
    }
}

impl GameObserver for Feedback {
    fn on_move_applied(&mut self, mv: &Move, captured: Option<Piece>) {
        let mut description = format!("{} {} → {}", mv.piece.to_char(), mv.from, mv.to);
        if let Some(captured) = captured {
            description.push_str(&format!(" takes {}", captured.to_char()));
        }
        self.last_move = Some(description);

        if self.sound {
            let mut stdout = io::stdout();
            if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                warn!(%err, "failed to ring the bell");
            }
        }
    }

    fn on_game_ended(&mut self, winner: PieceColor) {
        self.winner = Some(winner);
    }
}

pub struct App {
    pub game: GameState,
    pub terminal_ui: TerminalUI,
    pub feedback: Feedback,
    pub should_quit: bool,
    pub message: String,
}

impl App {
    pub fn new(config: &Config) -> GameResult<Self> {
        // start the cursor on the king's pawn
        let start = Square::new(6, 4)?;
        Ok(Self {
            game: GameState::new(),
            terminal_ui: TerminalUI::new(start),
            feedback: Feedback::new(!config.no_sound),
            should_quit: false,
            message: String::from("Click a piece to see where it can go"),
        })
    }

    pub fn winner(&self) -> Option<PieceColor> {
        self.game.is_terminal()
    }

    pub fn click(&mut self, square: Square) {
        match self.game.handle_click(square, &mut self.feedback) {
            Ok(ClickOutcome::Ignored) => {}
            Ok(ClickOutcome::Selected { origin }) => {
                if let Selection::Selected { piece, moves, .. } = self.game.selection() {
                    self.message = format!(
                        "{} on {}: {} moves, {} captures",
                        piece.to_char(),
                        origin,
                        moves.destinations.len(),
                        moves.captures.len()
                    );
                }
            }
            Ok(ClickOutcome::Deselected) => {
                self.message = format!("{} can't go there", square);
            }
            Ok(ClickOutcome::Moved { winner, .. }) => {
                self.message = self.feedback.last_move.clone().unwrap_or_default();
                if winner.is_some() {
                    self.should_quit = true;
                }
            }
            Err(err) => {
                self.message = err.to_string();
                self.should_quit = true;
            }
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.terminal_ui.move_cursor(Direction::Up),
            KeyCode::Down => self.terminal_ui.move_cursor(Direction::Down),
            KeyCode::Left => self.terminal_ui.move_cursor(Direction::Left),
            KeyCode::Right => self.terminal_ui.move_cursor(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.terminal_ui.get_cursor_pos()),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(square) = self
            .terminal_ui
            .square_at(mouse_event.column, mouse_event.row)
        {
            self.click(square);
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1),            // title
                Constraint::Length(BOARD_HEIGHT), // board
                Constraint::Length(3),            // status
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new("Chess Game").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(title, layout[0]);

        let board_area = Rect {
            width: BOARD_WIDTH.min(layout[1].width),
            ..layout[1]
        };
        self.terminal_ui.set_board_origin(board_area.x, board_area.y);
        frame.render_widget(Paragraph::new(self.board_lines()), board_area);

        let turn = match self.winner() {
            Some(winner) => format!("{} wins", winner),
            None => format!("{} to move", self.game.turn()),
        };
        let status = Paragraph::new(Line::from(vec![
            Span::styled(turn, Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::raw(self.message.as_str()),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout[2]);
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let moves = match self.game.selection() {
            Selection::Selected { moves, .. } => Some(moves),
            Selection::None => None,
        };
        let cursor = self.terminal_ui.get_cursor_pos();
        let board = self.game.board();

        let mut lines = vec![];

        let mut files = String::from("   ");
        for file in 'a'..='h' {
            files.push_str(&format!("{:^width$}", file, width = SQUARE_WIDTH as usize));
        }
        lines.push(Line::from(Span::styled(files, Style::default().fg(Color::Green))));

        for row in 0..8 {
            for line in 0..SQUARE_HEIGHT {
                let label = if line == SQUARE_HEIGHT / 2 {
                    format!("{}  ", 8 - row)
                } else {
                    String::from("   ")
                };
                let mut spans = vec![Span::styled(label, Style::default().fg(Color::Green))];

                for col in 0..8 {
                    let Ok(square) = Square::new(row, col) else {
                        continue;
                    };

                    let mut background = if (row + col) % 2 == 0 {
                        LIGHT_BROWN
                    } else {
                        DARK_BROWN
                    };
                    if moves.is_some_and(|m| m.contains(square)) {
                        background = HIGHLIGHT;
                    }
                    let mut style = Style::default().bg(background);
                    if square == cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }

                    let text = if line == SQUARE_HEIGHT / 2 {
                        match board.get(square) {
                            Some(piece) => {
                                let fg = if piece.color == PieceColor::White {
                                    Color::White
                                } else {
                                    Color::Black
                                };
                                style = style.fg(fg).add_modifier(Modifier::BOLD);
                                format!("  {}  ", piece.to_char())
                            }
                            None => String::from("     "),
                        }
                    } else if moves.is_some_and(|m| m.is_capture(square)) {
                        style = style.fg(CAPTURE_MARK);
                        String::from("  ●  ")
                    } else {
                        String::from("     ")
                    };

                    spans.push(Span::styled(text, style));
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}
