use clickchess::Square;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::stdout;

/// Columns taken by the rank label in front of each board row.
pub const RANK_LABEL_WIDTH: u16 = 3;
/// Lines taken by the file labels above the board.
pub const FILE_LABEL_HEIGHT: u16 = 1;
pub const SQUARE_WIDTH: u16 = 5;
pub const SQUARE_HEIGHT: u16 = 2;

pub const BOARD_WIDTH: u16 = RANK_LABEL_WIDTH + 8 * SQUARE_WIDTH;
pub const BOARD_HEIGHT: u16 = FILE_LABEL_HEIGHT + 8 * SQUARE_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard cursor plus the mapping from terminal cells to board squares.
pub struct TerminalUI {
    cursor_pos: Square,
    board_origin: (u16, u16),
}

impl TerminalUI {
    pub fn new(cursor_pos: Square) -> Self {
        Self {
            cursor_pos,
            board_origin: (0, 0),
        }
    }

    pub fn init() -> std::io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(())
    }

    pub fn cleanup() -> std::io::Result<()> {
        let mut stdout = stdout();
        execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Where the board was last drawn, top-left cell including labels.
    pub fn set_board_origin(&mut self, x: u16, y: u16) {
        self.board_origin = (x, y);
    }

    /// The square under terminal cell (`column`, `row`), if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        let x = column.checked_sub(self.board_origin.0 + RANK_LABEL_WIDTH)?;
        let y = row.checked_sub(self.board_origin.1 + FILE_LABEL_HEIGHT)?;
        Square::new((y / SQUARE_HEIGHT) as i32, (x / SQUARE_WIDTH) as i32).ok()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (d_row, d_col) = match direction {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        };
        if let Some(square) = self.cursor_pos.offset(d_row, d_col) {
            self.cursor_pos = square;
        }
    }

    pub fn get_cursor_pos(&self) -> Square {
        self.cursor_pos
    }
}
