mod config;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use config::Config;
use ui::app::App;
use ui::terminal::TerminalUI;

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging()?;

    let mut app = App::new(&config)?;

    // terminal
    TerminalUI::init().context("failed to set up the terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // restore the terminal
    TerminalUI::cleanup().context("failed to restore the terminal")?;
    terminal.show_cursor()?;

    res?;

    match app.winner() {
        Some(winner) => {
            let loser = winner.opposite();
            info!(%winner, "game finished");
            println!(
                "{}",
                format!("{winner} wins! {loser}'s king has been captured.")
                    .green()
                    .bold()
            );
        }
        None => info!("game abandoned"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
            Event::Mouse(mouse) => app.handle_mouse_event(mouse),
            _ => {}
        }
    }
}
