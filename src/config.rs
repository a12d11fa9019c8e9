use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Point-and-click chess in the terminal. Take the enemy king to win.
#[derive(Parser, Debug)]
#[command(name = "clickchess", version, about)]
pub struct Config {
    /// Don't ring the terminal bell when a piece moves
    #[arg(long)]
    pub no_sound: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. `debug` or `clickchess=trace`
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Installs a file logger. The UI owns the screen, so there is no
    /// console fallback.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("invalid log filter '{}'", self.log_level))?,
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();

        Ok(())
    }
}
