//! Command-line interface for console_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "console_tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for reproducible symbols and computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds the computer "thinks" before moving
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Keep the scrollback instead of clearing the screen
    #[arg(long)]
    pub no_clear: bool,

    /// Where to write the log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
