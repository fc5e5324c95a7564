//! console_tictactoe - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use console_tictactoe::{App, AppConfig, Cli, Console, init_tracing};
use std::io;
use tictactoe_rules::{GameError, RandomSource, SeededRandom, ThreadRandom};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_overrides(&cli);
    init_tracing(config.log_file())?;
    info!(?config, "Starting console tic-tac-toe");

    let random: Box<dyn RandomSource> = match config.seed() {
        Some(seed) => {
            let seeded = SeededRandom::new(*seed);
            info!(seed = seeded.seed(), "Using seeded random source");
            Box::new(seeded)
        }
        None => Box::new(ThreadRandom),
    };
    let console = Console::new(io::stdin().lock(), io::stdout(), *config.clear_screen());
    let mut app = App::new(console, random, config.think_delay());

    match app.run() {
        Ok(()) => Ok(()),
        Err(GameError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Game aborted");
            Err(e.into())
        }
    }
}
