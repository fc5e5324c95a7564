//! Console tic-tac-toe.
//!
//! The terminal front end for [`tictactoe_rules`]: prompts, board rendering,
//! the keyboard move source and the replay loop, plus configuration and
//! logging for the `console_tictactoe` binary.
//!
//! # Architecture
//!
//! - **Console**: line-based reader/writer shared by prompts, the human move
//!   source and the presenter
//! - **App**: seats players, plays a game, offers a rematch
//! - **Config**: optional TOML file with command-line overrides
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{App, Console};
//! use std::io::Cursor;
//! use std::time::Duration;
//! use tictactoe_rules::ScriptedRandom;
//!
//! let input = "1\nAda\nBob\nX\nO\n\n1 1\n2 1\n1 2\n2 2\n1 3\nn\n";
//! let console = Console::new(Cursor::new(input.to_string()), Vec::new(), false);
//! let mut app = App::new(console, ScriptedRandom::default(), Duration::ZERO);
//! app.run().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod logging;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_LOG_FILE};
pub use console::{Console, ConsolePresenter, HumanMoveSource, SharedConsole, render_board};
pub use logging::{DEFAULT_LOG_FILTER, init_tracing};
