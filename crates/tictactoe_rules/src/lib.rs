//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything about the game that does not touch a
//! terminal: the board, the win and tie rules, players and their symbols,
//! the per-game session state machine and the controller that drives turns
//! through pluggable move sources and a presenter.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of [`Cell`]s with bounds and occupancy checks
//! - **Rules**: pure predicates [`has_winner`] and [`is_tie`]
//! - **Session**: one game's owned state, advanced by [`GameSession::apply_move`]
//! - **Controller**: [`TurnController`] asks [`MoveSource`]s for moves and
//!   reports progress to a [`Presenter`]
//! - **Randomness**: injected through [`RandomSource`] so games can be replayed
//!   deterministically
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, Symbol, has_winner};
//!
//! let x = Symbol::new('X').unwrap();
//! let mut board = Board::default();
//! for col in 0..3 {
//!     assert!(board.place(0, col, x));
//! }
//! assert!(has_winner(&board, x));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod moves;
mod player;
mod presenter;
mod random;
mod rules;
mod session;
mod symbol;

pub use board::{BOARD_SIZE, Board, BoardError, Cell, Coord};
pub use controller::{GameOutcome, TurnController};
pub use error::GameError;
pub use moves::{MoveInputError, MoveSource, RandomMover, parse_move};
pub use player::{COMPUTER_NAME, GameMode, NameError, Player, PlayerName};
pub use presenter::Presenter;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom, choose};
pub use rules::{has_winner, is_tie, winning_lines};
pub use session::{GameSession, MoveRejected, Outcome, SessionError, TurnOutcome, TurnState};
pub use symbol::{EMPTY_SENTINEL, PALETTE, Symbol, SymbolError, resolve_symbols};
