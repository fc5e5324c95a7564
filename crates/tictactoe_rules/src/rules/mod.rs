//! Game rules for tic-tac-toe.
//!
//! Pure predicates over a board snapshot. Rules are kept apart from board
//! storage so the session and tests can evaluate them independently.

mod tie;
mod win;

pub use tie::is_tie;
pub use win::{has_winner, winning_lines};
