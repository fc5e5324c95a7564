//! Tie detection.

use super::win::has_winner;
use crate::board::Board;
use crate::symbol::Symbol;
use tracing::instrument;

/// True when the board is full and neither symbol has a line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board, first: Symbol, second: Symbol) -> bool {
    board.is_full() && !(has_winner(board, first) || has_winner(board, second))
}
