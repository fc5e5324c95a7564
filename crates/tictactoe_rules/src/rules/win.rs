//! Win detection.

use crate::board::{Board, Cell, Coord};
use crate::symbol::Symbol;
use tracing::instrument;

/// Every line that wins on a `size` x `size` board.
///
/// That is `size` rows, `size` columns, the main diagonal and the
/// anti-diagonal, in that order. Shorter diagonals never count.
pub fn winning_lines(size: usize) -> Vec<Vec<Coord>> {
    let rows = (0..size).map(|row| (0..size).map(|col| Coord::new(row, col)).collect::<Vec<_>>());
    let cols = (0..size).map(|col| (0..size).map(|row| Coord::new(row, col)).collect::<Vec<_>>());
    let main: Vec<Coord> = (0..size).map(|i| Coord::new(i, i)).collect();
    let anti: Vec<Coord> = (0..size).map(|i| Coord::new(i, size - 1 - i)).collect();

    rows.chain(cols).chain([main, anti]).collect()
}

/// True when some row, column or main diagonal is filled with `symbol`.
#[instrument(skip(board))]
pub fn has_winner(board: &Board, symbol: Symbol) -> bool {
    let target = Some(Cell::Occupied(symbol));
    winning_lines(board.size()).iter().any(|line| {
        !line.is_empty() && line.iter().all(|c| board.cell(c.row, c.col) == target)
    })
}
