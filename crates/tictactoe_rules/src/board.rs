//! Board storage with bounds and occupancy checks.

use crate::symbol::Symbol;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board used in play.
pub const BOARD_SIZE: usize = 3;

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// A player's symbol occupies the cell.
    Occupied(Symbol),
}

/// A zero-based `(row, col)` board coordinate.
///
/// Displays 1-based, the way players type and read positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new)]
#[display("({}, {})", row + 1, col + 1)]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// Board query outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column is not in `0..size`.
    #[display("Please enter valid row and column number (0-{}).", size.saturating_sub(1))]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
}

/// Square grid of cells in row-major order.
///
/// The side length is fixed at creation and cells only ever go from
/// [`Cell::Empty`] to [`Cell::Occupied`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board. `size` must be non-zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// Reports whether `(row, col)` is free.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] when either index is outside the grid.
    pub fn is_empty_cell(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        let i = self.index(row, col)?;
        Ok(self.cells[i] == Cell::Empty)
    }

    /// Occupies `(row, col)` with `symbol`.
    ///
    /// Returns `false` without touching the board when the cell is taken or
    /// outside the grid.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        match self.is_empty_cell(row, col) {
            Ok(true) => {
                let i = row * self.size + col;
                self.cells[i] = Cell::Occupied(symbol);
                true
            }
            Ok(false) => {
                debug!("Cell already occupied");
                false
            }
            Err(e) => {
                debug!(error = %e, "Placement outside board");
                false
            }
        }
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// True when every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Coordinates of every empty cell, row by row.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
