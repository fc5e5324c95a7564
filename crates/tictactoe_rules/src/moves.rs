//! Move sources and move-text parsing.

use crate::board::{Board, Coord};
use crate::error::GameError;
use crate::player::Player;
use crate::random::{RandomSource, choose};
use derive_more::{Display, Error};
use std::time::Duration;
use tracing::{debug, instrument};

/// Supplies the next move for the active player.
pub trait MoveSource {
    /// Returns a zero-based, in-range coordinate for `player` to play.
    ///
    /// The controller only calls this while the board has an empty cell.
    fn next_move(&mut self, board: &Board, player: &Player) -> Result<Coord, GameError>;
}

/// Why a typed move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveInputError {
    /// Not exactly two whitespace-separated tokens.
    #[display("Please enter exactly two numbers separated by a space.")]
    WrongTokenCount,
    /// A token is not an integer.
    #[display("Please enter valid numbers.")]
    NotANumber,
    /// A number is outside `1..=size`.
    #[display("Please enter numbers between 1 and {size}.")]
    OutOfRange {
        /// Board side length.
        size: usize,
    },
}

/// Parses `"row col"` (1-based) into a zero-based coordinate on a `size` board.
#[instrument]
pub fn parse_move(input: &str, size: usize) -> Result<Coord, MoveInputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(MoveInputError::WrongTokenCount);
    };

    let row: i64 = row.parse().map_err(|_| MoveInputError::NotANumber)?;
    let col: i64 = col.parse().map_err(|_| MoveInputError::NotANumber)?;

    let to_index = |n: i64| -> Result<usize, MoveInputError> {
        usize::try_from(n)
            .ok()
            .filter(|&n| (1..=size).contains(&n))
            .map(|n| n - 1)
            .ok_or(MoveInputError::OutOfRange { size })
    };

    Ok(Coord::new(to_index(row)?, to_index(col)?))
}

/// Computer player that picks uniformly among the empty cells.
#[derive(Debug)]
pub struct RandomMover<R> {
    rng: R,
    think_delay: Duration,
}

impl<R: RandomSource> RandomMover<R> {
    /// Creates a mover that waits `think_delay` before answering.
    pub fn new(rng: R, think_delay: Duration) -> Self {
        Self { rng, think_delay }
    }
}

impl<R: RandomSource> MoveSource for RandomMover<R> {
    #[instrument(skip(self, board), fields(player = %player.name()))]
    fn next_move(&mut self, board: &Board, player: &Player) -> Result<Coord, GameError> {
        let empty = board.empty_cells();
        let coord = *choose(&mut self.rng, &empty).ok_or(GameError::NoEmptyCells)?;

        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }

        debug!(%coord, candidates = empty.len(), "Computer chose cell");
        Ok(coord)
    }
}
