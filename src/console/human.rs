//! Keyboard move source.

use super::SharedConsole;
use std::io::{BufRead, Write};
use tictactoe_rules::{Board, Coord, GameError, MoveSource, Player, parse_move};
use tracing::{debug, instrument};

/// Human player typing `row col` at the console.
pub struct HumanMoveSource<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> HumanMoveSource<R, W> {
    /// Creates a source reading from `console`.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanMoveSource<R, W> {
    /// Re-asks until the answer is two numbers in range. Whether the cell is
    /// free is left to the controller.
    #[instrument(skip(self, board), fields(player = %player.name()))]
    fn next_move(&mut self, board: &Board, player: &Player) -> Result<Coord, GameError> {
        let size = board.size();
        let prompt = format!(
            "{}, Please enter row and column number (1-{size}), i.e: 2 3",
            player.name()
        );
        let mut console = self.console.borrow_mut();

        loop {
            let answer = console.ask(&prompt)?;
            match parse_move(&answer, size) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    debug!(error = %e, "Move input rejected");
                    console.say(e)?;
                }
            }
        }
    }
}
