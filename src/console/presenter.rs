//! Console implementation of the presenter.

use super::{SharedConsole, render_board};
use std::io::{BufRead, Write};
use tictactoe_rules::{Board, Coord, GameError, Player, Presenter};

/// Prints game progress to the shared console.
pub struct ConsolePresenter<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> ConsolePresenter<R, W> {
    /// Creates a presenter writing to `console`.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        let mut console = self.console.borrow_mut();
        console.clear()?;
        console.say(render_board(board))
    }

    fn thinking(&mut self, player: &Player) -> Result<(), GameError> {
        self.console
            .borrow_mut()
            .say(format!("\n{} is thinking...", player.name()))
    }

    fn move_placed(&mut self, player: &Player, coord: Coord) -> Result<(), GameError> {
        self.console.borrow_mut().say(format!(
            "{} placed {} at position {coord}",
            player.name(),
            player.symbol()
        ))
    }

    fn cell_taken(&mut self, _player: &Player, _coord: Coord) -> Result<(), GameError> {
        self.console
            .borrow_mut()
            .say("That position is already taken! Please try again.")
    }
}
