//! Presentation boundary used by the turn controller.

use crate::board::{Board, Coord};
use crate::error::GameError;
use crate::player::Player;

/// Receives game progress for display.
///
/// The controller calls these in turn order; implementations decide how (or
/// whether) to show them.
pub trait Presenter {
    /// Shows the board at the start of a turn and once more at game end.
    fn show_board(&mut self, board: &Board) -> Result<(), GameError>;

    /// Announces that the computer is about to choose a move.
    fn thinking(&mut self, player: &Player) -> Result<(), GameError>;

    /// Reports an accepted move.
    fn move_placed(&mut self, player: &Player, coord: Coord) -> Result<(), GameError>;

    /// Reports that a human picked a cell that is already taken.
    fn cell_taken(&mut self, player: &Player, coord: Coord) -> Result<(), GameError>;
}
