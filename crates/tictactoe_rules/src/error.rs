//! Errors that end a game early.
//!
//! Everything a player can get wrong is recovered by re-prompting and never
//! shows up here. These are the conditions that stop play outright.

use derive_more::{Display, Error};

/// Fatal condition raised while driving a game.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// The input stream ended while waiting for an answer.
    #[display("Input closed")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// A computer move was requested on a full board.
    #[display("No empty cells left to play")]
    NoEmptyCells,

    /// The computer picked a cell the board refused.
    #[display("Computer chose unavailable cell {coord}")]
    IllegalComputerMove {
        /// The refused coordinate.
        coord: crate::board::Coord,
    },

    /// A move was sent to a session that has already finished.
    #[display("Game is already over")]
    SessionFinished,

    /// The chosen players could not be seated together.
    #[display("Could not seat players: {_0}")]
    Seating(crate::session::SessionError),
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<crate::session::SessionError> for GameError {
    fn from(err: crate::session::SessionError) -> Self {
        Self::Seating(err)
    }
}
