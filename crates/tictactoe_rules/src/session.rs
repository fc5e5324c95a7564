//! One game's owned state and its turn state machine.
//!
//! A [`GameSession`] is created when players are seated, advanced one
//! accepted move at a time by [`GameSession::apply_move`], and dropped when
//! the game ends. Nothing carries over to the next game.

use crate::board::{Board, Coord};
use crate::player::{GameMode, Player};
use crate::rules::{has_winner, is_tie};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Where the turn state machine currently stands.
///
/// `MoveAccepted`, `WinDetected` and `TieDetected` are passed through inside
/// a single [`GameSession::apply_move`] call; between calls a session is
/// either awaiting a move or over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the player at this index to move.
    AwaitingMove(usize),
    /// The player at this index has just placed a symbol.
    MoveAccepted(usize),
    /// The player at this index completed a line.
    WinDetected(usize),
    /// The board filled up with no line.
    TieDetected,
    /// Terminal.
    GameOver,
}

/// Final result of a session, by player index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player at this index won.
    Winner(usize),
    /// Nobody won.
    Tie,
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play passes to the player at `next`.
    Continue {
        /// Index of the player to move next.
        next: usize,
    },
    /// The mover won.
    Won {
        /// Index of the winning player.
        winner: usize,
    },
    /// The board is full with no winner.
    Tie,
}

/// Why a move was not applied. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The cell is occupied or outside the board.
    #[display("That position is already taken! Please try again.")]
    CellUnavailable {
        /// The refused coordinate.
        coord: Coord,
    },
    /// The session has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// Seating that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Both players share a symbol.
    #[display("Players must use different symbols")]
    DuplicateSymbols,
    /// Player one must be a human.
    #[display("Player 1 must be human")]
    FirstPlayerNotHuman,
    /// The second seat does not match the mode.
    #[display("{mode} needs a {expected} second player")]
    SeatMismatch {
        /// The requested mode.
        mode: GameMode,
        /// What the second seat should have been.
        expected: &'static str,
    },
    /// The starting board already has symbols on it.
    #[display("A game must start on an empty board")]
    BoardNotEmpty,
}

/// State of a single game from seating to result.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: usize,
    move_count: usize,
    mode: GameMode,
    state: TurnState,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Seats two players on a fresh board.
    ///
    /// # Errors
    ///
    /// Rejects duplicate symbols, a computer in seat one, and a second seat
    /// that does not match `mode`.
    #[instrument(skip(first, second), fields(first_name = %first.name(), second_name = %second.name()))]
    pub fn new(mode: GameMode, first: Player, second: Player) -> Result<Self, SessionError> {
        Self::with_board(mode, first, second, Board::default())
    }

    /// Seats two players on the given board.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::new`], plus [`SessionError::BoardNotEmpty`]
    /// when `board` has any occupied cell.
    pub fn with_board(
        mode: GameMode,
        first: Player,
        second: Player,
        board: Board,
    ) -> Result<Self, SessionError> {
        if !board.is_empty() {
            return Err(SessionError::BoardNotEmpty);
        }
        if first.symbol() == second.symbol() {
            return Err(SessionError::DuplicateSymbols);
        }
        if first.is_computer() {
            return Err(SessionError::FirstPlayerNotHuman);
        }
        match (mode, second.is_computer()) {
            (GameMode::Pvp, true) => {
                return Err(SessionError::SeatMismatch {
                    mode,
                    expected: "human",
                });
            }
            (GameMode::Pvc, false) => {
                return Err(SessionError::SeatMismatch {
                    mode,
                    expected: "computer",
                });
            }
            _ => {}
        }

        info!(mode = mode.label(), "Game session created");
        Ok(Self {
            board,
            players: [first, second],
            active: 0,
            move_count: 0,
            mode,
            state: TurnState::AwaitingMove(0),
            outcome: None,
        })
    }

    /// Tries `coord` for the active player and advances the state machine.
    ///
    /// On rejection the board, active player and move count are unchanged.
    #[instrument(skip(self), fields(player = self.active, moves = self.move_count))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<TurnOutcome, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameOver);
        }

        let mover = self.active;
        let symbol = self.players[mover].symbol();
        if !self.board.place(coord.row, coord.col, symbol) {
            debug!(%coord, "Move rejected");
            return Err(MoveRejected::CellUnavailable { coord });
        }

        self.move_count += 1;
        self.transition(TurnState::MoveAccepted(mover));

        // A move can only complete lines through its own symbol, so the
        // opponent cannot have won on this turn and is not checked.
        if has_winner(&self.board, symbol) {
            self.transition(TurnState::WinDetected(mover));
            self.finish(Outcome::Winner(mover));
            return Ok(TurnOutcome::Won { winner: mover });
        }

        let [first, second] = &self.players;
        if is_tie(&self.board, first.symbol(), second.symbol()) {
            self.transition(TurnState::TieDetected);
            self.finish(Outcome::Tie);
            return Ok(TurnOutcome::Tie);
        }

        self.active = 1 - mover;
        self.transition(TurnState::AwaitingMove(self.active));
        Ok(TurnOutcome::Continue { next: self.active })
    }

    fn transition(&mut self, next: TurnState) {
        debug!(from = ?self.state, to = ?next, "Turn state transition");
        self.state = next;
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(?outcome, moves = self.move_count, "Game finished");
        self.outcome = Some(outcome);
        self.transition(TurnState::GameOver);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the seat index of the player to move.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns the number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current state machine state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the result once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once a win or tie has been recorded.
    pub fn is_over(&self) -> bool {
        self.state == TurnState::GameOver
    }
}
