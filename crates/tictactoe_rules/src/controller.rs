//! Turn sequencing between two move sources.

use crate::error::GameError;
use crate::moves::MoveSource;
use crate::player::Player;
use crate::presenter::Presenter;
use crate::session::{GameSession, MoveRejected, TurnOutcome};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// This player completed a line.
    Winner(Player),
    /// The board filled up with no line.
    Tie,
}

/// Drives a [`GameSession`] to its end.
///
/// Seat `i` of the session takes its moves from source `i`.
pub struct TurnController {
    sources: [Box<dyn MoveSource>; 2],
}

impl TurnController {
    /// Creates a controller for the two seats, in seat order.
    pub fn new(first: Box<dyn MoveSource>, second: Box<dyn MoveSource>) -> Self {
        Self {
            sources: [first, second],
        }
    }

    /// Plays `session` until somebody wins or the board fills up.
    ///
    /// A human choosing a taken cell is told so and asked again without the
    /// turn passing. A computer choosing a taken cell cannot happen, since it
    /// only samples empty cells; if it ever does, play stops with
    /// [`GameError::IllegalComputerMove`].
    #[instrument(skip_all, fields(mode = session.mode().label()))]
    pub fn play(
        &mut self,
        session: &mut GameSession,
        presenter: &mut dyn Presenter,
    ) -> Result<GameOutcome, GameError> {
        info!("Starting game");

        loop {
            presenter.show_board(session.board())?;

            let seat = session.active_index();
            let player = session.active_player().clone();
            if player.is_computer() {
                presenter.thinking(&player)?;
            }

            let outcome = loop {
                debug!(player = %player.name(), "Waiting for move");
                let coord = self.sources[seat].next_move(session.board(), &player)?;

                match session.apply_move(coord) {
                    Ok(outcome) => {
                        presenter.move_placed(&player, coord)?;
                        break outcome;
                    }
                    Err(MoveRejected::CellUnavailable { coord }) if !player.is_computer() => {
                        presenter.cell_taken(&player, coord)?;
                    }
                    Err(MoveRejected::CellUnavailable { coord }) => {
                        warn!(%coord, "Computer chose an unavailable cell");
                        return Err(GameError::IllegalComputerMove { coord });
                    }
                    Err(MoveRejected::GameOver) => return Err(GameError::SessionFinished),
                }
            };

            match outcome {
                TurnOutcome::Continue { next } => {
                    debug!(next, "Turn passes");
                }
                TurnOutcome::Won { winner } => {
                    presenter.show_board(session.board())?;
                    let winner = session.players()[winner].clone();
                    info!(winner = %winner.name(), "Game won");
                    return Ok(GameOutcome::Winner(winner));
                }
                TurnOutcome::Tie => {
                    presenter.show_board(session.board())?;
                    info!("Game tied");
                    return Ok(GameOutcome::Tie);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Coord};
    use crate::moves::RandomMover;
    use crate::player::{GameMode, PlayerName};
    use crate::random::SeededRandom;
    use crate::symbol::Symbol;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays a fixed list of coordinates.
    struct Scripted(VecDeque<Coord>);

    impl Scripted {
        fn boxed(moves: &[(usize, usize)]) -> Box<dyn MoveSource> {
            Box::new(Self(moves.iter().map(|&(r, c)| Coord::new(r, c)).collect()))
        }
    }

    impl MoveSource for Scripted {
        fn next_move(&mut self, _board: &Board, _player: &Player) -> Result<Coord, GameError> {
            self.0.pop_front().ok_or(GameError::InputClosed)
        }
    }

    /// Collects presenter calls as text.
    #[derive(Default)]
    struct Log(Vec<String>);

    impl Presenter for Log {
        fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
            self.0.push(format!("board:{}", 9 - board.empty_cells().len()));
            Ok(())
        }

        fn thinking(&mut self, player: &Player) -> Result<(), GameError> {
            self.0.push(format!("thinking:{}", player.name()));
            Ok(())
        }

        fn move_placed(&mut self, player: &Player, coord: Coord) -> Result<(), GameError> {
            self.0.push(format!("placed:{}:{}", player.name(), coord));
            Ok(())
        }

        fn cell_taken(&mut self, player: &Player, coord: Coord) -> Result<(), GameError> {
            self.0.push(format!("taken:{}:{}", player.name(), coord));
            Ok(())
        }
    }

    fn human(name: &str, c: char) -> Player {
        Player::human(PlayerName::parse(name).unwrap(), Symbol::new(c).unwrap())
    }

    #[test]
    fn test_top_row_win() {
        let mut session =
            GameSession::new(GameMode::Pvp, human("Ada", 'X'), human("Bob", 'O')).unwrap();
        let mut controller = TurnController::new(
            Scripted::boxed(&[(0, 0), (0, 1), (0, 2)]),
            Scripted::boxed(&[(1, 0), (1, 1)]),
        );
        let mut log = Log::default();

        let outcome = controller.play(&mut session, &mut log).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(human("Ada", 'X')));
        assert_eq!(session.move_count(), 5);
        assert_eq!(log.0.last().map(String::as_str), Some("board:5"));
    }

    #[test]
    fn test_taken_cell_reprompts_same_player() {
        let mut session =
            GameSession::new(GameMode::Pvp, human("Ada", 'X'), human("Bob", 'O')).unwrap();
        let mut controller = TurnController::new(
            Scripted::boxed(&[(1, 1), (0, 0), (2, 2)]),
            // Bob first tries Ada's centre cell.
            Scripted::boxed(&[(1, 1), (2, 0), (0, 2)]),
        );
        let mut log = Log::default();

        let outcome = controller.play(&mut session, &mut log).unwrap();
        assert_eq!(outcome, GameOutcome::Winner(human("Ada", 'X')));
        assert!(log.0.contains(&"taken:Bob:(2, 2)".to_string()));
        // The rejected attempt is not counted.
        assert_eq!(session.move_count(), 5);
        let taken = log.0.iter().position(|e| e.starts_with("taken")).unwrap();
        assert_eq!(log.0[taken + 1], "placed:Bob:(3, 1)");
    }

    #[test]
    fn test_computer_game_reaches_an_end() {
        for seed in 0..20 {
            let computer = Player::computer(Symbol::new('O').unwrap());
            let mut session =
                GameSession::new(GameMode::Pvc, human("Ada", 'X'), computer).unwrap();
            let mut controller = TurnController::new(
                Box::new(RandomMover::new(SeededRandom::new(seed), Duration::ZERO)),
                Box::new(RandomMover::new(SeededRandom::new(seed + 100), Duration::ZERO)),
            );
            let mut log = Log::default();

            controller.play(&mut session, &mut log).unwrap();
            assert!(session.is_over());
            assert!(log.0.iter().any(|e| e == "thinking:Computer"));
            assert!(!log.0.iter().any(|e| e.starts_with("taken")));
        }
    }

    #[test]
    fn test_computer_on_taken_cell_is_an_error() {
        let computer = Player::computer(Symbol::new('O').unwrap());
        let mut session = GameSession::new(GameMode::Pvc, human("Ada", 'X'), computer).unwrap();
        let mut controller = TurnController::new(
            Scripted::boxed(&[(0, 0), (1, 1)]),
            // A broken computer that replays Ada's cell.
            Scripted::boxed(&[(0, 0), (2, 2)]),
        );
        let mut log = Log::default();

        let result = controller.play(&mut session, &mut log);
        assert!(matches!(
            result,
            Err(GameError::IllegalComputerMove { coord }) if coord == Coord::new(0, 0)
        ));
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.active_index(), 1);
        assert!(!log.0.iter().any(|e| e.starts_with("taken")));
        assert!(!log.0.iter().any(|e| e.starts_with("placed:Computer")));
    }

    #[test]
    fn test_finished_session_cannot_be_replayed() {
        let mut session =
            GameSession::new(GameMode::Pvp, human("Ada", 'X'), human("Bob", 'O')).unwrap();
        let mut controller = TurnController::new(
            Scripted::boxed(&[(0, 0), (0, 1), (0, 2)]),
            Scripted::boxed(&[(1, 0), (1, 1)]),
        );
        controller.play(&mut session, &mut Log::default()).unwrap();

        let mut again =
            TurnController::new(Scripted::boxed(&[(2, 2)]), Scripted::boxed(&[(2, 1)]));
        let result = again.play(&mut session, &mut Log::default());
        assert!(matches!(result, Err(GameError::SessionFinished)));
        assert_eq!(session.move_count(), 5);
    }

    #[test]
    fn test_source_error_stops_play() {
        let mut session =
            GameSession::new(GameMode::Pvp, human("Ada", 'X'), human("Bob", 'O')).unwrap();
        let mut controller =
            TurnController::new(Scripted::boxed(&[(0, 0)]), Scripted::boxed(&[]));
        let mut log = Log::default();

        let result = controller.play(&mut session, &mut log);
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(session.move_count(), 1);
    }
}
