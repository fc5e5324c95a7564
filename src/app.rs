//! The replay loop: seat players, play a game, ask to go again.

use crate::console::{Console, ConsolePresenter, HumanMoveSource, SharedConsole};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Duration;
use tictactoe_rules::{
    COMPUTER_NAME, GameError, GameMode, GameOutcome, GameSession, MoveSource, Player,
    PlayerName, RandomMover, RandomSource, TurnController,
};
use tracing::{debug, info, instrument};

/// A console game program.
///
/// One random source is shared by the symbol fallback and the computer
/// player, so a seeded source replays a whole run.
pub struct App<R, W> {
    console: SharedConsole<R, W>,
    random: Rc<RefCell<dyn RandomSource>>,
    think_delay: Duration,
}

impl<R: BufRead + 'static, W: Write + 'static> App<R, W> {
    /// Creates the program around `console`.
    pub fn new(
        console: Console<R, W>,
        random: impl RandomSource + 'static,
        think_delay: Duration,
    ) -> Self {
        let random: Rc<RefCell<dyn RandomSource>> = Rc::new(RefCell::new(random));
        Self {
            console: console.into_shared(),
            random,
            think_delay,
        }
    }

    /// Returns the console, for inspecting what was written.
    pub fn console(&self) -> &SharedConsole<R, W> {
        &self.console
    }

    /// Plays games until the players decline another one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] when input ends mid-run, and any
    /// console failure.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), GameError> {
        {
            let mut console = self.console.borrow_mut();
            console.clear()?;
            console.say("Welcome to Tic-Tac-Toe!")?;
        }

        let mut games = 0usize;
        loop {
            let outcome = self.play_game()?;
            games += 1;
            info!(games, ?outcome, "Game complete");

            if !self.console.borrow_mut().ask_play_again()? {
                break;
            }
        }

        self.console.borrow_mut().farewell()?;
        info!(games, "Session ended");
        Ok(())
    }

    /// Seats players, plays one game to its end and announces the result.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameOutcome, GameError> {
        let mut session = self.seat_players()?;
        {
            let mut console = self.console.borrow_mut();
            console.welcome(&session)?;
            console.wait_for_enter()?;
        }

        let [first, second] = session.players();
        let mut controller = TurnController::new(self.source_for(first), self.source_for(second));
        let mut presenter = ConsolePresenter::new(Rc::clone(&self.console));

        let outcome = controller.play(&mut session, &mut presenter)?;
        self.console.borrow_mut().announce(&outcome)?;
        Ok(outcome)
    }

    fn seat_players(&mut self) -> Result<GameSession, GameError> {
        let mut console = self.console.borrow_mut();

        let mode = console.select_mode()?;
        let first = console.read_player_name("Player 1, please enter your name.")?;
        let second = match mode {
            GameMode::Pvp => Some(console.read_player_name("Player 2, please enter your name.")?),
            GameMode::Pvc => None,
        };

        let second_label = second.as_ref().map_or(COMPUTER_NAME, PlayerName::as_str);
        let (first_symbol, second_symbol) = console.choose_symbols(
            first.as_str(),
            second_label,
            &mut *self.random.borrow_mut(),
        )?;

        let second = match second {
            Some(name) => Player::human(name, second_symbol),
            None => Player::computer(second_symbol),
        };
        debug!(mode = mode.label(), "Players seated");
        Ok(GameSession::new(mode, Player::human(first, first_symbol), second)?)
    }

    fn source_for(&self, player: &Player) -> Box<dyn MoveSource> {
        if player.is_computer() {
            Box::new(RandomMover::new(Rc::clone(&self.random), self.think_delay))
        } else {
            Box::new(HumanMoveSource::new(Rc::clone(&self.console)))
        }
    }
}
