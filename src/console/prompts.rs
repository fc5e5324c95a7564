//! Retry-until-valid prompts for setting up a game.

use super::Console;
use std::io::{BufRead, Write};
use tictactoe_rules::{GameError, GameMode, PlayerName, RandomSource, Symbol, resolve_symbols};
use tracing::{debug, instrument};

const MODE_PROMPT: &str =
    "Please select the game mode:\n(1) PVP (Player vs Player)\n(2) PVC (Player vs Computer)";

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks for the game mode until the answer is `1` or `2`.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self) -> Result<GameMode, GameError> {
        loop {
            let answer = self.ask(MODE_PROMPT)?;
            match GameMode::from_choice(&answer) {
                Some(mode) => return Ok(mode),
                None => self.say("Please enter a valid choice, 1 or 2")?,
            }
        }
    }

    /// Asks for a player name until it passes validation.
    #[instrument(skip(self))]
    pub fn read_player_name(&mut self, prompt: &str) -> Result<PlayerName, GameError> {
        loop {
            let answer = self.ask(prompt)?;
            match PlayerName::parse(&answer) {
                Ok(name) => return Ok(name),
                Err(e) => {
                    debug!(error = %e, "Name rejected");
                    self.say(e)?;
                }
            }
        }
    }

    /// Asks both players for a symbol until the pair is valid.
    ///
    /// A blank answer draws from the palette via `rng`. Any problem with
    /// either answer re-asks both.
    #[instrument(skip(self, rng))]
    pub fn choose_symbols(
        &mut self,
        first: &str,
        second: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<(Symbol, Symbol), GameError> {
        loop {
            let first_answer = self.ask(&symbol_prompt(first))?;
            let second_answer = self.ask(&symbol_prompt(second))?;

            match resolve_symbols(&first_answer, &second_answer, rng) {
                Ok((a, b)) => {
                    self.say(format!("Symbols chosen: {first} = {a}, {second} = {b}"))?;
                    return Ok((a, b));
                }
                Err(e) => {
                    debug!(error = %e, "Symbols rejected");
                    self.say(e)?;
                }
            }
        }
    }

    /// Asks whether to play another game.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, GameError> {
        loop {
            let answer = self.ask("\nWould you like to play again? (y/n): ")?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' for yes or 'n' for no.")?,
            }
        }
    }

    /// Waits for the Enter key (any line).
    pub fn wait_for_enter(&mut self) -> Result<(), GameError> {
        self.ask("\nPress Enter to start the game...")?;
        Ok(())
    }
}

fn symbol_prompt(name: &str) -> String {
    format!("{name}, Please enter Your Symbol:\ni.e:(X,$,❤)\nPress Enter for random selection.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_rules::{PALETTE, ScriptedRandom};

    type TestConsole = Console<Cursor<String>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.to_string()), Vec::new(), false)
    }

    fn output(console: &TestConsole) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    #[test]
    fn test_select_mode_retries() {
        let mut c = console("3\nPVP\n 2 \n");
        assert_eq!(c.select_mode().unwrap(), GameMode::Pvc);
        assert_eq!(output(&c).matches("Please enter a valid choice, 1 or 2").count(), 2);
    }

    #[test]
    fn test_player_name_retries() {
        let mut c = console("123\nA\n  Grace  \n");
        let name = c.read_player_name("Player 1, please enter your name.").unwrap();
        assert_eq!(name.as_str(), "Grace");
        let out = output(&c);
        assert!(out.contains("not a number"));
        assert!(out.contains("at least 2 characters"));
    }

    #[test]
    fn test_symbols_reask_both_on_duplicate() {
        let mut c = console("X\nX\nX\n$\n");
        let mut rng = ScriptedRandom::default();
        let (a, b) = c.choose_symbols("Ada", "Bob", &mut rng).unwrap();
        assert_eq!((a.as_char(), b.as_char()), ('X', '$'));
        let out = output(&c);
        assert!(out.contains("The symbols must be different."));
        assert_eq!(out.matches("Ada, Please enter Your Symbol").count(), 2);
        assert!(out.contains("Symbols chosen: Ada = X, Bob = $"));
    }

    #[test]
    fn test_symbols_reject_sentinel_and_long() {
        let mut c = console("0\nO\nXX\nO\n@\nO\n");
        let mut rng = ScriptedRandom::default();
        let (a, _) = c.choose_symbols("Ada", "Bob", &mut rng).unwrap();
        assert_eq!(a.as_char(), '@');
        let out = output(&c);
        assert!(out.contains("Please enter a valid symbol."));
        assert!(out.contains("Symbols must be single character."));
    }

    #[test]
    fn test_symbols_blank_uses_random() {
        let mut c = console("\nX\n");
        let mut rng = ScriptedRandom::new(vec![3]);
        let (a, b) = c.choose_symbols("Ada", "Computer", &mut rng).unwrap();
        assert_eq!(a.as_char(), PALETTE[3]);
        assert_eq!(b.as_char(), 'X');
    }

    #[test]
    fn test_play_again_answers() {
        let mut c = console("maybe\n YES \n");
        assert!(c.ask_play_again().unwrap());
        assert!(output(&c).contains("Please enter 'y' for yes or 'n' for no."));

        let mut c = console("N\n");
        assert!(!c.ask_play_again().unwrap());
    }

    #[test]
    fn test_prompts_stop_at_end_of_input() {
        let mut c = console("9\n");
        assert!(matches!(c.select_mode(), Err(GameError::InputClosed)));
    }
}
