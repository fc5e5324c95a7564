//! Welcome, result and farewell banners.

use super::Console;
use std::io::{BufRead, Write};
use tictactoe_rules::{GameError, GameOutcome, GameSession};

const RULE_WIDTH: usize = 50;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Shows the mode, the seated players and the rules.
    pub fn welcome(&mut self, session: &GameSession) -> Result<(), GameError> {
        let [first, second] = session.players();
        let size = session.board().size();
        let rule = "=".repeat(RULE_WIDTH);

        self.clear()?;
        self.say(format!("\n{rule}"))?;
        self.say("🎮 Welcome to Tic-Tac-Toe! 🎮")?;
        self.say(&rule)?;
        self.say(format!("Mode: {}", session.mode()))?;
        self.say(format!(
            "Players: {} ({}) vs {} ({})",
            first.name(),
            first.symbol(),
            second.name(),
            second.symbol()
        ))?;
        self.say("\nRules:")?;
        self.say(format!(
            "• Get {size} in a row (horizontal, vertical, or diagonal) to win!"
        ))?;
        self.say(format!("• Enter row and column numbers (1-{size}) for your move"))?;
        self.say("• Example: '2 3' means row 2, column 3")?;
        self.say(&rule)
    }

    /// Announces the winner or the tie.
    pub fn announce(&mut self, outcome: &GameOutcome) -> Result<(), GameError> {
        let rule = "=".repeat(RULE_WIDTH);
        self.say(format!("\n{rule}"))?;
        match outcome {
            GameOutcome::Winner(player) => {
                self.say(format!("🎉 Congratulations! {} wins! 🎉", player.name()))?
            }
            GameOutcome::Tie => self.say("🤝 It's a tie! Great game! 🤝")?,
        }
        self.say(&rule)
    }

    /// Says goodbye after the last game.
    pub fn farewell(&mut self) -> Result<(), GameError> {
        self.clear()?;
        self.say("Thanks for playing! Goodbye! 👋")
    }
}
