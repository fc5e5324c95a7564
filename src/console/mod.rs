//! Line-oriented console used by every prompt and the presenter.

mod banners;
mod human;
mod presenter;
mod prompts;
mod render;

pub use human::HumanMoveSource;
pub use presenter::ConsolePresenter;
pub use render::render_board;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictactoe_rules::GameError;
use tracing::{debug, instrument, warn};

const UNREADABLE_INPUT: &str = "Sorry, that input could not be read. Please try again.";

/// Console shared by the human move source and the presenter.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// Reads answers line by line and writes messages.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `reader` and `writer`.
    ///
    /// With `clear_screen` off, [`Console::clear`] does nothing, which keeps
    /// transcripts readable.
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    /// Wraps the console for sharing between collaborators.
    pub fn into_shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: impl Display) -> Result<(), GameError> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Shows `prompt` and returns the next input line without its line ending.
    ///
    /// A line that is not valid UTF-8 is refused with a message and the
    /// prompt is shown again.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] at end of input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        loop {
            self.say(prompt)?;

            let mut bytes = Vec::new();
            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                debug!("End of input");
                return Err(GameError::InputClosed);
            }

            match String::from_utf8(bytes) {
                Ok(line) => {
                    let answer = line.trim_end_matches(['\r', '\n']).to_string();
                    debug!(answer = %answer, "Read answer");
                    return Ok(answer);
                }
                Err(e) => {
                    warn!(error = %e, "Unreadable answer");
                    self.say(UNREADABLE_INPUT)?;
                }
            }
        }
    }

    /// Clears the terminal and homes the cursor, when enabled.
    pub fn clear(&mut self) -> Result<(), GameError> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new(), false)
    }

    fn output(console: &Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut c = console("hello\r\nworld\n");
        assert_eq!(c.ask("first?").unwrap(), "hello");
        assert_eq!(c.ask("second?").unwrap(), "world");
        assert_eq!(output(&c), "first?\nsecond?\n");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut c = console("");
        assert!(matches!(c.ask("anyone?"), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = console("2 3");
        assert_eq!(c.ask("move?").unwrap(), "2 3");
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let input = b"\xff\xfe\n2 3\n".to_vec();
        let mut c = Console::new(Cursor::new(input), Vec::new(), false);
        assert_eq!(c.ask("move?").unwrap(), "2 3");

        let out = String::from_utf8(c.writer().clone()).unwrap();
        assert_eq!(out.matches("move?").count(), 2);
        assert!(out.contains(UNREADABLE_INPUT));
    }

    #[test]
    fn test_invalid_utf8_then_end_of_input() {
        let mut c = Console::new(Cursor::new(b"\xc3".to_vec()), Vec::new(), false);
        assert!(matches!(c.ask("move?"), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut c = console("");
        c.clear().unwrap();
        assert!(c.writer().is_empty());
    }

    #[test]
    fn test_clear_enabled_writes_escape_codes() {
        let mut c = Console::new(Cursor::new(String::new()), Vec::new(), true);
        c.clear().unwrap();
        assert!(c.writer().starts_with(b"\x1b["));
    }
}
