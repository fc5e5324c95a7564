//! Player symbols and the random fallback palette.

use crate::random::{RandomSource, choose};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use unicode_width::UnicodeWidthChar;

/// Character that stands for "no symbol" and can never be picked by a player.
pub const EMPTY_SENTINEL: char = '0';

/// Symbols handed out when a player leaves the symbol prompt blank.
pub const PALETTE: [char; 36] = [
    'X', 'O', '@', '#', '$', '%', '&', '*', '+', '=', '!', '?', //
    '❤', '★', '☀', '☁', '☂', '☕', '☘', '♠', '♣', '♥', '♦', '♟', //
    '⚡', '🔥', '💎', '🌙', '🌸', '🍀', '🍎', '🍕', '🎵', '🎯', '🚀', '🪐',
];

/// A single printable character marking a player's cells.
///
/// Deserializing goes through [`Symbol::new`], so stored symbols obey the
/// same rules as typed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "char", into = "char")]
#[display("{_0}")]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol, rejecting the empty sentinel and characters that
    /// would render as blank.
    pub fn new(c: char) -> Result<Self, SymbolError> {
        if c == EMPTY_SENTINEL {
            return Err(SymbolError::Reserved);
        }
        // Zero-width characters draw nothing and would look like an empty cell.
        if c.is_whitespace() || c.is_control() || c.width() == Some(0) {
            return Err(SymbolError::NotPrintable);
        }
        Ok(Self(c))
    }

    /// Parses a symbol from trimmed player input.
    ///
    /// Blank input is an error here; the random fallback is applied by
    /// [`resolve_symbols`].
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, SymbolError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SymbolError::Blank),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(SymbolError::TooLong),
        }
    }

    /// Picks a random symbol from [`PALETTE`].
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        // The palette holds no sentinel or whitespace, so it never fails validation.
        let c = choose(rng, &PALETTE).copied().unwrap_or('X');
        Self(c)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Reasons a symbol choice is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SymbolError {
    /// Nothing was entered.
    #[display("Please enter a symbol.")]
    Blank,
    /// More than one character was entered.
    #[display("Symbols must be single character.")]
    TooLong,
    /// The reserved empty-cell character was entered.
    #[display("Please enter a valid symbol.")]
    Reserved,
    /// Whitespace, a control character or a zero-width character was entered.
    #[display("Please enter a visible symbol.")]
    NotPrintable,
    /// Both players ended up with the same symbol.
    #[display("The symbols must be different.")]
    Duplicate,
}

/// Resolves both players' symbol answers into a distinct pair.
///
/// Blank answers are replaced by a random palette symbol first; the pair is
/// then checked for duplicates before either symbol is validated, so two
/// random picks that collide are reported as [`SymbolError::Duplicate`].
#[instrument(skip(rng))]
pub fn resolve_symbols(
    first: &str,
    second: &str,
    rng: &mut dyn RandomSource,
) -> Result<(Symbol, Symbol), SymbolError> {
    let first = fill_blank(first, rng);
    let second = fill_blank(second, rng);

    if first == second {
        return Err(SymbolError::Duplicate);
    }

    let pair = (Symbol::parse(&first)?, Symbol::parse(&second)?);
    debug!(first = %pair.0, second = %pair.1, "Symbols resolved");
    Ok(pair)
}

fn fill_blank(answer: &str, rng: &mut dyn RandomSource) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        Symbol::random(rng).as_char().to_string()
    } else {
        answer.to_string()
    }
}
