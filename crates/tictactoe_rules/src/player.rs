//! Players, their names and the game mode.

use crate::symbol::Symbol;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name given to the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Who the second seat belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[strum(to_string = "Player vs Player")]
    Pvp,
    /// One human against the random computer player.
    #[strum(to_string = "Player vs Computer")]
    Pvc,
}

impl GameMode {
    /// Parses the menu answer: `"1"` is PVP, `"2"` is PVC.
    #[instrument]
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Pvp),
            "2" => Some(Self::Pvc),
            _ => None,
        }
    }

    /// Returns the menu key for this mode.
    pub fn choice(self) -> &'static str {
        match self {
            Self::Pvp => "1",
            Self::Pvc => "2",
        }
    }

    /// Returns the short label (`PVP` or `PVC`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pvp => "PVP",
            Self::Pvc => "PVC",
        }
    }
}

/// Reasons a player name is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// The name is made of digits only.
    #[display("Please enter a valid name, not a number.")]
    Numeric,
    /// The name has fewer than two characters.
    #[display("Please enter a valid name, must be at least 2 characters.")]
    TooShort,
}

/// A validated, trimmed player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates `input`: trimmed, not purely numeric, at least two characters.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let name = input.trim();
        if !name.is_empty() && name.chars().all(char::is_numeric) {
            return Err(NameError::Numeric);
        }
        if name.chars().count() < 2 {
            return Err(NameError::TooShort);
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// A participant in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    symbol: Symbol,
    is_computer: bool,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: PlayerName, symbol: Symbol) -> Self {
        Self {
            name,
            symbol,
            is_computer: false,
        }
    }

    /// Creates the computer player, always named [`COMPUTER_NAME`].
    pub fn computer(symbol: Symbol) -> Self {
        Self {
            name: PlayerName(COMPUTER_NAME.to_string()),
            symbol,
            is_computer: true,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// True for the computer player.
    pub fn is_computer(&self) -> bool {
        self.is_computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mode_choice_round_trip() {
        for mode in GameMode::iter() {
            assert_eq!(GameMode::from_choice(mode.choice()), Some(mode));
        }
        assert_eq!(GameMode::from_choice(" 2 \n"), Some(GameMode::Pvc));
        assert_eq!(GameMode::from_choice("3"), None);
        assert_eq!(GameMode::from_choice("PVP"), None);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GameMode::Pvp.to_string(), "Player vs Player");
        assert_eq!(GameMode::Pvc.to_string(), "Player vs Computer");
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(PlayerName::parse("  Ada  ").unwrap().as_str(), "Ada");
        assert_eq!(PlayerName::parse("42"), Err(NameError::Numeric));
        assert_eq!(PlayerName::parse("7"), Err(NameError::Numeric));
        assert_eq!(PlayerName::parse("A"), Err(NameError::TooShort));
        assert_eq!(PlayerName::parse("   "), Err(NameError::TooShort));
        assert!(PlayerName::parse("R2").is_ok());
    }

    #[test]
    fn test_name_deserialize_validates() {
        #[derive(Debug, serde::Deserialize)]
        struct Seat {
            name: PlayerName,
        }

        let seat: Seat = toml::from_str("name = \" Grace \"").unwrap();
        assert_eq!(seat.name.as_str(), "Grace");
        assert!(toml::from_str::<Seat>("name = \"A\"").is_err());
        assert!(toml::from_str::<Seat>("name = \"123\"").is_err());
    }

    #[test]
    fn test_computer_player() {
        let p = Player::computer(Symbol::new('O').unwrap());
        assert!(p.is_computer());
        assert_eq!(p.name(), COMPUTER_NAME);
    }
}
