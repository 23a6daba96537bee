//! The two players of a tic-tac-toe game.

use super::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The player who moves first.
    pub const FIRST: Player = Player::X;

    /// The player who moves second.
    pub const SECOND: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Display symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Stable numeric id (1 for X, 2 for O) used by storage and callers.
    pub fn id(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Looks a player up by numeric id.
    pub fn from_id(id: u8) -> Result<Self, GameError> {
        Player::iter()
            .find(|player| player.id() == id)
            .ok_or(GameError::InvalidPlayer { id })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "1" | "first" => Ok(Player::X),
            "o" | "2" | "second" => Ok(Player::O),
            other => Err(format!("Unknown player '{}' (expected X or O)", other)),
        }
    }
}
