//! The move action.
//!
//! A [`Move`] is only an intent; [`Game::play`](super::Game::play) checks
//! it against the current state before anything changes.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One player's mark at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
