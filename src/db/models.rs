//! Flat storage row for a game.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Game, GameError, GameId, Outcome, Player};

/// A game as stored: nine nullable player ids plus scalar fields.
///
/// Converts losslessly to and from [`Game`]. Player ids are 1 (X) and 2 (O).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    id: GameId,
    cells: Vec<Option<u8>>,
    current_player: u8,
    is_finished: bool,
    winner: Option<u8>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            cells: game.board().player_ids(),
            current_player: game.current_player().id(),
            is_finished: game.is_finished(),
            winner: game.winner().map(Player::id),
            created_at: game.created_at(),
            updated_at: game.updated_at(),
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    #[instrument(skip(record), fields(game_id = %record.id))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let board = Board::from_player_ids(&record.cells)?;
        let current_player = Player::from_id(record.current_player)?;
        let winner = record.winner.map(Player::from_id).transpose()?;

        let inconsistent = |reason| Err(GameError::InconsistentRecord { reason });
        let outcome = match (record.is_finished, winner) {
            (false, Some(_)) => return inconsistent("winner set on an unfinished game"),
            (false, None) if board.has_winner() || board.is_full() => {
                return inconsistent("unfinished game on a terminal board");
            }
            (false, None) => None,
            (true, Some(player)) if board.winner() != Some(player) => {
                return inconsistent("recorded winner does not hold a line");
            }
            (true, Some(player)) => Some(Outcome::Winner(player)),
            (true, None) if board.has_winner() || !board.is_full() => {
                return inconsistent("draw recorded on a board that is not drawn");
            }
            (true, None) => Some(Outcome::Draw),
        };

        Ok(Game::restore(
            record.id,
            board,
            current_player,
            outcome,
            record.created_at,
            record.updated_at,
        ))
    }
}
