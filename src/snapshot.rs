//! Read-only view of a game for callers and presentation layers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Game, GameStrategy, Player, Position};

/// Serialisable state of a game, optionally annotated with search results.
///
/// Players appear as numeric ids (1 for X, 2 for O); positions as indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Game id.
    pub game_id: u64,
    /// Board as three rows of three cells.
    pub board: Vec<Vec<Option<u8>>>,
    /// Board as nine cells in row-major order.
    pub board_1d: Vec<Option<u8>>,
    /// Player to move.
    pub current_player: u8,
    /// Whether the game is over.
    pub is_finished: bool,
    /// Winner, if any.
    pub winner: Option<u8>,
    /// Whether the game ended in a draw.
    pub is_draw: bool,
    /// `in_progress`, `won` or `draw`.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Cells where the player to move would win immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_winning_moves: Option<Vec<usize>>,
    /// Suggested move for the player to move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_move: Option<usize>,
}

impl GameSnapshot {
    /// Captures the plain game state.
    pub fn from_game(game: &Game) -> Self {
        let board = game
            .board()
            .to_grid()
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(Player::id)).collect())
            .collect();

        Self {
            game_id: game.id().value(),
            board,
            board_1d: game.board().player_ids(),
            current_player: game.current_player().id(),
            is_finished: game.is_finished(),
            winner: game.winner().map(Player::id),
            is_draw: game.is_draw(),
            status: game.status().as_str().to_string(),
            created_at: game.created_at(),
            updated_at: game.updated_at(),
            opponent_winning_moves: None,
            suggested_move: None,
        }
    }

    /// Captures the game state plus the strategy's view for the player to move.
    pub fn annotated(game: &Game, strategy: &dyn GameStrategy) -> Self {
        let player = game.current_player();
        let winning = strategy.find_opponent_winning_moves(game.board(), player);
        let suggested = strategy.find_best_move(game.board(), player);

        Self {
            opponent_winning_moves: Some(winning.into_iter().map(Position::to_index).collect()),
            suggested_move: suggested.map(Position::to_index),
            ..Self::from_game(game)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameId, MinimaxStrategy};

    #[test]
    fn test_snapshot_of_new_game() {
        let game = Game::new(GameId::from(5));
        let snapshot = GameSnapshot::from_game(&game);
        assert_eq!(snapshot.game_id, 5);
        assert_eq!(snapshot.board, vec![vec![None; 3]; 3]);
        assert_eq!(snapshot.board_1d, vec![None; 9]);
        assert_eq!(snapshot.current_player, 1);
        assert_eq!(snapshot.status, "in_progress");
        assert!(!snapshot.is_finished);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("suggested_move").is_none());
        assert_eq!(json["status"], "in_progress");
    }

    #[test]
    fn test_annotated_snapshot() {
        let mut game = Game::new(GameId::from(1));
        game.make_move(Player::X, Position::from_index(0).unwrap()).unwrap();
        let snapshot = GameSnapshot::annotated(&game, &MinimaxStrategy);
        assert_eq!(snapshot.current_player, 2);
        assert_eq!(snapshot.opponent_winning_moves, Some(vec![]));
        assert_eq!(snapshot.suggested_move, Some(4));
        assert_eq!(snapshot.board[0][0], Some(1));
    }
}
