//! The game state machine.
//!
//! A [`Game`] owns its board and moves from `InProgress` to exactly one of
//! `Won` or `Draw`, never back. The status is always derived from the
//! stored outcome rather than kept as a separate field.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::phases::{GameStatus, Outcome};
use super::{Board, GameError, Player, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Opaque identifier of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Returns the numeric value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A single match: board, turn, terminal outcome and timestamps.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Game {
    /// Creates a new game: empty board, X to move, not finished.
    #[instrument]
    pub fn new(id: GameId) -> Self {
        let now = Utc::now();
        info!(game_id = %id, "Creating new game");
        Self {
            id,
            board: Board::new(),
            current_player: Player::FIRST,
            outcome: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassembles a game from stored parts.
    ///
    /// Callers are responsible for the parts describing a reachable state;
    /// see `GameRecord` for the checked conversion from storage.
    pub fn restore(
        id: GameId,
        board: Board,
        current_player: Player,
        outcome: Option<Outcome>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            board,
            current_player,
            outcome,
            created_at,
            updated_at,
        }
    }

    /// Replays moves on a fresh game, stopping at the first rejected move.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(id: GameId, moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new(id);
        for action in moves {
            game.play(*action)?;
        }
        Ok(game)
    }

    /// Applies `player`'s mark at `position`.
    ///
    /// Fails with [`GameError::GameAlreadyFinished`], [`GameError::NotPlayersTurn`]
    /// or [`GameError::PositionOccupied`], checked in that order. On failure the
    /// game is left exactly as it was.
    pub fn make_move(&mut self, player: Player, position: Position) -> Result<(), GameError> {
        self.play(Move::new(player, position))
    }

    /// Like [`Game::make_move`], addressing the cell by row and column.
    pub fn make_move_at(&mut self, player: Player, row: usize, col: usize) -> Result<(), GameError> {
        let position = Position::new(row, col)?;
        self.make_move(player, position)
    }

    /// Applies a move action.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn play(&mut self, action: Move) -> Result<(), GameError> {
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.apply(action)?;

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        debug!(
            player = %action.player,
            position = action.position.to_index(),
            status = %self.status(),
            "Move applied"
        );
        Ok(())
    }

    /// Applies a validated move and settles the outcome.
    fn apply(&mut self, action: Move) -> Result<(), GameError> {
        self.board.make_move(action.position, action.player)?;
        self.updated_at = Utc::now();

        if let Some(winner) = self.board.winner() {
            info!(game_id = %self.id, winner = %winner, "Game won");
            self.outcome = Some(Outcome::Winner(winner));
        } else if self.board.is_full() {
            info!(game_id = %self.id, "Game drawn");
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_player = self.current_player.opponent();
        }
        Ok(())
    }

    /// Returns the game id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (unchanged once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|outcome| outcome.winner())
    }

    /// Returns true if the game finished without a winner.
    pub fn is_draw(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_draw())
    }

    /// Returns the derived status.
    pub fn status(&self) -> GameStatus {
        self.outcome.into()
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time of the last applied move.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_finished() {
            return Vec::new();
        }
        self.board.empty_positions().collect()
    }
}

/// Games compare by id, board, turn and outcome; timestamps are ignored.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.board == other.board
            && self.current_player == other.current_player
            && self.outcome == other.outcome
    }
}

impl Eq for Game {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new(GameId::from(1));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
        assert!(!game.is_draw());
        assert_eq!(game.created_at(), game.updated_at());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new(GameId::from(1));
        game.make_move(Player::X, Position::CENTER).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.make_move(Player::O, pos(0, 0)).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_failed_move_leaves_game_unchanged() {
        let mut game = Game::new(GameId::from(1));
        game.make_move(Player::X, Position::CENTER).unwrap();
        let before = game.clone();
        let updated_at = game.updated_at();

        assert_eq!(
            game.make_move(Player::O, Position::CENTER),
            Err(GameError::PositionOccupied { position: Position::CENTER })
        );
        assert_eq!(
            game.make_move(Player::X, pos(0, 0)),
            Err(GameError::NotPlayersTurn { player: Player::X })
        );
        assert_eq!(game, before);
        assert_eq!(game.updated_at(), updated_at);
    }

    #[test]
    fn test_finished_check_precedes_turn_check() {
        let mut game = Game::new(GameId::from(1));
        for (player, row, col) in [
            (Player::X, 0, 0),
            (Player::O, 1, 0),
            (Player::X, 0, 1),
            (Player::O, 1, 1),
            (Player::X, 0, 2),
        ] {
            game.make_move_at(player, row, col).unwrap();
        }
        // Wrong player and occupied square, but finished wins.
        assert_eq!(
            game.make_move(Player::O, pos(0, 0)),
            Err(GameError::GameAlreadyFinished)
        );
    }

    #[test]
    fn test_turn_check_precedes_occupied_check() {
        let mut game = Game::new(GameId::from(1));
        game.make_move(Player::X, Position::CENTER).unwrap();
        assert_eq!(
            game.make_move(Player::X, Position::CENTER),
            Err(GameError::NotPlayersTurn { player: Player::X })
        );
    }

    #[test]
    fn test_make_move_at_rejects_bad_coordinates() {
        let mut game = Game::new(GameId::from(1));
        assert_eq!(
            game.make_move_at(Player::X, 3, 1),
            Err(GameError::InvalidPosition { row: 3, col: 1 })
        );
        assert_eq!(game, Game::new(GameId::from(1)));
    }

    #[test]
    fn test_equality_ignores_timestamps() {
        let a = Game::new(GameId::from(7));
        let b = Game::restore(
            GameId::from(7),
            Board::new(),
            Player::X,
            None,
            DateTime::<Utc>::UNIX_EPOCH,
            DateTime::<Utc>::UNIX_EPOCH,
        );
        assert_eq!(a, b);
        assert_ne!(a, Game::new(GameId::from(8)));
    }

    #[test]
    fn test_valid_moves_empty_once_finished() {
        let moves = [
            Move::new(Player::X, pos(0, 0)),
            Move::new(Player::O, pos(1, 0)),
            Move::new(Player::X, pos(0, 1)),
            Move::new(Player::O, pos(1, 1)),
            Move::new(Player::X, pos(0, 2)),
        ];
        let game = Game::replay(GameId::from(1), &moves).unwrap();
        assert!(game.is_finished());
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.board().empty_positions().count(), 4);
    }
}
