//! Use cases: start a game, make a move, read a game's state.

use tracing::{info, instrument, warn};

use crate::db::{GameRepository, RepositoryError};
use crate::snapshot::GameSnapshot;
use crate::{Game, GameError, GameId, GameStrategy, MinimaxStrategy, Player, Position};

/// Error returned by [`GameService`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ServiceError {
    /// No game is stored under the id.
    #[display("Game {id} not found")]
    GameNotFound {
        /// The unknown id.
        id: GameId,
    },

    /// The move or input broke a game rule.
    #[display("{source}")]
    Game {
        /// Underlying rule violation.
        source: GameError,
    },

    /// Storage failed.
    #[display("{source}")]
    Repository {
        /// Underlying storage failure.
        source: RepositoryError,
    },
}

impl From<GameError> for ServiceError {
    fn from(source: GameError) -> Self {
        Self::Game { source }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(source: RepositoryError) -> Self {
        Self::Repository { source }
    }
}

/// Orchestrates games stored in a [`GameRepository`].
///
/// Each call loads the game, applies at most one change, and saves it only
/// when the change succeeded.
pub struct GameService<R: GameRepository> {
    repository: R,
    strategy: Box<dyn GameStrategy>,
}

impl<R: GameRepository> GameService<R> {
    /// Creates a service using minimax for move annotations.
    pub fn new(repository: R) -> Self {
        Self::with_strategy(repository, Box::new(MinimaxStrategy))
    }

    /// Creates a service with a specific strategy.
    pub fn with_strategy(repository: R, strategy: Box<dyn GameStrategy>) -> Self {
        Self {
            repository,
            strategy,
        }
    }

    /// The repository backing this service.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The strategy used for annotations.
    pub fn strategy(&self) -> &dyn GameStrategy {
        self.strategy.as_ref()
    }

    /// Starts and stores a new game.
    #[instrument(skip(self))]
    pub fn start_game(&self) -> Result<GameSnapshot, ServiceError> {
        let game = Game::new(self.repository.next_id()?);
        self.repository.save(&game)?;
        info!(game_id = %game.id(), "Game started");
        Ok(GameSnapshot::from_game(&game))
    }

    /// Plays `player_id` at cell `index` and returns the annotated new state.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        id: GameId,
        player_id: u8,
        index: usize,
    ) -> Result<GameSnapshot, ServiceError> {
        self.apply(id, player_id, || Position::from_index(index))
    }

    /// Plays `player_id` at (`row`, `col`) and returns the annotated new state.
    #[instrument(skip(self))]
    pub fn make_move_at(
        &self,
        id: GameId,
        player_id: u8,
        row: usize,
        col: usize,
    ) -> Result<GameSnapshot, ServiceError> {
        self.apply(id, player_id, || Position::new(row, col))
    }

    /// Returns the stored state of a game.
    #[instrument(skip(self))]
    pub fn game_status(&self, id: GameId) -> Result<GameSnapshot, ServiceError> {
        Ok(GameSnapshot::from_game(&self.load(id)?))
    }

    /// Returns the strategy's suggestion for the player to move.
    #[instrument(skip(self))]
    pub fn suggest_move(&self, id: GameId) -> Result<Option<Position>, ServiceError> {
        let game = self.load(id)?;
        Ok(self
            .strategy
            .find_best_move(game.board(), game.current_player()))
    }

    fn load(&self, id: GameId) -> Result<Game, ServiceError> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| Self::not_found(id))
    }

    fn not_found(id: GameId) -> ServiceError {
        warn!(game_id = %id, "Game not found");
        ServiceError::GameNotFound { id }
    }

    /// Validates and plays the move inside one repository update, so
    /// concurrent moves on the same game see each other's result.
    fn apply(
        &self,
        id: GameId,
        player_id: u8,
        position: impl FnOnce() -> Result<Position, GameError>,
    ) -> Result<GameSnapshot, ServiceError> {
        let game = self
            .repository
            .update(id, |game: &mut Game| -> Result<(), ServiceError> {
                let player = Player::from_id(player_id)?;
                game.make_move(player, position()?)?;
                Ok(())
            })?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(GameSnapshot::annotated(&game, self.strategy.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirstAvailableStrategy, InMemoryGameRepository};
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_concurrent_moves_on_one_game_are_serialised() {
        let service = GameService::with_strategy(
            InMemoryGameRepository::new(),
            Box::new(FirstAvailableStrategy),
        );

        for _ in 0..500 {
            let id = GameId::from(service.start_game().unwrap().game_id);
            let barrier = Barrier::new(2);

            let (left, right) = thread::scope(|s| {
                let left = s.spawn(|| {
                    barrier.wait();
                    service.make_move(id, 1, 0)
                });
                let right = s.spawn(|| {
                    barrier.wait();
                    service.make_move(id, 1, 8)
                });
                (left.join().unwrap(), right.join().unwrap())
            });

            let accepted = [&left, &right].iter().filter(|r| r.is_ok()).count();
            assert_eq!(accepted, 1);
            let rejected = if left.is_ok() { right } else { left };
            assert!(matches!(
                rejected,
                Err(ServiceError::Game {
                    source: GameError::NotPlayersTurn { .. }
                })
            ));

            let stored = service.repository().find_by_id(id).unwrap().unwrap();
            assert_eq!(stored.board().count(Player::X), 1);
            assert_eq!(stored.current_player(), Player::O);
        }
    }

    #[test]
    fn test_unknown_game_checked_before_arguments() {
        let service = GameService::new(InMemoryGameRepository::new());
        assert!(matches!(
            service.make_move(GameId::from(9), 7, 42),
            Err(ServiceError::GameNotFound { .. })
        ));
    }
}
