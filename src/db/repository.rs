//! Game storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

use crate::db::{GameRecord, RepositoryError};
use crate::{Game, GameId};

/// Storage for games, keyed by id.
///
/// The game core takes no locks. Read-modify-write of one game goes
/// through [`GameRepository::update`], which implementations make atomic.
pub trait GameRepository: Send + Sync {
    /// Allocates a fresh id.
    fn next_id(&self) -> Result<GameId, RepositoryError>;

    /// Inserts or replaces a game.
    fn save(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Loads a game, `None` if the id is unknown.
    fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError>;

    /// Deletes a game. Returns whether it existed.
    fn remove(&self, id: GameId) -> Result<bool, RepositoryError>;

    /// Loads a game, applies `change` and saves the result as one atomic step.
    ///
    /// Returns `Ok(None)` if the id is unknown. When `change` fails the
    /// stored game is left untouched and its error is returned.
    fn update<E, F>(&self, id: GameId, change: F) -> Result<Option<Game>, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&mut Game) -> Result<(), E>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: u64,
    records: HashMap<GameId, GameRecord>,
}

/// Process-local repository storing [`GameRecord`]s.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory game repository");
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.records.len())
    }

    /// Returns true if no games are stored.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, RepositoryError> {
        self.store
            .lock()
            .map_err(|e| RepositoryError::new(format!("Repository lock poisoned: {}", e)))
    }
}

impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self))]
    fn next_id(&self) -> Result<GameId, RepositoryError> {
        let mut store = self.lock()?;
        store.last_id += 1;
        Ok(GameId::from(store.last_id))
    }

    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        let record = GameRecord::from(game);
        self.lock()?.records.insert(game.id(), record);
        debug!("Game saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        let record = self.lock()?.records.get(&id).cloned();
        match record {
            Some(record) => Ok(Some(Game::try_from(record)?)),
            None => {
                debug!("Game not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    fn remove(&self, id: GameId) -> Result<bool, RepositoryError> {
        let removed = self.lock()?.records.remove(&id).is_some();
        debug!(removed, "Game removed");
        Ok(removed)
    }

    #[instrument(skip(self, change))]
    fn update<E, F>(&self, id: GameId, change: F) -> Result<Option<Game>, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&mut Game) -> Result<(), E>,
    {
        let mut store = self.lock()?;
        let Some(record) = store.records.get(&id).cloned() else {
            debug!("Game not found");
            return Ok(None);
        };

        let mut game = Game::try_from(record).map_err(RepositoryError::from)?;
        change(&mut game)?;
        store.records.insert(id, GameRecord::from(&game));
        debug!("Game updated");
        Ok(Some(game))
    }
}
