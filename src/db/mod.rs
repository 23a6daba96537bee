//! Persistence mapping for games.

mod error;
mod models;
mod repository;

pub use error::RepositoryError;
pub use models::GameRecord;
pub use repository::{GameRepository, InMemoryGameRepository};
