//! Tic-tac-toe engine - game state machine and exhaustive move search
//!
//! This library provides a validated 3x3 board, a game state machine with
//! strict turn order and one-way terminal transitions, and a minimax search
//! that computes forced outcomes and best responses.
//!
//! # Architecture
//!
//! - **Games**: board, rules, game state machine and strategies
//! - **Db**: flat storage records and a repository trait
//! - **Service**: start/move/status use cases returning snapshots
//! - **Config**: TOML configuration for the command-line front end
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, GameStrategy, MinimaxStrategy, Player, Position};
//!
//! let board: Board = "O........".parse().unwrap();
//! let best = MinimaxStrategy.find_best_move(&board, Player::X);
//! assert_eq!(best, Some(Position::CENTER));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod games;
mod service;
mod snapshot;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Contract, FirstAvailableStrategy, Game, GameError, GameId,
    GameNotFinished, GameStatus, GameStrategy, Invariant, InvariantSet, InvariantViolation,
    LegalMove, MinimaxStrategy, MonotonicBoardInvariant, Move, MoveContract, MoveInvariants,
    Outcome, OutcomeConsistentInvariant, Player, PlayersTurn, Position, SquareIsEmpty, Transition,
};

// Crate-level exports - Rules and search
pub use games::tictactoe::rules::{WINNING_LINES, check_winner, is_draw, is_full};
pub use games::tictactoe::strategy::{DRAW_SCORE, LOSE_SCORE, WIN_SCORE, minimax};

// Crate-level exports - Persistence
pub use db::{GameRecord, GameRepository, InMemoryGameRepository, RepositoryError};

// Crate-level exports - Use cases
pub use service::{GameService, ServiceError};
pub use snapshot::GameSnapshot;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, StrategyKind};
