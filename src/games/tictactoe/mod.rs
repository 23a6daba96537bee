//! Tic-tac-toe: board, rules, the game state machine and move search.

mod action;
mod board;
mod contracts;
mod error;
mod game;
mod invariants;
mod phases;
mod player;
mod position;
pub mod rules;
pub mod strategy;

pub use action::Move;
pub use board::Board;
pub use contracts::{Contract, GameNotFinished, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use error::GameError;
pub use game::{Game, GameId};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    MoveInvariants, OutcomeConsistentInvariant, Transition,
};
pub use phases::{GameStatus, Outcome};
pub use player::Player;
pub use position::Position;
pub use strategy::{FirstAvailableStrategy, GameStrategy, MinimaxStrategy};
