//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions are always checked; postconditions run in debug builds.

use super::action::Move;
use super::invariants::{InvariantSet, MoveInvariants, Transition};
use super::{Game, GameError};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the game must not be finished.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects moves on a finished game.
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.is_finished() {
            Err(GameError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not to move.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if mov.player != game.current_player() {
            Err(GameError::NotPlayersTurn { player: mov.player })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if !game.board().is_position_empty(mov.position) {
            Err(GameError::PositionOccupied {
                position: mov.position,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: not finished, right turn, empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game), fields(game_id = %game.id()))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        GameNotFinished::check(game)?;
        PlayersTurn::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions: the board only gained the one mark, turns alternate,
/// and the recorded outcome agrees with the board.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game).inspect_err(|e| warn!(error = %e, "Move rejected"))
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        MoveInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation { description }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameId, Player, Position};
    use chrono::Utc;

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new(GameId::from(1));
        let action = Move::new(Player::X, Position::CENTER);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new(GameId::from(1));
        game.make_move(Player::X, Position::CENTER).unwrap();
        let action = Move::new(Player::O, Position::CENTER);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(GameError::PositionOccupied { .. })
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new(GameId::from(1));
        let action = Move::new(Player::O, Position::CENTER);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(GameError::NotPlayersTurn { player: Player::O })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new(GameId::from(1));
        let mut after = before.clone();
        after.make_move(Player::X, Position::CENTER).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new(GameId::from(1));
        // Two marks appear at once and the turn does not pass.
        let corrupted = Game::restore(
            GameId::from(1),
            "X...X....".parse::<Board>().unwrap(),
            Player::X,
            None,
            Utc::now(),
            Utc::now(),
        );
        assert!(matches!(
            MoveContract::post(&before, &corrupted),
            Err(GameError::InvariantViolation { .. })
        ));
    }
}
