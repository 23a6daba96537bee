//! Outcome consistency: the recorded outcome agrees with the board.

use super::{Invariant, Transition};
use crate::games::tictactoe::Outcome;

/// Invariant: after a move, the outcome is `Winner(p)` exactly when the board
/// shows `p` winning, `Draw` exactly when it is full with no winner, and
/// unset otherwise.
pub struct OutcomeConsistentInvariant;

impl<'a> Invariant<Transition<'a>> for OutcomeConsistentInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let board = transition.after.board();
        let expected = match board.winner() {
            Some(player) => Some(Outcome::Winner(player)),
            None if board.is_full() => Some(Outcome::Draw),
            None => None,
        };
        transition.after.outcome() == expected
    }

    fn description() -> &'static str {
        "Outcome matches the board (winner, draw, or still in progress)"
    }
}
