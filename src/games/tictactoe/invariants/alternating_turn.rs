//! Alternating turn invariant: the turn passes unless the move ended the game.

use super::{Invariant, Transition};

/// Invariant: moves start from an unfinished game; the turn passes to the
/// opponent while the game goes on and stays put once it is over.
pub struct AlternatingTurnInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingTurnInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let Transition { before, after } = *transition;

        if before.is_finished() {
            return false;
        }

        if after.is_finished() {
            after.current_player() == before.current_player()
        } else {
            after.current_player() == before.current_player().opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns and finished games accept no moves"
    }
}
