//! Monotonic board invariant: marks are only ever added, one per move.

use super::{Invariant, Transition};

/// Invariant: a move adds exactly one mark and never clears or changes another.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board().cells();
        let after = transition.after.board().cells();

        let preserved = before
            .iter()
            .zip(after)
            .all(|(b, a)| b.is_none() || b == a);
        let added = before
            .iter()
            .zip(after)
            .filter(|(b, a)| b.is_none() && a.is_some())
            .count();

        preserved && added == 1
    }

    fn description() -> &'static str {
        "Board is monotonic (exactly one mark added, none changed)"
    }
}
