//! Move-selection strategies.
//!
//! Strategies are stateless and read-only: they explore hypothetical
//! moves on cloned boards and never modify the board they are given.

mod first_available;
mod minimax;

pub use first_available::FirstAvailableStrategy;
pub use minimax::{DRAW_SCORE, LOSE_SCORE, MinimaxStrategy, WIN_SCORE, minimax};

use super::{Board, Player, Position};

/// Answers "what should this player play next" for a board.
pub trait GameStrategy: Send + Sync {
    /// Short name for logs and configuration.
    fn name(&self) -> &'static str;

    /// Every position where `player` would complete a line right now,
    /// in increasing index order. Empty on a full or already-won board.
    fn find_opponent_winning_moves(&self, board: &Board, player: Player) -> Vec<Position>;

    /// The suggested move for `player`, or `None` on a full or already-won board.
    fn find_best_move(&self, board: &Board, player: Player) -> Option<Position>;
}

/// Collects the empty positions where `player` wins immediately.
pub(crate) fn immediate_wins(board: &Board, player: Player) -> Vec<Position> {
    if board.is_full() || board.has_winner() {
        return Vec::new();
    }

    board
        .empty_positions()
        .filter(|&pos| {
            board
                .with_move(pos, player)
                .is_ok_and(|next| next.winner() == Some(player))
        })
        .collect()
}
