//! Baseline strategy that picks the first available square.

use super::{GameStrategy, immediate_wins};
use crate::games::tictactoe::{Board, Player, Position};

/// Plays the lowest-index empty square.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailableStrategy;

impl GameStrategy for FirstAvailableStrategy {
    fn name(&self) -> &'static str {
        "first_available"
    }

    fn find_opponent_winning_moves(&self, board: &Board, player: Player) -> Vec<Position> {
        immediate_wins(board, player)
    }

    fn find_best_move(&self, board: &Board, _player: Player) -> Option<Position> {
        if board.has_winner() {
            return None;
        }
        board.empty_positions().next()
    }
}
