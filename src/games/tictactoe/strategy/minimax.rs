//! Exhaustive minimax search.
//!
//! The full remaining game tree is enumerated: no pruning, no depth limit,
//! no transposition table. From an empty board that is well under a million
//! nodes, so every answer reflects exact optimal play.

use super::{GameStrategy, immediate_wins};
use crate::games::tictactoe::{Board, Player, Position};
use tracing::{debug, instrument};

/// Score of a position won by the searching player at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Score of a position lost by the searching player at depth 0.
pub const LOSE_SCORE: i32 = -10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Scores `board` from `player`'s point of view.
///
/// Wins score `10 - depth` and losses `-10 + depth`, so faster wins and
/// slower losses are preferred. A full board without a winner scores 0.
/// On a maximizing ply `player` moves next; otherwise the opponent does.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, player: Player) -> i32 {
    match board.winner() {
        Some(winner) if winner == player => return WIN_SCORE - depth,
        Some(_) => return LOSE_SCORE + depth,
        None if board.is_full() => return DRAW_SCORE,
        None => {}
    }

    let mover = if maximizing { player } else { player.opponent() };
    let scores = board.empty_positions().filter_map(|pos| {
        board
            .with_move(pos, mover)
            .ok()
            .map(|next| minimax(&next, depth + 1, !maximizing, player))
    });

    if maximizing {
        scores.max().unwrap_or(DRAW_SCORE)
    } else {
        scores.min().unwrap_or(DRAW_SCORE)
    }
}

/// Optimal-play strategy backed by [`minimax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Scores every empty position for `player`, in index order.
    pub fn score_moves(&self, board: &Board, player: Player) -> Vec<(Position, i32)> {
        board
            .empty_positions()
            .filter_map(|pos| {
                board
                    .with_move(pos, player)
                    .ok()
                    .map(|next| (pos, minimax(&next, 0, false, player)))
            })
            .collect()
    }

    /// Center first, then corners in the order (0,0), (0,2), (2,0), (2,2).
    fn positional_preference(board: &Board) -> Option<Position> {
        std::iter::once(Position::CENTER)
            .chain(Position::CORNERS)
            .find(|&pos| board.is_position_empty(pos))
    }
}

impl GameStrategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, board))]
    fn find_opponent_winning_moves(&self, board: &Board, player: Player) -> Vec<Position> {
        let moves = immediate_wins(board, player);
        debug!(count = moves.len(), "Immediate winning moves found");
        moves
    }

    /// Picks the highest-scoring move, keeping the earliest index on ties.
    ///
    /// When no move scores above zero (no forced win), the choice is replaced
    /// by the positional preference: the center if empty, else the first
    /// empty corner. This replacement does not check that the chosen cell
    /// blocks an opponent's immediate win.
    #[instrument(skip(self, board))]
    fn find_best_move(&self, board: &Board, player: Player) -> Option<Position> {
        if board.is_full() || board.has_winner() {
            return None;
        }

        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board, player) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (best_move, best_score) = best?;
        if best_score <= DRAW_SCORE
            && let Some(preferred) = Self::positional_preference(board)
        {
            debug!(
                best_score,
                minimax_move = best_move.to_index(),
                preferred = preferred.to_index(),
                "No forced win, using positional preference"
            );
            return Some(preferred);
        }

        debug!(best_score, best_move = best_move.to_index(), "Best move selected");
        Some(best_move)
    }
}
