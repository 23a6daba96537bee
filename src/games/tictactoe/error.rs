//! Error type for tic-tac-toe rule violations.

use super::{Player, Position};

/// Error that can occur when constructing game values or applying a move.
///
/// Every variant is local to a single game or move attempt. A failed
/// operation never leaves the board or game partially modified.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Row or column outside the 3x3 grid.
    #[display("Position ({row}, {col}) is outside the 3x3 grid")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Linear index outside 0-8.
    #[display("Position index {index} is outside 0-8")]
    InvalidIndex {
        /// Requested index.
        index: usize,
    },

    /// A reconstructed board does not have exactly 9 cells.
    #[display("Board must have exactly 9 cells, got {len}")]
    InvalidBoardSize {
        /// Number of cells supplied.
        len: usize,
    },

    /// The target cell already holds a mark.
    #[display("Position {position} is already occupied")]
    PositionOccupied {
        /// The occupied position.
        position: Position,
    },

    /// Raw cell access outside the 9-cell grid.
    #[display("Cell index {index} is out of bounds")]
    PositionOutOfBounds {
        /// Requested index.
        index: usize,
    },

    /// A move was attempted after the game reached a terminal state.
    #[display("Game is already finished")]
    GameAlreadyFinished,

    /// The moving player is not the player whose turn it is.
    #[display("It is not player {player}'s turn")]
    NotPlayersTurn {
        /// The player who attempted to move.
        player: Player,
    },

    /// Numeric player id outside {1, 2}.
    #[display("Player id must be 1 or 2, got {id}")]
    InvalidPlayer {
        /// The rejected id.
        id: u8,
    },

    /// Unrecognised cell marker in a textual board.
    #[display("Unrecognised board marker {marker:?}")]
    InvalidMarker {
        /// The rejected character.
        marker: char,
    },

    /// A persisted record whose scalar fields contradict each other.
    #[display("Inconsistent game record: {reason}")]
    InconsistentRecord {
        /// What was inconsistent.
        reason: &'static str,
    },

    /// A postcondition failed after a move (debug builds only).
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}
