//! Validated cell coordinates on the 3x3 board.

use super::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Always in range: row and column are in 0-2, equivalently the
/// row-major index `row * 3 + col` is in 0-8. Construction fails
/// otherwise, so every `Position` in circulation addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position {
    index: u8,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// Center cell (1, 1).
    pub const CENTER: Position = Position { index: 4 };

    /// Corner cells in preference order: (0,0), (0,2), (2,0), (2,2).
    pub const CORNERS: [Position; 4] = [
        Position { index: 0 },
        Position { index: 2 },
        Position { index: 6 },
        Position { index: 8 },
    ];

    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position { index: 0 },
        Position { index: 1 },
        Position { index: 2 },
        Position { index: 3 },
        Position { index: 4 },
        Position { index: 5 },
        Position { index: 6 },
        Position { index: 7 },
        Position { index: 8 },
    ];

    /// Creates a position from row and column.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::InvalidPosition { row, col });
        }
        Ok(Self {
            index: (row * 3 + col) as u8,
        })
    }

    /// Creates position from board index (row = index / 3, col = index % 3).
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        if index > 8 {
            return Err(GameError::InvalidIndex { index });
        }
        Ok(Self { index: index as u8 })
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self.index as usize
    }

    /// Row in 0-2.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column in 0-2.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns `(row, col)`.
    pub fn to_row_col(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        LABELS[self.to_index()]
    }

    /// Parses user input: an index ("4"), a coordinate pair ("1,1" or "1 1"),
    /// or a label ("center", "top-left").
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num).ok();
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Self::new(row, col).ok();
        }

        let s_lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
