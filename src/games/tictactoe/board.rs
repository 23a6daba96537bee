//! The 3x3 board.

use super::rules;
use super::{GameError, Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). A cell, once occupied, is
/// never cleared or reassigned: [`Board::make_move`] only fills empty cells.
/// Search explores hypothetical moves on clones, never on the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Creates a board from externally supplied cells (e.g. from storage).
    pub fn from_cells(cells: &[Option<Player>]) -> Result<Self, GameError> {
        let cells: [Option<Player>; 9] = cells
            .try_into()
            .map_err(|_| GameError::InvalidBoardSize { len: cells.len() })?;
        Ok(Self { cells })
    }

    /// Creates a board from numeric player ids (1, 2 or empty).
    pub fn from_player_ids(ids: &[Option<u8>]) -> Result<Self, GameError> {
        let cells = ids
            .iter()
            .map(|id| id.map(Player::from_id).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Player>; 9] {
        &self.cells
    }

    /// Returns all cells as numeric player ids.
    pub fn player_ids(&self) -> Vec<Option<u8>> {
        self.cells.iter().map(|cell| cell.map(Player::id)).collect()
    }

    /// Returns the cells as a 3x3 grid of rows.
    pub fn to_grid(&self) -> [[Option<Player>; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Checks if a square is empty.
    pub fn is_position_empty(&self, pos: Position) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// Does not check turn order or whether the game is over; those are
    /// the game's concern. Fails without modifying the board if the
    /// square is already occupied.
    pub fn make_move(&mut self, pos: Position, player: Player) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.to_index()];
        if cell.is_some() {
            return Err(GameError::PositionOccupied { position: pos });
        }
        *cell = Some(player);
        Ok(())
    }

    /// Returns a copy of this board with `player`'s mark added at `pos`.
    pub fn with_move(&self, pos: Position, player: Player) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.make_move(pos, player)?;
        Ok(next)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winning player, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if any line is complete.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Iterates over the empty positions in increasing index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_position_empty(pos))
    }

    /// Occupant of the cell at a raw index.
    pub fn occupant(&self, index: usize) -> Result<Option<Player>, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::PositionOutOfBounds { index })
    }

    /// Occupant of the cell at a position.
    pub fn occupant_at(&self, pos: Position) -> Option<Player> {
        self.cells[pos.to_index()]
    }

    /// Display symbol of the occupant at a raw index.
    pub fn symbol(&self, index: usize) -> Result<Option<char>, GameError> {
        Ok(self.occupant(index)?.map(Player::symbol))
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(player)).count()
    }
}

impl TryFrom<Vec<Option<Player>>> for Board {
    type Error = GameError;

    fn try_from(cells: Vec<Option<Player>>) -> Result<Self, Self::Error> {
        Self::from_cells(&cells)
    }
}

/// Formats the board as three rows, empty cells shown as their index.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.to_grid().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, "{}", row * 3 + col)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses 9 markers (`X`, `O`, or `.`/`_`/`-` for empty); whitespace is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Some(Player::X)),
                'O' => Ok(Some(Player::O)),
                '.' | '_' | '-' => Ok(None),
                marker => Err(GameError::InvalidMarker { marker }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }
}
