use super::Player;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }
}

/// Where a piece came to rest. Row 0 is the top, row 5 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a picture, top row first. `.` or `_` is empty,
    /// `R`/`A` is Red, `B` is Blue; spaces are ignored. Gravity is not
    /// checked, so floating pieces are allowed.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != COLS {
                return Err(BoardParseError::ColumnCount {
                    row,
                    expected: COLS,
                    found: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                board.cells[row][col] = match glyph.to_ascii_uppercase() {
                    '.' | '_' => Cell::Empty,
                    'R' | 'A' => Cell::Red,
                    'B' => Cell::Blue,
                    _ => return Err(BoardParseError::Glyph { row, col, glyph }),
                };
            }
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece for `player` into a 0-based column.
    ///
    /// The piece lands on the lowest empty cell, found by scanning the column
    /// from the bottom row upward. On error the board is left untouched.
    pub fn place(&mut self, column: i64, player: Player) -> Result<Position, MoveError> {
        let col = match usize::try_from(column) {
            Ok(col) if col < COLS => col,
            _ => {
                return Err(MoveError::InvalidInput(format!(
                    "column index {column} is outside 0..{COLS}"
                )))
            }
        };

        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.to_cell();
                return Ok(Position { row, col });
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check if the board is completely full. Looks at every cell, so it
    /// stays correct for boards built with [`Board::from_rows`].
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
