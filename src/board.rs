use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 3x3 playing grid. Empty cells hold `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at the given cell, if any.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Place `mark` on an empty in-range cell.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if self.get(row, col)?.is_some() {
            return Err(BoardError::Occupied { row, col });
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Raw grid, for rendering.
    pub fn cells(&self) -> &[[Option<Mark>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Three in a row; `line` carries the winning coordinates.
    Win {
        winner: Mark,
        line: [(usize, usize); 3],
    },
    /// Full board with no line.
    Draw,
}

/// All lines that decide a game: rows, columns, both diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Scan for a finished game. `None` while the game is still in progress.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    let cells = board.cells();
    for line in LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = line;
        if let Some(mark) = cells[r0][c0] {
            if cells[r1][c1] == Some(mark) && cells[r2][c2] == Some(mark) {
                return Some(Outcome::Win { winner: mark, line });
            }
        }
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}
