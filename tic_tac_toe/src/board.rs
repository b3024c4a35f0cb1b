//! Tic Tac Toe board

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

pub const SIZE: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Computer,
}

impl Mark {
    pub const fn inv(&self) -> Mark {
        match *self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    pub const fn as_char(&self) -> char {
        match *self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// Error placing a mark, see [`Board::place()`]
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("cell ({0}, {1}) is out of range")]
    OutOfRange(usize, usize),
    #[error("cell ({0}, {1}) is occupied")]
    Occupied(usize, usize),
}

/// Error parsing [`Board`]
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {} rows", SIZE)]
    RowCount,
    #[error("row {0} must have {} cells", SIZE)]
    RowLength(usize),
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Tic Tac Toe board
///
/// Parses from and formats to rows separated by `/`, with `.` for an empty cell, `X` for the
/// player and `O` for the computer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    pub const fn new() -> Board {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        *self.cells.get(row)?.get(col)?
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), PlaceError> {
        if row >= SIZE || col >= SIZE {
            return Err(PlaceError::OutOfRange(row, col));
        }
        if self.cells[row][col].is_some() {
            return Err(PlaceError::Occupied(row, col));
        }
        self.cells[row][col] = Some(mark);
        Ok(())
    }

    /// Iterates over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col].is_none())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns `true` if `mark` fills a row, a column or a diagonal
    pub fn is_winning(&self, mark: Mark) -> bool {
        let c = &self.cells;
        let m = Some(mark);
        (0..SIZE).any(|i| c[i].iter().all(|&cell| cell == m))
            || (0..SIZE).any(|j| (0..SIZE).all(|i| c[i][j] == m))
            || (0..SIZE).all(|i| c[i][i] == m)
            || (0..SIZE).all(|i| c[i][SIZE - 1 - i] == m)
    }

    pub fn winner(&self) -> Option<Mark> {
        [Mark::Player, Mark::Computer]
            .into_iter()
            .find(|&mark| self.is_winning(mark))
    }

    /// Returns `true` if someone won or the board is full
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount);
        }
        let mut res = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.chars().count() != SIZE {
                return Err(BoardParseError::RowLength(r));
            }
            for (c, ch) in row.chars().enumerate() {
                res.cells[r][c] = match ch {
                    '.' => None,
                    'X' => Some(Mark::Player),
                    'O' => Some(Mark::Computer),
                    _ => return Err(BoardParseError::UnexpectedChar(ch)),
                };
            }
        }
        Ok(res)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for (r, row) in self.cells.iter().enumerate() {
            if r != 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', |m| m.as_char()))?;
            }
        }
        Ok(())
    }
}
