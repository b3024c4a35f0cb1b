//! Connect Four board

use std::fmt::{self, Display};
use std::str::FromStr;

use arrayvec::ArrayVec;
use thiserror::Error;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

/// Number of discs in a row required to win
pub const WIN_LEN: usize = 4;

/// Four consecutive cells of the board in some direction
pub type Window = [Option<Disc>; WIN_LEN];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Disc {
    Player,
    Computer,
}

impl Disc {
    pub const fn inv(&self) -> Disc {
        match *self {
            Disc::Player => Disc::Computer,
            Disc::Computer => Disc::Player,
        }
    }

    pub const fn as_char(&self) -> char {
        match *self {
            Disc::Player => 'X',
            Disc::Computer => 'O',
        }
    }
}

/// Error dropping a disc, see [`Board::drop()`]
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum DropError {
    #[error("column {0} is out of range")]
    OutOfRange(usize),
    #[error("column {0} is full")]
    Full(usize),
}

/// Error parsing [`Board`]
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {} rows", ROWS)]
    RowCount,
    #[error("row {0} must have {} cells", COLUMNS)]
    RowLength(usize),
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Connect Four board
///
/// Row 0 is the top of the board, so the discs are stacked from row `ROWS - 1` upwards. The
/// board is small, so it's `Copy`.
///
/// The board parses from and formats to a compact notation, with rows listed from top to bottom
/// and separated by `/`. Each cell is `.` if empty, `X` for the player and `O` for the computer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Disc>; COLUMNS]; ROWS],
}

impl Board {
    pub const fn new() -> Board {
        Board {
            cells: [[None; COLUMNS]; ROWS],
        }
    }

    /// Returns the disc at (`row`, `col`), or `None` if the cell is empty or lies outside the board
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Disc> {
        *self.cells.get(row)?.get(col)?
    }

    /// Returns `true` if a disc can be dropped into column `col`
    #[inline]
    pub fn is_valid_location(&self, col: usize) -> bool {
        col < COLUMNS && self.cells[0][col].is_none()
    }

    /// Returns the lowest empty row in column `col`
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLUMNS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Drops `disc` into column `col` and returns the row where it lands
    pub fn drop(&mut self, col: usize, disc: Disc) -> Result<usize, DropError> {
        if col >= COLUMNS {
            return Err(DropError::OutOfRange(col));
        }
        let row = self.next_open_row(col).ok_or(DropError::Full(col))?;
        self.cells[row][col] = Some(disc);
        Ok(row)
    }

    /// Returns the columns which are not full, from left to right
    pub fn valid_locations(&self) -> ArrayVec<usize, COLUMNS> {
        (0..COLUMNS)
            .filter(|&col| self.is_valid_location(col))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(Option::is_some)
    }

    /// Iterates over all the windows of four cells: horizontal, vertical, and both diagonals
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        let horz = (0..ROWS).flat_map(move |r| {
            (0..=COLUMNS - WIN_LEN).map(move |c| [0, 1, 2, 3].map(|i| self.cells[r][c + i]))
        });
        let vert = (0..=ROWS - WIN_LEN).flat_map(move |r| {
            (0..COLUMNS).map(move |c| [0, 1, 2, 3].map(|i| self.cells[r + i][c]))
        });
        let down = (0..=ROWS - WIN_LEN).flat_map(move |r| {
            (0..=COLUMNS - WIN_LEN).map(move |c| [0, 1, 2, 3].map(|i| self.cells[r + i][c + i]))
        });
        let up = (WIN_LEN - 1..ROWS).flat_map(move |r| {
            (0..=COLUMNS - WIN_LEN).map(move |c| [0, 1, 2, 3].map(|i| self.cells[r - i][c + i]))
        });
        horz.chain(vert).chain(down).chain(up)
    }

    /// Returns `true` if there are four discs of `disc` in a row
    pub fn is_winning(&self, disc: Disc) -> bool {
        self.windows()
            .any(|w| w.iter().all(|&cell| cell == Some(disc)))
    }

    /// Returns `true` if the game is over, i.e. someone won or the board is full
    pub fn is_terminal(&self) -> bool {
        self.is_winning(Disc::Player) || self.is_winning(Disc::Computer) || self.is_full()
    }

    /// Returns the column cells from top to bottom, or `None` if `col` is out of range
    pub fn column(&self, col: usize) -> Option<[Option<Disc>; ROWS]> {
        if col >= COLUMNS {
            return None;
        }
        Some([0, 1, 2, 3, 4, 5].map(|row| self.cells[row][col]))
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount);
        }
        let mut res = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.chars().count() != COLUMNS {
                return Err(BoardParseError::RowLength(r));
            }
            for (c, ch) in row.chars().enumerate() {
                res.cells[r][c] = match ch {
                    '.' => None,
                    'X' => Some(Disc::Player),
                    'O' => Some(Disc::Computer),
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
                write!(f, "{}", cell.map_or('.', |d| d.as_char()))?;
            }
        }
        Ok(())
    }
}
