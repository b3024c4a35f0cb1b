use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("unexpected cell char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Square on the board
///
/// Rows are counted from the top of the board as seen by White: row 0 is the eighth rank and
/// row 7 is the first one. Columns go from file `a` (column 0) to file `h` (column 7). An off-board
/// square cannot be represented, so every constructor which may go off the board returns an
/// [`Option`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Returns the square at (`row`, `col`), or `None` if it lies outside the board
    pub const fn new(row: usize, col: usize) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    pub const fn from_index(val: usize) -> Square {
        assert!(val < 64, "square index must be between 0 and 63");
        Square(val as u8)
    }

    pub const fn row(&self) -> usize {
        (self.0 >> 3) as usize
    }

    pub const fn col(&self) -> usize {
        (self.0 & 7) as usize
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the square shifted by `delta_row` rows and `delta_col` columns
    ///
    /// Returns `None` if the result lies outside the board.
    pub fn try_shift(self, delta_row: isize, delta_col: isize) -> Option<Square> {
        let new_row = self.row().wrapping_add(delta_row as usize);
        let new_col = self.col().wrapping_add(delta_col as usize);
        Square::new(new_row, new_col)
    }

    /// Iterates over all the squares in row-major order
    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Square)
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col() as u8) as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row() as u8) as char
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Square({})", self);
        }
        write!(f, "Square(?{:?})", self.0)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(SquareParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let col = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            b => return Err(SquareParseError::UnexpectedFileChar(b as char)),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => (b'8' - b) as usize,
            b => return Err(SquareParseError::UnexpectedRankChar(b as char)),
        };
        Ok(Square((row * 8 + col) as u8))
    }
}

#[derive(Debug, derive_more::Display, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ColorParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch))
    }
}

/// Kind of a chess piece
#[derive(Debug, derive_more::Display, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl Piece {
    pub const COUNT: usize = 6;

    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::Pawn,
        Piece::King,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
    ];

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }
}

/// Contents of a single square
///
/// A cell is either empty or holds a piece of some color. Besides color and kind, it remembers
/// whether the piece has already moved; this flag gates the pawn double step.
///
/// Two cells with the same piece but different moved flags are not equal.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const MAX_INDEX: usize = 13;

    const MOVED: u8 = 0x10;
    const INDEX_MASK: u8 = 0x0f;

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    /// Returns the index of the piece inside the cell, ignoring the moved flag
    ///
    /// The empty cell has index 0, white pieces have indices 1 to 6 and black pieces have indices
    /// 7 to 12.
    pub const fn index(&self) -> usize {
        (self.0 & Self::INDEX_MASK) as usize
    }

    pub const fn from_index(val: usize) -> Cell {
        assert!(val < Self::MAX_INDEX, "index too large");
        Cell(val as u8)
    }

    /// Returns a cell with a piece which has not moved yet
    pub const fn from_parts(c: Color, p: Piece) -> Cell {
        Cell(match c {
            Color::White => 1 + p as u8,
            Color::Black => 7 + p as u8,
        })
    }

    pub const fn color(&self) -> Option<Color> {
        match self.index() {
            0 => None,
            1..=6 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub const fn piece(&self) -> Option<Piece> {
        match self.index() {
            1 | 7 => Some(Piece::Pawn),
            2 | 8 => Some(Piece::King),
            3 | 9 => Some(Piece::Knight),
            4 | 10 => Some(Piece::Bishop),
            5 | 11 => Some(Piece::Rook),
            6 | 12 => Some(Piece::Queen),
            _ => None,
        }
    }

    pub const fn has_moved(&self) -> bool {
        self.0 & Self::MOVED != 0
    }

    /// Returns the same piece with the moved flag set
    ///
    /// The empty cell stays empty.
    pub const fn with_moved(self) -> Cell {
        if self.is_empty() {
            return self;
        }
        Cell(self.0 | Self::MOVED)
    }

    /// Iterates over the empty cell and all the unmoved pieces
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::MAX_INDEX).map(Cell::from_index)
    }

    pub fn as_char(&self) -> char {
        b".PKNBRQpknbrq"[self.index()] as char
    }

    pub fn as_utf8_char(&self) -> char {
        [
            '.', '♙', '♔', '♘', '♗', '♖', '♕', '♟', '♚', '♞', '♝', '♜', '♛',
        ][self.index()]
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c == '.' {
            return Some(Cell::EMPTY);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'k' => Piece::King,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            _ => return None,
        };
        Some(Cell::from_parts(color, piece))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.index() >= Self::MAX_INDEX {
            return write!(f, "Cell(?{:?})", self.0);
        }
        if self.has_moved() {
            return write!(f, "Cell({}, moved)", self.as_char());
        }
        write!(f, "Cell({})", self.as_char())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(CellParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Cell::from_char(ch).ok_or(CellParseError::UnexpectedChar(ch))
    }
}

/// Final result of a game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move has no legal moves and is in check
    Checkmate { winner: Color },
    /// The side to move has no legal moves and is not in check; scored as a draw
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Self::Checkmate { winner } => Some(winner),
            Self::Stalemate => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(*self, Self::Stalemate)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            Self::Stalemate => write!(f, "stalemate, draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let mut squares = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col).unwrap();
                assert_eq!(sq.row(), row);
                assert_eq!(sq.col(), col);
                squares.push(sq);
            }
        }
        assert_eq!(squares, Square::iter().collect::<Vec<_>>());
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn test_square_shift() {
        let a8 = Square::new(0, 0).unwrap();
        assert_eq!(a8.try_shift(-1, 0), None);
        assert_eq!(a8.try_shift(0, -1), None);
        assert_eq!(a8.try_shift(1, 1), Square::new(1, 1));

        let h1 = Square::new(7, 7).unwrap();
        assert_eq!(h1.try_shift(1, 0), None);
        assert_eq!(h1.try_shift(0, 1), None);
        assert_eq!(h1.try_shift(-2, -1), Square::new(5, 6));
    }

    #[test]
    fn test_square_str() {
        assert_eq!(Square::new(7, 0).unwrap().to_string(), "a1");
        assert_eq!(Square::new(0, 7).unwrap().to_string(), "h8");
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
        assert_eq!(Square::from_str("e2"), Ok(Square::new(6, 4).unwrap()));
        assert_eq!(Square::from_str("b4"), Ok(Square::new(4, 1).unwrap()));
        assert_eq!(
            Square::from_str("h9"),
            Err(SquareParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Square::from_str("i4"),
            Err(SquareParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Square::from_str("e22"), Err(SquareParseError::BadLength));
    }

    #[test]
    fn test_cell() {
        assert_eq!(Cell::EMPTY.color(), None);
        assert_eq!(Cell::EMPTY.piece(), None);
        let mut cells = vec![Cell::EMPTY];
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                let cell = Cell::from_parts(color, piece);
                assert_eq!(cell.color(), Some(color));
                assert_eq!(cell.piece(), Some(piece));
                assert!(!cell.has_moved());
                cells.push(cell);
            }
        }
        assert_eq!(cells, Cell::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_cell_moved() {
        let pawn = Cell::from_parts(Color::Black, Piece::Pawn);
        let moved = pawn.with_moved();
        assert!(moved.has_moved());
        assert_ne!(pawn, moved);
        assert_eq!(moved.color(), Some(Color::Black));
        assert_eq!(moved.piece(), Some(Piece::Pawn));
        assert_eq!(moved.index(), pawn.index());
        assert_eq!(moved.as_char(), 'p');
        assert_eq!(Cell::EMPTY.with_moved(), Cell::EMPTY);
    }

    #[test]
    fn test_cell_str() {
        for cell in Cell::iter() {
            let s = cell.to_string();
            assert_eq!(Cell::from_str(&s), Ok(cell));
        }
        assert_eq!(Cell::from_str("x"), Err(CellParseError::UnexpectedChar('x')));
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::White.inv(), Color::Black);
        assert_eq!(Color::Black.inv(), Color::White);
        assert_eq!(Color::from_str("b"), Ok(Color::Black));
        assert_eq!(Color::from_str("x"), Err(ColorParseError::UnexpectedChar('x')));
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(Piece::Knight.to_string(), "Knight");
    }

    #[test]
    fn test_outcome() {
        let mate = Outcome::Checkmate {
            winner: Color::Black,
        };
        assert_eq!(mate.winner(), Some(Color::Black));
        assert!(!mate.is_draw());
        assert_eq!(mate.to_string(), "checkmate, Black wins");
        assert_eq!(Outcome::Stalemate.winner(), None);
        assert!(Outcome::Stalemate.is_draw());
    }
}
