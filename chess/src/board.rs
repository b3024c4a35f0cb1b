//! Board and related things

use crate::moves::{self, Move, Undo};
use crate::types::{Cell, Color, ColorParseError, Piece, Square};
use crate::{attack, geometry, movegen};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the first part of FEN (i.e. the positions of pieces on the board)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Row is too large
    #[error("too many items in row {0}")]
    RowOverflow(usize),
    /// Row is too small
    #[error("not enough items in row {0}")]
    RowUnderflow(usize),
    /// Too many rows
    #[error("too many rows")]
    Overflow,
    /// Not enough rows
    #[error("not enough rows")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error parsing [`Board`] from FEN
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum FenParseError {
    /// FEN contains non-ASCII characters
    #[error("non-ASCII data in FEN")]
    NonAscii,
    /// FEN doesn't have board part
    #[error("board not specified")]
    NoBoard,
    /// Error parsing board from FEN
    #[error("bad board: {0}")]
    Board(#[from] CellsParseError),
    /// FEN doesn't have move side part
    #[error("no move side")]
    NoMoveSide,
    /// Error parsing move side from FEN
    #[error("bad move side: {0}")]
    MoveSide(#[from] ColorParseError),
    /// FEN contains more fields than the standard six
    #[error("extra data in FEN")]
    ExtraData,
    /// One side has more than 16 pieces
    #[error("too many pieces of color {0}")]
    TooManyPieces(Color),
    /// One side has more than one king
    #[error("more than one king of color {0}")]
    TooManyKings(Color),
    /// Pawn stands on the first or the last rank
    #[error("invalid pawn position {0}")]
    InvalidPawn(Square),
}

/// Chess board
///
/// The board owns every piece standing on it and knows the side to move. It is a plain mutation
/// surface: [`Board::apply()`] and [`Board::revert()`] move pieces around without asking whether
/// the move is legal. Legality is the job of [`movegen`](crate::movegen).
///
/// # Example
///
/// ```
/// # use abchess::{Board, Cell, Color, Piece, Square};
/// #
/// let mut board = Board::empty();
/// board.put(Square::new(6, 1).unwrap(), Cell::from_parts(Color::White, Piece::King));
/// board.put(Square::new(3, 3).unwrap(), Cell::from_parts(Color::Black, Piece::King));
///
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8 w");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
    side: Color,
}

impl Board {
    /// Returns a board without any pieces and White to move
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
            side: Color::White,
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        const BACK_ROW: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut res = Board::empty();
        for color in [Color::White, Color::Black] {
            let pawn_row = geometry::pawn_home_row(color);
            let back_row = geometry::back_row(color);
            for (col, piece) in BACK_ROW.into_iter().enumerate() {
                res.put_at(pawn_row, col, Cell::from_parts(color, Piece::Pawn));
                res.put_at(back_row, col, Cell::from_parts(color, piece));
            }
        }
        res
    }

    /// Parses a board from FEN
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Board, FenParseError> {
        Board::from_str(fen)
    }

    /// Returns the contents of the square `sq`
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Returns the contents of the square at (`row`, `col`)
    ///
    /// Unlike [`Board::get()`], this function accepts any coordinates and returns an empty cell
    /// for the ones outside the board.
    #[inline]
    pub fn get_at(&self, row: isize, col: isize) -> Cell {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Cell::EMPTY;
        }
        self.cells[(row * 8 + col) as usize]
    }

    /// Puts `cell` to the square `sq`
    #[inline]
    pub fn put(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    #[inline]
    fn put_at(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * 8 + col] = cell;
    }

    /// Returns side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    /// Returns the position of the king of color `c`
    ///
    /// Boards under construction or in the middle of a simulation may lack a king, so this
    /// function returns `None` instead of failing in such case.
    pub fn king_pos(&self, c: Color) -> Option<Square> {
        let king = Cell::from_parts(c, Piece::King);
        Square::iter().find(|&sq| self.get(sq).index() == king.index())
    }

    /// Iterates over all the pieces of color `c` in row-major order
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::iter()
            .map(|sq| (sq, self.get(sq)))
            .filter(move |(_, cell)| cell.color() == Some(c))
    }

    /// Moves the piece from `mv.src()` to `mv.dst()`, see [`moves::make_move()`]
    #[inline]
    pub fn apply(&mut self, mv: Move) -> Undo {
        moves::make_move(self, mv)
    }

    /// Rolls back the latest [`Board::apply()`], see [`moves::unmake_move()`]
    #[inline]
    pub fn revert(&mut self, mv: Move, u: Undo) {
        moves::unmake_move(self, mv, u)
    }

    /// Returns `true` if the king of color `c` is attacked
    #[inline]
    pub fn is_check(&self, c: Color) -> bool {
        attack::in_check(self, c)
    }

    /// Returns `true` if the side `c` has at least one legal move
    #[inline]
    pub fn has_legal_moves(&self, c: Color) -> bool {
        movegen::has_legal_moves(self, c)
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// Each row is prefixed with its rank, files are listed below the board, and the side to
    /// move is written on the last line. The resulting wrapper implements [`fmt::Display`].
    ///
    /// # Example
    ///
    /// ```
    /// # use abchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 b").unwrap();
    ///
    /// let res = r#"
    /// 8 . . . . k . . .
    /// 7 . . . . . . . .
    /// 6 . . . . . . . .
    /// 5 . . . . . . . .
    /// 4 . . . . . . . .
    /// 3 . . . . . . . .
    /// 2 . . . . P . . .
    /// 1 . . . . K . . .
    ///   a b c d e f g h
    /// Black to move
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    ///
    /// let utf8 = b.pretty(PrettyStyle::Utf8).to_string();
    /// assert!(utf8.starts_with("8 . . . . ♚ . . ."));
    /// assert!(utf8.contains("1 . . . . ♔ . . ."));
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Converts the board into a FEN string
    ///
    /// Only the piece placement and the side to move are written, as castling and enpassant are
    /// not supported.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces as letters, uppercase for White and lowercase for Black
    Ascii,
    /// Print pieces as Unicode chess symbols
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    type Error = CellsParseError;

    let mut col = 0_usize;
    let mut row = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    for b in s.bytes() {
        match b {
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if col + add > 8 {
                    return Err(Error::RowOverflow(row));
                }
                col += add;
            }
            b'/' => {
                if col < 8 {
                    return Err(Error::RowUnderflow(row));
                }
                row += 1;
                col = 0;
                if row >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if col >= 8 {
                    return Err(Error::RowOverflow(row));
                }
                let mut cell = Cell::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                // Pawns never come back, so a pawn away from its home row has certainly moved
                if let (Some(Piece::Pawn), Some(color)) = (cell.piece(), cell.color()) {
                    if row != geometry::pawn_home_row(color) {
                        cell = cell.with_moved();
                    }
                }
                cells[row * 8 + col] = cell;
                col += 1;
            }
        };
    }

    if col < 8 {
        return Err(Error::RowUnderflow(row));
    }
    if row < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = FenParseError;

        if !s.is_ascii() {
            return Err(Error::NonAscii);
        }
        let mut iter = s.split_ascii_whitespace().fuse();

        let cells = parse_cells(iter.next().ok_or(Error::NoBoard)?)?;
        let side = Color::from_str(iter.next().ok_or(Error::NoMoveSide)?)?;

        // Castling, enpassant and move counters are accepted for compatibility, but ignored
        if iter.by_ref().take(4).count() == 4 && iter.next().is_some() {
            return Err(Error::ExtraData);
        }

        validate_cells(&cells)?;
        Ok(Board { cells, side })
    }
}

/// Checks that the position could arise in a game, except that a king may be missing
fn validate_cells(cells: &[Cell; 64]) -> Result<(), FenParseError> {
    for color in [Color::White, Color::Black] {
        let mut pieces = 0;
        let mut kings = 0;
        for cell in cells.iter().filter(|cell| cell.color() == Some(color)) {
            pieces += 1;
            if cell.piece() == Some(Piece::King) {
                kings += 1;
            }
        }
        if pieces > 16 {
            return Err(FenParseError::TooManyPieces(color));
        }
        if kings > 1 {
            return Err(FenParseError::TooManyKings(color));
        }
    }

    for sq in Square::iter() {
        if cells[sq.index()].piece() == Some(Piece::Pawn) && matches!(sq.row(), 0 | 7) {
            return Err(FenParseError::InvalidPawn(sq));
        }
    }

    Ok(())
}

fn format_cells(cells: &[Cell; 64], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for row in 0..8 {
        if row != 0 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for cell in &cells[row * 8..(row + 1) * 8] {
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", (b'0' + empty) as char)?;
        }
    }
    Ok(())
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)?;
        write!(f, " {}", self.side.as_char())
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let glyph = |cell: Cell| match self.style {
            PrettyStyle::Ascii => cell.as_char(),
            PrettyStyle::Utf8 => cell.as_utf8_char(),
        };
        for (row, cells) in self.board.cells.chunks(8).enumerate() {
            write!(f, "{}", 8 - row)?;
            for &cell in cells {
                write!(f, " {}", glyph(cell))?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in 'a'..='h' {
            write!(f, " {}", file)?;
        }
        writeln!(f)?;
        writeln!(f, "{} to move", self.board.side)
    }
}
