//! Moves and making them on the board

use crate::board::Board;
use crate::geometry;
use crate::types::{Cell, Piece, Square, SquareParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a [`Move`] from coordinate notation
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    /// Move string has invalid length
    #[error("invalid move length")]
    BadLength,
    /// Source square cannot be parsed
    #[error("bad source square: {0}")]
    BadSrc(SquareParseError),
    /// Destination square cannot be parsed
    #[error("bad destination square: {0}")]
    BadDst(SquareParseError),
}

/// Chess move
///
/// A move is just a pair of squares. It doesn't carry any information about the piece being
/// moved, so it must be interpreted against a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Square,
    dst: Square,
}

impl Move {
    #[inline]
    pub const fn new(src: Square, dst: Square) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Square {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Square {
        self.dst
    }

    /// Parses a move in coordinate notation, like `e2e4`
    #[inline]
    pub fn from_coords(s: &str) -> Result<Move, MoveParseError> {
        Move::from_str(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Square::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Square::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        Ok(Move { src, dst })
    }
}

/// Data required to roll back a move made by [`make_move()`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Undo {
    src_cell: Cell,
    dst_cell: Cell,
}

impl Undo {
    /// Returns the piece which stood on the destination square before the move
    #[inline]
    pub fn captured(&self) -> Option<Cell> {
        self.dst_cell.is_occupied().then_some(self.dst_cell)
    }

    /// Returns the piece which stood on the source square before the move
    #[inline]
    pub fn moved(&self) -> Cell {
        self.src_cell
    }
}

/// Makes the move `mv` on the board `b`
///
/// Whatever stands on the source square is put on the destination square, replacing its
/// previous contents. The moved piece gets its moved flag set, and a pawn reaching the last row
/// is replaced with a fresh queen of the same color.
///
/// The move is not validated in any way, and the side to move is left untouched. Use
/// [`movegen::legal_moves()`](crate::movegen::legal_moves) to obtain valid moves.
pub fn make_move(b: &mut Board, mv: Move) -> Undo {
    let src_cell = b.get(mv.src);
    let dst_cell = b.get(mv.dst);

    let mut cell = src_cell.with_moved();
    if let (Some(Piece::Pawn), Some(color)) = (src_cell.piece(), src_cell.color()) {
        if mv.dst.row() == geometry::promote_row(color) {
            cell = Cell::from_parts(color, Piece::Queen);
        }
    }

    b.put(mv.src, Cell::EMPTY);
    b.put(mv.dst, cell);
    Undo { src_cell, dst_cell }
}

/// Unmakes the move `mv` on the board `b`
///
/// Must be called with the undo data returned by the latest call to [`make_move()`] with the
/// same move. After this, the board is exactly the same as before such call, including the moved
/// flags.
pub fn unmake_move(b: &mut Board, mv: Move, u: Undo) {
    b.put(mv.dst, u.dst_cell);
    b.put(mv.src, u.src_cell);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn mv(s: &str) -> Move {
        Move::from_str(s).unwrap()
    }

    #[test]
    fn test_move_str() {
        let m = mv("e2e4");
        assert_eq!(m.src(), Square::new(6, 4).unwrap());
        assert_eq!(m.dst(), Square::new(4, 4).unwrap());
        assert_eq!(m.to_string(), "e2e4");
        assert_eq!(Move::from_str("e2e"), Err(MoveParseError::BadLength));
        assert_eq!(
            Move::from_str("z2e4"),
            Err(MoveParseError::BadSrc(SquareParseError::UnexpectedFileChar(
                'z'
            )))
        );
        assert_eq!(
            Move::from_str("e2e0"),
            Err(MoveParseError::BadDst(SquareParseError::UnexpectedRankChar(
                '0'
            )))
        );
    }

    #[test]
    fn test_make_unmake() {
        let mut b = Board::initial();
        let before = b.clone();
        let m = mv("e2e4");
        let u = make_move(&mut b, m);
        assert_eq!(u.captured(), None);
        assert_eq!(b.get(m.src()), Cell::EMPTY);
        let pawn = b.get(m.dst());
        assert_eq!(pawn.piece(), Some(Piece::Pawn));
        assert!(pawn.has_moved());
        assert_eq!(b.side(), Color::White);

        unmake_move(&mut b, m, u);
        assert_eq!(b, before);
    }

    #[test]
    fn test_capture() {
        let mut b = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w").unwrap();
        let before = b.clone();
        let m = mv("d1d5");
        let u = make_move(&mut b, m);
        assert_eq!(
            u.captured(),
            Some(Cell::from_parts(Color::Black, Piece::Queen))
        );
        assert_eq!(
            b.get(m.dst()),
            Cell::from_parts(Color::White, Piece::Rook).with_moved()
        );
        unmake_move(&mut b, m, u);
        assert_eq!(b, before);
    }

    #[test]
    fn test_promote() {
        let mut b = Board::from_fen("7k/P7/8/8/8/8/p7/K7 w").unwrap();
        let before = b.clone();

        let m = mv("a7a8");
        let u = make_move(&mut b, m);
        assert_eq!(
            b.get(m.dst()),
            Cell::from_parts(Color::White, Piece::Queen)
        );
        assert_eq!(u.moved().piece(), Some(Piece::Pawn));
        unmake_move(&mut b, m, u);
        assert_eq!(b, before);
        assert_eq!(b.get(m.src()).piece(), Some(Piece::Pawn));

        let m = mv("a2b1");
        let u = make_move(&mut b, m);
        assert_eq!(
            b.get(m.dst()),
            Cell::from_parts(Color::Black, Piece::Queen)
        );
        unmake_move(&mut b, m, u);
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_source() {
        let mut b = Board::initial();
        let before = b.clone();
        let m = mv("e4e5");
        let u = make_move(&mut b, m);
        assert_eq!(b, before);
        unmake_move(&mut b, m, u);
        assert_eq!(b, before);
    }
}
