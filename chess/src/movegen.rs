use crate::attack;
use crate::board::Board;
use crate::geometry;
use crate::moves::Move;
use crate::types::{Color, Piece, Square};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Destination squares of a single piece
///
/// A queen in the middle of an empty board has 27 moves, which is the maximum.
pub type SquareList = ArrayVec<Square, 32>;

/// All the moves of one side
///
/// A valid position has at most 16 pieces per side, so it has fewer than 16 * 27 moves.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 512>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, 512>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

fn gen_pawn(b: &Board, src: Square, color: Color, moved: bool, res: &mut SquareList) {
    let forward = geometry::pawn_forward_delta(color);

    if let Some(one) = src.try_shift(forward, 0) {
        if b.get(one).is_empty() {
            res.push(one);
            if !moved {
                if let Some(two) = src.try_shift(2 * forward, 0) {
                    if b.get(two).is_empty() {
                        res.push(two);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(dst) = src.try_shift(forward, side) {
            if b.get(dst).color() == Some(color.inv()) {
                res.push(dst);
            }
        }
    }
}

fn gen_leaper(
    b: &Board,
    src: Square,
    color: Color,
    offsets: &[(isize, isize)],
    res: &mut SquareList,
) {
    for &(dr, dc) in offsets {
        if let Some(dst) = src.try_shift(dr, dc) {
            if b.get(dst).color() != Some(color) {
                res.push(dst);
            }
        }
    }
}

fn gen_slider(b: &Board, src: Square, color: Color, dirs: &[(isize, isize)], res: &mut SquareList) {
    for &(dr, dc) in dirs {
        let mut cur = src;
        while let Some(dst) = cur.try_shift(dr, dc) {
            match b.get(dst).color() {
                None => res.push(dst),
                Some(c) if c == color => break,
                Some(_) => {
                    res.push(dst);
                    break;
                }
            }
            cur = dst;
        }
    }
}

/// Returns the pseudo-legal destinations of the piece standing on `src`
///
/// Pseudo-legal moves follow the movement rules of the piece, but may leave the king of its
/// color under attack. For an empty square, the result is empty.
///
/// The destinations are listed in a fixed order, which depends only on the board contents.
pub fn pseudo_legal(b: &Board, src: Square) -> SquareList {
    let cell = b.get(src);
    let mut res = SquareList::new();
    let (Some(color), Some(piece)) = (cell.color(), cell.piece()) else {
        return res;
    };
    match piece {
        Piece::Pawn => gen_pawn(b, src, color, cell.has_moved(), &mut res),
        Piece::Knight => gen_leaper(b, src, color, &geometry::KNIGHT_OFFSETS, &mut res),
        Piece::King => gen_leaper(b, src, color, &geometry::KING_OFFSETS, &mut res),
        Piece::Bishop => gen_slider(b, src, color, &geometry::DIAG_DIRS, &mut res),
        Piece::Rook => gen_slider(b, src, color, &geometry::LINE_DIRS, &mut res),
        Piece::Queen => {
            gen_slider(b, src, color, &geometry::LINE_DIRS, &mut res);
            gen_slider(b, src, color, &geometry::DIAG_DIRS, &mut res);
        }
    }
    res
}

/// Keeps only the moves from `src` after which the king of `color` is not attacked
///
/// Each candidate is tried on `b` itself and rolled back, so the board is left unchanged.
fn retain_legal(b: &mut Board, src: Square, color: Color, dsts: &mut SquareList) {
    dsts.retain(|dst| {
        let mv = Move::new(src, *dst);
        let u = b.apply(mv);
        let ok = !attack::in_check(b, color);
        b.revert(mv, u);
        ok
    });
}

/// Same as [`legal_moves()`], but uses `b` as a scratch board
///
/// The board is left exactly as it was on return.
pub fn legal_moves_in_place(b: &mut Board, src: Square) -> SquareList {
    let Some(color) = b.get(src).color() else {
        return SquareList::new();
    };
    let mut res = pseudo_legal(b, src);
    retain_legal(b, src, color, &mut res);
    res
}

/// Returns the legal destinations of the piece standing on `src`
///
/// The move is legal if it's pseudo-legal and the king of the moving piece's color is not
/// attacked after it. Moves are checked on a single scratch copy of the board.
pub fn legal_moves(b: &Board, src: Square) -> SquareList {
    let mut scratch = b.clone();
    legal_moves_in_place(&mut scratch, src)
}

/// Pushes all the legal moves of side `c` into `res`, using `b` as a scratch board
///
/// Moves are enumerated by scanning the board in row-major order, and then in the order of
/// [`pseudo_legal()`] for each piece.
pub fn gen_legal_in_place(b: &mut Board, c: Color, res: &mut MoveList) {
    for src in Square::iter() {
        if b.get(src).color() != Some(c) {
            continue;
        }
        for dst in legal_moves_in_place(b, src) {
            res.push(Move::new(src, dst));
        }
    }
}

/// Returns all the legal moves of side `c`
pub fn all_legal_moves(b: &Board, c: Color) -> MoveList {
    let mut scratch = b.clone();
    let mut res = MoveList::new();
    gen_legal_in_place(&mut scratch, c, &mut res);
    res
}

/// Returns `true` if side `c` has at least one legal move
pub fn has_legal_moves(b: &Board, c: Color) -> bool {
    let mut scratch = b.clone();
    Square::iter().any(|src| {
        scratch.get(src).color() == Some(c) && !legal_moves_in_place(&mut scratch, src).is_empty()
    })
}
