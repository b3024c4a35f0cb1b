//! Check and game end detection

use crate::board::Board;
use crate::movegen::{self, SquareList};
use crate::types::{Color, Outcome, Square};

/// Returns the pieces of color `by` which can capture on `sq`
///
/// The pieces are returned in row-major order. Only pseudo-legal moves are considered, so a
/// pinned piece is still an attacker.
pub fn attackers(b: &Board, sq: Square, by: Color) -> SquareList {
    b.pieces(by)
        .map(|(src, _)| src)
        .filter(|&src| movegen::pseudo_legal(b, src).contains(&sq))
        .collect()
}

fn is_attacked(b: &Board, sq: Square, by: Color) -> bool {
    b.pieces(by)
        .any(|(src, _)| movegen::pseudo_legal(b, src).contains(&sq))
}

/// Returns `true` if the king of color `c` is attacked by some opposing piece
///
/// If there is no king of color `c` on the board, it is not in check.
pub fn in_check(b: &Board, c: Color) -> bool {
    match b.king_pos(c) {
        Some(king) => is_attacked(b, king, c.inv()),
        None => false,
    }
}

/// Returns `true` if side `c` is in check and cannot escape it
#[inline]
pub fn is_checkmate(b: &Board, c: Color) -> bool {
    in_check(b, c) && !movegen::has_legal_moves(b, c)
}

/// Returns `true` if side `c` is not in check, but has no legal moves
#[inline]
pub fn is_stalemate(b: &Board, c: Color) -> bool {
    !in_check(b, c) && !movegen::has_legal_moves(b, c)
}

/// Returns the outcome of the game if side `c` is to move, or `None` if the game goes on
pub fn outcome(b: &Board, c: Color) -> Option<Outcome> {
    if movegen::has_legal_moves(b, c) {
        return None;
    }
    if in_check(b, c) {
        Some(Outcome::Checkmate { winner: c.inv() })
    } else {
        Some(Outcome::Stalemate)
    }
}
