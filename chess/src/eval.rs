//! Static position evaluation

use crate::board::Board;
use crate::types::{Color, Piece, Square};

/// Bonus for each center square occupied by a piece
pub const CENTER_BONUS: i32 = 5;

/// Squares d5, e5, d4 and e4
pub const CENTER: [Square; 4] = [
    Square::from_index(3 * 8 + 3),
    Square::from_index(3 * 8 + 4),
    Square::from_index(4 * 8 + 3),
    Square::from_index(4 * 8 + 4),
];

/// Returns the material value of a piece
#[inline]
pub const fn piece_value(p: Piece) -> i32 {
    match p {
        Piece::Pawn => 10,
        Piece::Knight => 30,
        Piece::Bishop => 30,
        Piece::Rook => 50,
        Piece::Queen => 90,
        Piece::King => 900,
    }
}

/// Evaluates the position from the point of view of `perspective`
///
/// The score is the material balance, plus [`CENTER_BONUS`] for each of the [`CENTER`] squares
/// occupied by a piece of `perspective`, minus the same for the opponent. Positive scores are
/// good for `perspective`.
///
/// # Example
///
/// ```
/// # use abchess::{Board, Color, eval};
/// #
/// let b = Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 w").unwrap();
/// assert_eq!(eval::evaluate(&b, Color::White), 15);
/// assert_eq!(eval::evaluate(&b, Color::Black), -15);
/// ```
pub fn evaluate(b: &Board, perspective: Color) -> i32 {
    let mut score = 0;
    for sq in Square::iter() {
        let cell = b.get(sq);
        let (Some(color), Some(piece)) = (cell.color(), cell.piece()) else {
            continue;
        };
        let mut value = piece_value(piece);
        if CENTER.contains(&sq) {
            value += CENTER_BONUS;
        }
        if color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(evaluate(&b, Color::White), 0);
        assert_eq!(evaluate(&b, Color::Black), 0);
    }

    #[test]
    fn test_center() {
        assert_eq!(
            CENTER.map(|sq| sq.to_string()),
            ["d5", "e5", "d4", "e4"].map(String::from)
        );
        let b = Board::from_fen("4k3/8/8/3n4/8/8/8/4K3 w").unwrap();
        assert_eq!(evaluate(&b, Color::Black), 35);
        assert_eq!(evaluate(&b, Color::White), -35);
    }

    #[test]
    fn test_material() {
        let b = Board::from_fen("r3k3/8/8/8/8/8/8/Q3K3 w").unwrap();
        assert_eq!(evaluate(&b, Color::White), 40);
        let b = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
        assert_eq!(evaluate(&b, Color::White), 0);
        let b = Board::from_fen("8/8/8/8/8/8/8/4K3 w").unwrap();
        assert_eq!(evaluate(&b, Color::White), 900);
    }

    #[test]
    fn test_symmetric() {
        let b = Board::from_fen("1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w").unwrap();
        assert_eq!(evaluate(&b, Color::White), -evaluate(&b, Color::Black));
    }
}
