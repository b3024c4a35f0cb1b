use crate::types::Color;

/// Row delta of a single pawn step
///
/// White pawns move toward row 0, black pawns toward row 7.
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub const fn pawn_home_row(c: Color) -> usize {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

pub const fn promote_row(c: Color) -> usize {
    match c {
        Color::White => 0,
        Color::Black => 7,
    }
}

pub const fn back_row(c: Color) -> usize {
    match c {
        Color::White => 7,
        Color::Black => 0,
    }
}

pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const LINE_DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const DIAG_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
