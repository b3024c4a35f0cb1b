//! Computer opponent

use crate::board::{Board, Mark};

use log::debug;

/// Scores the position by searching the whole game tree without pruning
///
/// The score is `1` if the computer wins with perfect play, `-1` if the player does, and `0`
/// for a draw. The computer moves if `maximizing` is `true`.
pub fn minimax(b: &Board, maximizing: bool) -> i32 {
    if b.is_winning(Mark::Computer) {
        return 1;
    }
    if b.is_winning(Mark::Player) {
        return -1;
    }
    if b.is_full() {
        return 0;
    }

    let mark = if maximizing {
        Mark::Computer
    } else {
        Mark::Player
    };
    let scores = b.empty_cells().filter_map(|(row, col)| {
        let mut child = *b;
        child.place(row, col, mark).ok()?;
        Some(minimax(&child, !maximizing))
    });
    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

/// Returns the cell the computer plays, or `None` if the board is full
///
/// Cells are tried in row-major order, and the first one with the best score wins.
pub fn best_move(b: &Board) -> Option<(usize, usize)> {
    let mut best = None;
    let mut best_score = i32::MIN;
    for (row, col) in b.empty_cells() {
        let mut child = *b;
        if child.place(row, col, Mark::Computer).is_err() {
            continue;
        }
        let score = minimax(&child, false);
        if score > best_score {
            best_score = score;
            best = Some((row, col));
        }
    }
    debug!("tic tac toe: score {}, move {:?}", best_score, best);
    best
}
