//! Computer opponent

use crate::board::{Board, Disc, Window, COLUMNS};

use log::debug;
use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Score of a position won by the computer
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Score of a position won by the player
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

pub const DEFAULT_DEPTH: u8 = 4;

/// Bonus for each disc in the center column
pub const CENTER_BONUS: i64 = 6;

fn score_window(w: &Window, disc: Disc) -> i64 {
    let own = w.iter().filter(|&&cell| cell == Some(disc)).count();
    let opp = w.iter().filter(|&&cell| cell == Some(disc.inv())).count();
    let empty = w.iter().filter(|cell| cell.is_none()).count();

    let mut score = match (own, empty) {
        (4, _) => 100,
        (3, 1) => 10,
        (2, 2) => 5,
        _ => 0,
    };
    if opp == 3 && empty == 1 {
        score -= 80;
    }
    score
}

/// Heuristic score of a non-terminal position from the point of view of `disc`
pub fn score_position(b: &Board, disc: Disc) -> i64 {
    let center = b.column(COLUMNS / 2).map_or(0, |cells| {
        cells.iter().filter(|&&cell| cell == Some(disc)).count()
    }) as i64;
    center * CENTER_BONUS + b.windows().map(|w| score_window(&w, disc)).sum::<i64>()
}

/// Alpha-beta player for [`Disc::Computer`]
///
/// At each node, the best column starts as a random valid column, so the search depends on
/// the random generator. The generator is seeded explicitly, which makes the results
/// reproducible.
pub struct Ai {
    rng: Xoshiro256PlusPlus,
    depth: u8,
    nodes: u64,
}

impl Ai {
    /// Creates a player with default depth, with its random generator seeded by `seed`
    pub fn new(seed: u64) -> Ai {
        Ai {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            depth: DEFAULT_DEPTH,
            nodes: 0,
        }
    }

    pub fn with_depth(self, depth: u8) -> Ai {
        Ai { depth, ..self }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn random_choice(&mut self, cols: &[usize]) -> usize {
        cols[(self.rng.next_u64() % cols.len() as u64) as usize]
    }

    /// Searches `depth` plies ahead and returns the best column with its score
    ///
    /// The computer maximizes the score, and the player minimizes it. The column is `None` if
    /// the node is terminal or `depth` is zero.
    pub fn search(
        &mut self,
        b: &Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.nodes += 1;
        if b.is_winning(Disc::Computer) {
            return (None, WIN_SCORE);
        }
        if b.is_winning(Disc::Player) {
            return (None, LOSS_SCORE);
        }
        let valid = b.valid_locations();
        if valid.is_empty() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, score_position(b, Disc::Computer));
        }

        let disc = if maximizing {
            Disc::Computer
        } else {
            Disc::Player
        };
        let mut best_col = self.random_choice(&valid);
        let mut value = if maximizing { i64::MIN } else { i64::MAX };
        for &col in &valid {
            let mut child = *b;
            if child.drop(col, disc).is_err() {
                continue;
            }
            let (_, score) = self.search(&child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                if score > value {
                    value = score;
                    best_col = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_col = col;
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }
        (Some(best_col), value)
    }

    /// Returns the column the computer plays, or `None` if the game is over
    pub fn best_column(&mut self, b: &Board) -> Option<usize> {
        let start = self.nodes;
        let (col, score) = self.search(b, self.depth, i64::MIN, i64::MAX, true);
        debug!(
            "connect four: depth {}, nodes {}, score {}, column {:?}",
            self.depth,
            self.nodes - start,
            score,
            col
        );
        col
    }
}
