//! Depth-limited alpha-beta search

use crate::attack;
use crate::board::Board;
use crate::eval;
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::Color;

use std::fmt::{self, Display};
use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

/// Score bound which is never reached by any position
pub const INF: i32 = 1_000_000;

/// Base score of a checkmate
///
/// A mate found with `d` plies of depth remaining is scored as `MATE_SCORE + d`, so quicker
/// mates are preferred over slower ones.
pub const MATE_SCORE: i32 = 100_000;

/// Result of the search
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the point of view of the searching side
    pub score: i32,
    /// Best move found, or `None` if the search stopped at the root
    pub best: Option<Move>,
}

/// Minimax searcher with optional alpha-beta pruning
///
/// The searcher plays for the side `ai`: this side maximizes the score, and its opponent
/// minimizes it. The board passed to [`Searcher::search()`] is used as a scratch board; every
/// move made during the search is reverted, so the board is unchanged afterwards.
pub struct Searcher {
    ai: Color,
    prune: bool,
    nodes: u64,
    root_depth: u8,
}

impl Searcher {
    /// Creates an alpha-beta searcher for side `ai`
    pub fn new(ai: Color) -> Searcher {
        Searcher {
            ai,
            prune: true,
            nodes: 0,
            root_depth: 0,
        }
    }

    /// Creates a searcher which visits the full game tree without pruning
    ///
    /// It returns exactly the same results as the one created by [`Searcher::new()`], but is
    /// much slower. Useful mostly to verify the pruning.
    pub fn without_pruning(ai: Color) -> Searcher {
        Searcher {
            prune: false,
            ..Searcher::new(ai)
        }
    }

    #[inline]
    pub fn ai(&self) -> Color {
        self.ai
    }

    /// Returns the number of nodes visited since the searcher was created
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `depth` plies ahead from the position on `b`, with [`Searcher::ai()`] to move
    pub fn search(&mut self, b: &mut Board, depth: u8) -> SearchResult {
        self.root_depth = depth;
        let start = self.nodes;
        let res = self.node(b, depth, -INF, INF, true);
        debug!(
            "search for {}: depth {}, nodes {}, score {}, best {}",
            self.ai,
            depth,
            self.nodes - start,
            res.score,
            res.best.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        );
        res
    }

    fn node(
        &mut self,
        b: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;
        if depth == 0 {
            return SearchResult {
                score: eval::evaluate(b, self.ai),
                best: None,
            };
        }

        let side = if maximizing { self.ai } else { self.ai.inv() };
        let mut moves = MoveList::new();
        movegen::gen_legal_in_place(b, side, &mut moves);
        if moves.is_empty() {
            let score = if attack::in_check(b, side) {
                let mate = MATE_SCORE + i32::from(depth);
                if maximizing {
                    -mate
                } else {
                    mate
                }
            } else {
                0
            };
            return SearchResult { score, best: None };
        }

        let mut best = SearchResult {
            score: if maximizing { -INF } else { INF },
            best: None,
        };
        for &mv in moves.iter() {
            let u = b.apply(mv);
            let score = self.node(b, depth - 1, alpha, beta, !maximizing).score;
            b.revert(mv, u);

            if depth == self.root_depth {
                trace!("root move {}: score {}", mv, score);
            }

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best: Some(mv),
                    };
                }
                beta = beta.min(score);
            }
            if self.prune && alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Searches the best move for side `c` using alpha-beta pruning
pub fn alpha_beta(b: &mut Board, c: Color, depth: u8) -> SearchResult {
    Searcher::new(c).search(b, depth)
}

/// Searches the best move for side `c` visiting the full game tree
pub fn minimax(b: &mut Board, c: Color, depth: u8) -> SearchResult {
    Searcher::without_pruning(c).search(b, depth)
}

/// Returns the move the engine plays for side `c`, searching `depth` plies ahead
///
/// If the search yields no move (i.e. `depth` is zero), the first legal move is returned.
/// Returns `None` only if side `c` has no legal moves. The board is left unchanged.
pub fn best_move(b: &mut Board, c: Color, depth: u8) -> Option<Move> {
    let res = alpha_beta(b, c, depth);
    res.best
        .or_else(|| movegen::all_legal_moves(b, c).first().copied())
}

/// Error parsing [`Difficulty`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum DifficultyParseError {
    #[error("unknown difficulty {0:?}")]
    Unknown(String),
}

/// Engine strength, expressed as the search depth
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the search depth in plies
    pub const fn depth(&self) -> u8 {
        match *self {
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(DifficultyParseError::Unknown(s.to_string())),
        }
    }
}
