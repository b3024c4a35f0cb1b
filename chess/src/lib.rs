//! # abchess
//!
//! Small chess engine core: legal move generation which never leaves the own king in check,
//! check and mate detection, a static evaluator and a depth-limited alpha-beta search.
//!
//! The board is a plain 8x8 grid of cells. Moves are made and taken back in place, so the
//! search runs on a single board without copying it on each node.
//!
//! # Example
//!
//! ```
//! use abchess::{best_move, try_move, Color, Game, Square};
//! use std::str::FromStr;
//!
//! let mut board = abchess::new_game();
//! let (accepted, status) = try_move(
//!     &mut board,
//!     Square::from_str("e2").unwrap(),
//!     Square::from_str("e4").unwrap(),
//! );
//! assert!(accepted);
//! assert_eq!(status.turn, Color::Black);
//!
//! let reply = best_move(&mut board, Color::Black, 2).unwrap();
//! assert_eq!(board.get(reply.src()).color(), Some(Color::Black));
//!
//! let mut game = Game::new_initial();
//! game.push_list("f2f3 e7e5 g2g4 d8h4").unwrap();
//! assert_eq!(game.status().winner, Some(Color::Black));
//! ```

pub mod attack;
pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod search;

pub use abchess_base::{geometry, types};

pub use board::Board;
pub use game::{new_game, try_move, Game, GameStatus, MoveError};
pub use movegen::{all_legal_moves, legal_moves, MoveList, SquareList};
pub use moves::{Move, Undo};
pub use search::{best_move, Difficulty};
pub use types::{Cell, Color, Outcome, Piece, Square};
