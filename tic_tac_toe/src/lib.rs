//! # Tic Tac Toe
//!
//! Tic Tac Toe board on a 3x3 grid, and a computer opponent which plays perfectly by searching
//! the whole game tree.
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::{best_move, Board, Mark};
//!
//! let mut board = Board::new();
//! board.place(1, 1, Mark::Player).unwrap();
//!
//! let (row, col) = best_move(&board).unwrap();
//! board.place(row, col, Mark::Computer).unwrap();
//! assert_eq!(board.winner(), None);
//! ```

pub mod board;
pub mod search;

pub use board::{Board, Mark, PlaceError, SIZE};
pub use search::{best_move, minimax};
