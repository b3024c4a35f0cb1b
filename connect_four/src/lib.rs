//! # Connect Four
//!
//! Connect Four board on a 6x7 grid, and a computer opponent which searches it with
//! alpha-beta minimax.
//!
//! # Example
//!
//! ```
//! use connect_four::{Ai, Board, Disc};
//!
//! let mut board = Board::new();
//! board.drop(3, Disc::Player).unwrap();
//!
//! let mut ai = Ai::new(42);
//! let col = ai.best_column(&board).unwrap();
//! board.drop(col, Disc::Computer).unwrap();
//! assert!(!board.is_terminal());
//! ```

pub mod board;
pub mod search;

pub use board::{Board, Disc, DropError, COLUMNS, ROWS};
pub use search::Ai;
