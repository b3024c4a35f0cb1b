//! # Base types for abchess
//!
//! This is an auxiliary crate for `abchess`, which contains squares, colors, pieces and the
//! packed cell representation used by the board. It was split from the main crate so the
//! plain data types stay free of any move generation or search code.
//!
//! Normally you don't want to use this crate directly. Use `abchess` instead.

pub mod geometry;
pub mod types;
