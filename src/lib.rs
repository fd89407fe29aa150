#![deny(missing_docs)]
//! This crate enumerates all distinct placements of N non-attacking queens on an N×N chessboard.


/// The `queens` module implements the N-Queens solver, a row-by-row backtracking search that
/// collects every complete non-attacking placement.
pub mod queens;
