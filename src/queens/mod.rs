#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for enumerating N-Queens placements.

/// The `solver` module contains the backtracking search and board rendering.
pub mod solver;
