//! Recommendation builder
//!
//! Derives the immediate action list and the confirmation-test matrix from a
//! case and its ranked causes.

mod matrix;
mod moves;

pub use matrix::confirmation_matrix;
pub use moves::{first_moves, FourthMove, MAX_FIRST_MOVES};
