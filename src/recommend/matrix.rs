//! Confirmation matrix

use crate::library::{CauseLibrary, TestCard};
use crate::scoring::{ScoredCause, TOP_CAUSES};

/// Primary confirmation test of each top-ranked cause, in rank order.
pub fn confirmation_matrix(ranked: &[ScoredCause]) -> Vec<TestCard> {
    ranked
        .iter()
        .take(TOP_CAUSES)
        .map(|s| *CauseLibrary::get(s.cause).primary_test())
        .collect()
}
