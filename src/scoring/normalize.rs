//! Score normalization and ranking

use std::cmp::Ordering;

use serde::Serialize;

use crate::library::CauseId;

/// Raw score of one cause after all rules and package multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawScore {
    pub cause: CauseId,
    pub score: f64,
}

/// A cause with its percentage share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCause {
    pub cause: CauseId,
    /// Share of 100. In a full distribution the denominator is every cause's
    /// score; after `rank_top` it is only the selected causes' mass, so a
    /// ranked share is larger than the same cause's distribution share.
    pub share: f64,
}

/// Convert raw scores to a percentage distribution.
///
/// Negative scores are clamped to zero. If nothing positive remains, every
/// cause receives an equal share. Output keeps input order.
pub fn normalize_to_percent(scores: &[RawScore]) -> Vec<ScoredCause> {
    if scores.is_empty() {
        return Vec::new();
    }

    let clamped: Vec<f64> = scores.iter().map(|s| s.score.max(0.0)).collect();
    let total: f64 = clamped.iter().sum();

    if total <= 0.0 {
        let equal = 100.0 / scores.len() as f64;
        return scores
            .iter()
            .map(|s| ScoredCause {
                cause: s.cause,
                share: equal,
            })
            .collect();
    }

    scores
        .iter()
        .zip(clamped)
        .map(|(s, score)| ScoredCause {
            cause: s.cause,
            share: score / total * 100.0,
        })
        .collect()
}

/// Pick the `n` largest shares, descending.
///
/// The sort is stable, so equal shares keep library order. The selected
/// shares are re-expressed as parts of their own total, so they sum to 100.
pub fn rank_top(distribution: &[ScoredCause], n: usize) -> Vec<ScoredCause> {
    let mut ranked = distribution.to_vec();
    ranked.sort_by(|a, b| b.share.partial_cmp(&a.share).unwrap_or(Ordering::Equal));
    ranked.truncate(n);

    let mass: f64 = ranked.iter().map(|s| s.share).sum();
    if mass > 0.0 {
        for entry in &mut ranked {
            entry.share = entry.share / mass * 100.0;
        }
    }
    ranked
}
