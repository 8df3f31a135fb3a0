//! Ordering and truncation of fused scores.

use std::cmp::Ordering;

use super::fusion::FusedScore;
use super::signals::ScoredCandidate;
use crate::models::PhotoId;

/// Score descending, photo id ascending on ties.
///
/// `0.0` and `-0.0` are equal scores. NaN ranks below every number.
pub fn by_score_then_id(a: (PhotoId, f64), b: (PhotoId, f64)) -> Ordering {
    let by_score = match (a.1.is_nan(), b.1.is_nan()) {
        (false, false) => b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then_with(|| a.0.cmp(&b.0))
}

/// Rank order for fused scores.
pub fn compare(a: &FusedScore, b: &FusedScore) -> Ordering {
    by_score_then_id((a.id, a.score), (b.id, b.score))
}

/// Rank order for a single signal's candidates.
pub fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    by_score_then_id((a.id, a.score), (b.id, b.score))
}

/// Sort `fused` and keep at most `limit` entries.
pub fn rank(mut fused: Vec<FusedScore>, limit: usize) -> Vec<FusedScore> {
    fused.sort_unstable_by(compare);
    fused.truncate(limit);
    fused
}
