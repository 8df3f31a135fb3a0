//! Score fusion across signals.
//!
//! Scores are added per photo id: a photo two signals agree on outranks one
//! that a single signal likes slightly more. Signals are not normalised
//! against each other, so a signal with a wider score range weighs more.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Photo, PhotoId};

use super::signals::ScoredCandidate;

/// One photo's accumulated score, and its record once hydrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedScore {
    pub id: PhotoId,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

impl FusedScore {
    pub fn new(id: PhotoId, score: f64) -> Self {
        Self {
            id,
            score,
            photo: None,
        }
    }
}

/// Merge candidate lists into one entry per distinct photo id.
///
/// The output is in first-seen order; ranking is a separate step.
pub fn fuse<'a, I>(lists: I) -> Vec<FusedScore>
where
    I: IntoIterator<Item = &'a [ScoredCandidate]>,
{
    let mut positions: HashMap<PhotoId, usize> = HashMap::new();
    let mut fused: Vec<FusedScore> = Vec::new();

    for candidate in lists.into_iter().flatten() {
        match positions.get(&candidate.id) {
            Some(&index) => fused[index].score += candidate.score,
            None => {
                positions.insert(candidate.id, fused.len());
                fused.push(FusedScore::new(candidate.id, candidate.score));
            }
        }
    }

    fused
}
