use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::contest::Contest;

/// Score sequences recorded for one athlete, keyed by contest location.
///
/// The book stores whatever it is given. Length and range checks belong to
/// the caller collecting the scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBook {
    by_contest: HashMap<String, Vec<f64>>,
}

impl ScoreBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any sequence previously recorded for `contest`.
    pub fn set_scores(&mut self, contest: &Contest, scores: impl Into<Vec<f64>>) {
        self.set_scores_for(&contest.location, scores);
    }

    /// Location-keyed form of [`ScoreBook::set_scores`].
    pub fn set_scores_for(&mut self, location: &str, scores: impl Into<Vec<f64>>) {
        self.by_contest.insert(location.to_string(), scores.into());
    }

    /// Scores recorded for `contest`, or an empty slice when none were.
    pub fn get_scores(&self, contest: &Contest) -> &[f64] {
        self.scores_for(&contest.location)
    }

    /// Location-keyed form of [`ScoreBook::get_scores`].
    pub fn scores_for(&self, location: &str) -> &[f64] {
        self.by_contest
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Plain sum of every score recorded for `contest`; 0 when none were.
    pub fn total_score(&self, contest: &Contest) -> f64 {
        self.total_for(&contest.location)
    }

    /// Location-keyed form of [`ScoreBook::total_score`].
    pub fn total_for(&self, location: &str) -> f64 {
        self.scores_for(location).iter().sum()
    }

    /// True when at least one contest has a non-empty sequence.
    pub fn has_any_scores(&self) -> bool {
        self.by_contest.values().any(|s| !s.is_empty())
    }

    /// Drops the sequence for `location`, returning it if one existed.
    pub fn clear_contest(&mut self, location: &str) -> Option<Vec<f64>> {
        self.by_contest.remove(location)
    }

    /// Number of contests with a recorded sequence.
    pub fn len(&self) -> usize {
        self.by_contest.len()
    }

    /// True when no contest has a recorded sequence.
    pub fn is_empty(&self) -> bool {
        self.by_contest.is_empty()
    }

    /// Iterates `(location, scores)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.by_contest
            .iter()
            .map(|(loc, scores)| (loc.as_str(), scores.as_slice()))
    }
}
