//! Per-contest standings derived from athletes' score books.

use crate::{contest::Contest, core::tour::Tour};

/// One athlete's line in a contest's standings.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingEntry<'a> {
    /// Athlete name.
    pub name: &'a str,
    /// Plain sum of the athlete's scores for the contest.
    pub total: f64,
    /// True when the athlete has any score recorded for the contest.
    pub scored: bool,
}

/// Standings for one contest, entries in athlete registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestStanding<'a> {
    /// Contest the standings describe.
    pub contest: &'a Contest,
    /// One entry per registered athlete.
    pub entries: Vec<StandingEntry<'a>>,
}

impl<'a> ContestStanding<'a> {
    /// Highest total in the contest; 0 when nobody scored.
    pub fn high_score(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.total)
            .fold(0.0, f64::max)
    }

    /// Athlete holding the highest total. Ties go to the earlier position.
    pub fn leader(&self) -> Option<&StandingEntry<'a>> {
        let mut best: Option<&StandingEntry<'a>> = None;
        for entry in self.entries.iter().filter(|e| e.scored) {
            if best.is_none_or(|b| entry.total > b.total) {
                best = Some(entry);
            }
        }
        best
    }

    /// Entries sorted by descending total, stable for equal totals.
    pub fn ranked(&self) -> Vec<&StandingEntry<'a>> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
        ranked
    }
}

/// Standings for `contest` across every athlete in `tour`.
pub fn contest_standing<'a>(tour: &'a Tour, contest: &'a Contest) -> ContestStanding<'a> {
    let entries = tour
        .athletes()
        .iter()
        .map(|athlete| {
            let scores = athlete.scores.get_scores(contest);
            StandingEntry {
                name: &athlete.name,
                total: scores.iter().sum(),
                scored: !scores.is_empty(),
            }
        })
        .collect();

    ContestStanding { contest, entries }
}

/// Standings for every contest in registry order.
pub fn standings(tour: &Tour) -> Vec<ContestStanding<'_>> {
    tour.contests()
        .iter()
        .map(|contest| contest_standing(tour, contest))
        .collect()
}
