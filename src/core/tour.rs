use serde::{Deserialize, Serialize};

use crate::{
    athlete::Athlete,
    contest::Contest,
    core::{
        error::TourError,
        registry::{AthleteRegistry, ContestRegistry},
    },
    standings::{self, ContestStanding},
    types::{DEFAULT_CAPACITY, EntityKind, Position},
};

/// Serializable copy of a whole tour, registries in position order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSnapshot {
    /// Per-registry capacity.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Contests in position order.
    pub contests: Vec<Contest>,
    /// Athletes in position order, score books included.
    pub athletes: Vec<Athlete>,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Single owner of the contest and athlete registries.
///
/// Cross-collection rules live here: scores may only be attached when both
/// sides exist, and removing a contest drops every score recorded for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    contests: ContestRegistry,
    athletes: AthleteRegistry,
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

impl Tour {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contests: ContestRegistry::with_capacity(capacity),
            athletes: AthleteRegistry::with_capacity(capacity),
        }
    }

    /// Rebuilds a tour, re-checking capacity, key uniqueness and that every
    /// score book only names contests present in the snapshot.
    pub fn from_snapshot(snapshot: TourSnapshot) -> Result<Self, TourError> {
        let mut tour = Self::with_capacity(snapshot.capacity);

        for contest in snapshot.contests {
            tour.contests.add(contest)?;
        }

        for athlete in snapshot.athletes {
            if let Some((location, _)) = athlete
                .scores
                .iter()
                .find(|(location, _)| tour.contests.find(location).is_none())
            {
                return Err(TourError::NotFound {
                    kind: EntityKind::Contest,
                    key: location.to_string(),
                });
            }
            tour.athletes.add(athlete)?;
        }

        Ok(tour)
    }

    pub fn export_snapshot(&self) -> TourSnapshot {
        TourSnapshot {
            capacity: self.contests.capacity(),
            contests: self.contests.iter().cloned().collect(),
            athletes: self.athletes.iter().cloned().collect(),
        }
    }

    pub fn add_contest(&mut self, contest: Contest) -> Result<Position, TourError> {
        self.contests.add(contest)
    }

    pub fn add_athlete(&mut self, athlete: Athlete) -> Result<Position, TourError> {
        self.athletes.add(athlete)
    }

    pub fn contest(&self, position: Position) -> Result<&Contest, TourError> {
        self.contests.get(position)
    }

    pub fn athlete(&self, position: Position) -> Result<&Athlete, TourError> {
        self.athletes.get(position)
    }

    /// Direct access to an athlete, e.g. to edit its score book.
    pub fn athlete_mut(&mut self, position: Position) -> Result<&mut Athlete, TourError> {
        self.athletes.get_mut(position)
    }

    pub fn contests(&self) -> &ContestRegistry {
        &self.contests
    }

    pub fn athletes(&self) -> &AthleteRegistry {
        &self.athletes
    }

    /// Overwrites the scores `athlete` holds for the contest at `location`.
    pub fn set_scores(
        &mut self,
        athlete: &str,
        location: &str,
        scores: impl Into<Vec<f64>>,
    ) -> Result<(), TourError> {
        let contest = self
            .contests
            .find_by_location(location)
            .ok_or_else(|| TourError::NotFound {
                kind: EntityKind::Contest,
                key: location.to_string(),
            })?;
        let skater = self
            .athletes
            .find_mut(athlete)
            .ok_or_else(|| TourError::NotFound {
                kind: EntityKind::Athlete,
                key: athlete.to_string(),
            })?;

        let scores = scores.into();
        tracing::debug!(
            athlete = %skater.name,
            contest = %contest.location,
            count = scores.len(),
            "recording scores"
        );
        skater.scores.set_scores(contest, scores);
        Ok(())
    }

    /// Removes the contest at `position` and every score recorded for it.
    pub fn remove_contest(&mut self, position: Position) -> Result<Contest, TourError> {
        let removed = self.contests.remove(position)?;
        let mut dropped = 0usize;
        for athlete in self.athletes.iter_mut() {
            if athlete.scores.clear_contest(&removed.location).is_some() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(
                contest = %removed.location,
                dropped,
                "dropped scores of removed contest"
            );
        }
        Ok(removed)
    }

    /// Removes the athlete at `position` along with its score book.
    pub fn remove_athlete(&mut self, position: Position) -> Result<Athlete, TourError> {
        self.athletes.remove(position)
    }

    /// Empties both registries.
    pub fn clear(&mut self) {
        self.contests.clear();
        self.athletes.clear();
    }

    /// True when any athlete holds a non-empty score sequence for a
    /// registered contest. Entries written straight into a score book for
    /// an unknown location are not counted; they are never saved either.
    pub fn has_any_scores(&self) -> bool {
        self.athletes.iter().any(|a| {
            self.contests
                .iter()
                .any(|c| !a.scores.get_scores(c).is_empty())
        })
    }

    /// Standings for every contest, see [`crate::standings`].
    pub fn standings(&self) -> Vec<ContestStanding<'_>> {
        standings::standings(self)
    }
}
