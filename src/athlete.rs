//! Athlete record and its embedded score book.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    core::{registry::Keyed, scorebook::ScoreBook},
    types::{EntityKind, Gender, Stance},
};

/// Competing skater, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Last name. Identity within a registry.
    pub name: String,
    /// Riding stance.
    pub stance: Stance,
    /// Three-letter nationality code.
    pub nationality: String,
    /// Gender category.
    pub gender: Gender,
    /// Scores recorded per contest.
    #[serde(default)]
    pub scores: ScoreBook,
}

impl Athlete {
    /// Builds an athlete with an empty score book.
    pub fn new(
        name: impl Into<String>,
        stance: Stance,
        nationality: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            stance,
            nationality: nationality.into(),
            gender,
            scores: ScoreBook::default(),
        }
    }
}

impl Keyed for Athlete {
    const KIND: EntityKind = EntityKind::Athlete;

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Stance: {}, Nationality: {}, Gender: {}",
            self.name, self.stance, self.nationality, self.gender
        )
    }
}
