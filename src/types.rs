//! Shared primitive types and tour-related enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 1-based position inside a registry.
pub type Position = usize;

/// Maximum number of entries a registry holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 8;

/// Which kind of entity a registry stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Contest stop, keyed by location.
    Contest,
    /// Athlete, keyed by name.
    Athlete,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contest => f.write_str("contest"),
            Self::Athlete => f.write_str("athlete"),
        }
    }
}

/// Skateboarding stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Left foot forward.
    Regular,
    /// Right foot forward.
    Goofy,
}

/// Athlete gender category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's field.
    Male,
    /// Women's field.
    Female,
}

/// Token that did not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {field} `{value}`")]
pub struct ParseTokenError {
    /// Field being parsed.
    pub field: &'static str,
    /// Offending text.
    pub value: String,
}

impl Stance {
    /// Lowercase token used in the persisted file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Goofy => "goofy",
        }
    }
}

impl Gender {
    /// Lowercase token used in the persisted file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Stance {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "goofy" => Ok(Self::Goofy),
            _ => Err(ParseTokenError {
                field: "stance",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ParseTokenError {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
