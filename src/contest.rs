//! Contest stop record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{core::registry::Keyed, types::EntityKind};

/// One stop on the tour, identified by its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contest {
    /// City hosting the stop. Identity within a registry.
    pub location: String,
    /// Contest date as `DD/MM/YYYY`.
    pub date: String,
}

impl Contest {
    /// Builds a contest from already-validated fields.
    pub fn new(location: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            date: date.into(),
        }
    }
}

impl Keyed for Contest {
    const KIND: EntityKind = EntityKind::Contest;

    fn key(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location: {}, Date: {}", self.location, self.date)
    }
}
