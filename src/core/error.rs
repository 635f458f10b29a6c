use crate::types::{EntityKind, Position};

/// Recoverable failures raised by registry and tour operations.
///
/// None of these leave a collection partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourError {
    /// The registry already holds its maximum number of entries.
    #[error("{kind} registry is full ({capacity} entries)")]
    CapacityExceeded {
        /// Registry that rejected the add.
        kind: EntityKind,
        /// Configured capacity.
        capacity: usize,
    },
    /// A position outside `1..=count` was requested.
    #[error("{kind} position {position} is out of range (count {count})")]
    OutOfRange {
        /// Registry addressed.
        kind: EntityKind,
        /// Requested 1-based position.
        position: Position,
        /// Entries present at the time.
        count: usize,
    },
    /// No entry carries the requested key.
    #[error("{kind} `{key}` not found")]
    NotFound {
        /// Registry searched.
        kind: EntityKind,
        /// Location or name looked up.
        key: String,
    },
    /// An entry with the same key is already registered.
    #[error("{kind} `{key}` already exists")]
    Duplicate {
        /// Registry that rejected the add.
        kind: EntityKind,
        /// Conflicting location or name.
        key: String,
    },
}
