//! Whole-state persistence: the line-oriented text format and JSON snapshots.

/// Versioned JSON snapshot store.
pub mod json;
/// Line-oriented text codec and file store.
pub mod text;

use crate::core::{error::TourError, tour::Tour};

pub use text::{DecodeIssue, IssueKind, Loaded};

/// Failure to read or write a backing store.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Snapshot contents violate a registry rule.
    #[error("snapshot rejected: {0}")]
    Tour(#[from] TourError),
    /// Snapshot was written by an unknown format version.
    #[error("unsupported format version {0}")]
    UnsupportedFormat(u16),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Whole-state backing store: load once at start, save once at the end.
pub trait TourStore {
    /// Reads the full tour. A missing backing file yields an empty tour.
    fn load(&self) -> PersistResult<Loaded>;

    /// Overwrites the backing store with `tour`.
    fn save(&mut self, tour: &Tour) -> PersistResult<()>;

    /// Tour handed out when nothing could be loaded.
    fn empty_tour(&self) -> Tour {
        Tour::new()
    }

    /// Like [`TourStore::load`], but an I/O or format failure degrades to an
    /// empty tour after logging it.
    fn load_or_empty(&self) -> Loaded {
        match self.load() {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(error = %err, "load failed, starting with an empty tour");
                Loaded {
                    tour: self.empty_tour(),
                    issues: Vec::new(),
                }
            }
        }
    }
}
