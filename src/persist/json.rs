use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    core::tour::{Tour, TourSnapshot},
    types::DEFAULT_CAPACITY,
};

use super::{Loaded, PersistError, PersistResult, TourStore};

/// Version number for serialized [`SnapshotEnvelope`] payloads.
pub const SNAPSHOT_FORMAT_VERSION: u16 = 1;

/// Versioned wrapper for stable on-disk snapshot decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    /// Payload format version.
    pub format_version: u16,
    /// Wrapped tour state.
    pub snapshot: TourSnapshot,
}

impl SnapshotEnvelope {
    /// Wraps `snapshot` using [`SNAPSHOT_FORMAT_VERSION`].
    pub fn new(snapshot: TourSnapshot) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            snapshot,
        }
    }
}

/// Whole-tour JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
    capacity: usize,
}

impl JsonSnapshotStore {
    /// Store at `path`. Nothing is touched until load or save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the registry capacity of the tour handed out when no snapshot
    /// exists. A stored snapshot carries its own capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TourStore for JsonSnapshotStore {
    fn load(&self) -> PersistResult<Loaded> {
        if !self.path.exists() {
            return Ok(Loaded {
                tour: self.empty_tour(),
                issues: Vec::new(),
            });
        }

        let payload = std::fs::read(&self.path)?;
        let env: SnapshotEnvelope = serde_json::from_slice(&payload)?;
        if env.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(PersistError::UnsupportedFormat(env.format_version));
        }

        Ok(Loaded {
            tour: Tour::from_snapshot(env.snapshot)?,
            issues: Vec::new(),
        })
    }

    fn save(&mut self, tour: &Tour) -> PersistResult<()> {
        let env = SnapshotEnvelope::new(tour.export_snapshot());
        let payload = serde_json::to_vec_pretty(&env)?;
        std::fs::write(&self.path, payload)?;
        tracing::info!(path = %self.path.display(), "wrote tour snapshot");
        Ok(())
    }

    fn empty_tour(&self) -> Tour {
        Tour::with_capacity(self.capacity)
    }
}
