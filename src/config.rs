//! Tour configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    core::tour::Tour,
    persist::{json::JsonSnapshotStore, text::TextFileStore},
    types::DEFAULT_CAPACITY,
};

/// File name used when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "SLS2024.txt";

/// Where the tour lives on disk and how large its registries are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Path of the line-oriented data file.
    pub data_path: PathBuf,
    /// Capacity of each registry.
    pub capacity: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TourConfig {
    /// Empty tour sized by this config.
    pub fn new_tour(&self) -> Tour {
        Tour::with_capacity(self.capacity)
    }

    /// Text store backed by [`TourConfig::data_path`].
    pub fn text_store(&self) -> TextFileStore {
        TextFileStore::new(&self.data_path).with_capacity(self.capacity)
    }

    /// JSON snapshot store at `path`, sized by this config when empty.
    pub fn json_store(&self, path: impl AsRef<Path>) -> JsonSnapshotStore {
        JsonSnapshotStore::new(path).with_capacity(self.capacity)
    }
}
