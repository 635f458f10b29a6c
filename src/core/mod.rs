//! In-memory tour collections and the context object that owns them.

/// Error taxonomy shared by the collections.
pub mod error;
/// Fixed-capacity ordered registries.
pub mod registry;
/// Per-athlete contest scores.
pub mod scorebook;
/// Tour context object and snapshots.
pub mod tour;
