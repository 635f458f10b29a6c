//! Contest, athlete and score bookkeeping for a small skateboarding tour,
//! persisted to a line-oriented text file between runs.
//!
//! # Examples
//!
//! In-memory usage with [`core::tour::Tour`]:
//! ```
//! use slstour::{
//!     athlete::Athlete,
//!     contest::Contest,
//!     core::tour::Tour,
//!     types::{Gender, Stance},
//! };
//!
//! let mut tour = Tour::new();
//! tour.add_contest(Contest::new("Paris", "01/06/2025")).expect("contest");
//! tour.add_athlete(Athlete::new("Smith", Stance::Regular, "USA", Gender::Male))
//!     .expect("athlete");
//! tour.set_scores("Smith", "Paris", vec![9.5, 8.0, 7.25]).expect("scores");
//!
//! let paris = tour.contest(1).expect("position 1");
//! assert_eq!(tour.athlete(1).unwrap().scores.total_score(paris), 24.75);
//! ```
//!
//! Loading and saving through the text format:
//! ```no_run
//! use slstour::{config::TourConfig, persist::TourStore};
//!
//! let config = TourConfig::default();
//! let mut store = config.text_store();
//! let loaded = store.load_or_empty();
//! for issue in &loaded.issues {
//!     eprintln!("line {} skipped: {}", issue.line_no, issue.kind);
//! }
//! store.save(&loaded.tour).expect("save");
//! ```
#![warn(missing_docs)]

/// Athlete record.
pub mod athlete;
/// Data file location and registry sizing.
pub mod config;
/// Contest record.
pub mod contest;
/// Registries, score books and the tour context.
pub mod core;
/// Text and JSON backing stores.
pub mod persist;
/// Standings derived from recorded scores.
pub mod standings;
/// Shared primitive types and enums.
pub mod types;
