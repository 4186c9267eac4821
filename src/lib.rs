//! Security review tracker.
//!
//! Tracks review projects through the fixed six-stage approval workflow,
//! persisted as a JSON array in a single local file.

pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod links;
pub mod models;
pub mod search;
pub mod tracker;
pub mod utils;
pub mod validation;
pub mod view;

pub use error::{TrackerError, TrackerResult};
pub use fs::ProjectStore;
pub use models::{progress_percent, LinkKind, Project, ProjectLinks, WorkflowStage};
pub use tracker::Tracker;
pub use view::{visible_rows, DisplayRow};
