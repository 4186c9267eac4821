//! Command implementations for the `review-tracker` binary.
//!
//! Commands:
//! - `review-tracker list [QUERY]` - List projects matching a search
//! - `review-tracker show <ID>` - Show one project
//! - `review-tracker add <ID> [fields]` - Create a project
//! - `review-tracker edit <ID> [fields]` - Replace a project's fields
//! - `review-tracker delete <ID>` - Delete a project
//! - `review-tracker stages` - Show the workflow catalog
//! - `review-tracker open <ID> <KIND>` - Open a project link

pub mod add;
pub mod common;
pub mod delete;
pub mod edit;
pub mod list;
pub mod open;
pub mod render;
pub mod show;
pub mod stages;

pub use common::ProjectFields;
