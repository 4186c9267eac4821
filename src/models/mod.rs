pub mod constants;
pub mod project;
pub mod stage;

pub use project::{normalize_id, LinkKind, Project, ProjectLinks};
pub use stage::{progress_percent, WorkflowStage};
