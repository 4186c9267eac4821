pub mod atomic;
pub mod project_store;

pub use atomic::write_atomic;
pub use project_store::{load_projects, save_projects, ProjectStore};
