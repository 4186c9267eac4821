use anyhow::Result;
use colored::Colorize;

use super::common::{open_tracker, ProjectFields};
use crate::config::TrackerConfig;
use crate::models::Project;

/// Create a project. Unset fields start empty and the stage starts "Not Started".
pub fn execute(config: &TrackerConfig, id: String, fields: ProjectFields) -> Result<()> {
    let mut tracker = open_tracker(config)?;

    let mut draft = Project::new(&id);
    fields.apply_to(&mut draft);

    let existing = tracker.get_project(&draft.id).is_ok();
    let project = tracker.create_project(draft)?;

    println!(
        "{} Created project {} ({}%)",
        "✓".green(),
        project.id.cyan(),
        project.progress_percent()?
    );
    if existing {
        println!(
            "{} Another project already uses PPM number {}; lookups return the first one",
            "⚠".yellow(),
            project.id
        );
    }
    Ok(())
}
