use anyhow::Result;
use colored::Colorize;

use super::common::{open_tracker, ProjectFields};
use crate::config::TrackerConfig;

/// Edit a project: the stored record is overlaid with the given flags and
/// written back as a full replacement.
pub fn execute(
    config: &TrackerConfig,
    id: String,
    new_id: Option<String>,
    fields: ProjectFields,
) -> Result<()> {
    let mut tracker = open_tracker(config)?;

    let mut updated = tracker.get_project(&id)?.clone();
    if let Some(new_id) = new_id {
        updated.id = new_id;
    }
    fields.apply_to(&mut updated);

    let progress = updated.progress_percent()?;
    let new_id = updated.id.clone();

    if tracker.update_project(&id, updated)? {
        println!(
            "{} Updated project {} ({}%)",
            "✓".green(),
            new_id.cyan(),
            progress
        );
    } else {
        println!("{} No project with PPM number '{}'", "ℹ".blue(), id);
    }
    Ok(())
}
