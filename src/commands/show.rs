use anyhow::Result;

use super::common::open_tracker;
use super::render;
use crate::config::TrackerConfig;

/// Show every field of one project
pub fn execute(config: &TrackerConfig, id: String, json: bool) -> Result<()> {
    let tracker = open_tracker(config)?;
    let project = tracker.get_project(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    print!("{}", render::project_detail(project, project.progress_percent()?));
    Ok(())
}
