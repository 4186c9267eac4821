use anyhow::Result;
use colored::Colorize;
use std::io;

use super::common::{confirm, open_tracker};
use crate::config::TrackerConfig;

/// Delete the first project with this PPM number, asking first unless `yes`
pub fn execute(config: &TrackerConfig, id: String, yes: bool) -> Result<()> {
    let mut tracker = open_tracker(config)?;

    if !yes {
        let title = &tracker.get_project(&id)?.title;
        let prompt = format!("Delete project {} ({})?", id.trim(), title);
        if !confirm(&prompt, &mut io::stdin().lock())? {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    match tracker.delete_project(&id)? {
        Some(removed) => println!("{} Deleted project {}", "✓".green(), removed.id.cyan()),
        None => println!("{} No project with PPM number '{}'", "ℹ".blue(), id),
    }
    Ok(())
}
