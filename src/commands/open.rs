use anyhow::{Context, Result};
use colored::Colorize;

use super::common::open_tracker;
use crate::config::TrackerConfig;
use crate::models::LinkKind;

/// Open a project's SPIA, PPM, or OneNote link
pub fn execute(config: &TrackerConfig, id: String, kind: String) -> Result<()> {
    let kind: LinkKind = kind.parse()?;
    let tracker = open_tracker(config)?;

    tracker
        .open_link(&id, kind)
        .with_context(|| format!("Failed to open {kind} link for project {}", id.trim()))?;

    println!("{} Opened {} link for {}", "✓".green(), kind, id.trim().cyan());
    Ok(())
}
