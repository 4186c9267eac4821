use anyhow::Result;
use colored::Colorize;

use super::common::open_tracker;
use super::render;
use crate::config::TrackerConfig;

/// List projects whose PPM number, title, or contact contains `query`
pub fn execute(config: &TrackerConfig, query: Option<String>, json: bool) -> Result<()> {
    let tracker = open_tracker(config)?;
    let query = query.unwrap_or_default();
    let rows = tracker.list_visible(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        if query.is_empty() {
            println!("{} No projects yet. Add one with 'review-tracker add <ID>'", "ℹ".blue());
        } else {
            println!("{} No projects match '{}'", "ℹ".blue(), query);
        }
        return Ok(());
    }

    print!("{}", render::rows_table(&rows));
    Ok(())
}
