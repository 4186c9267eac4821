use anyhow::Result;

use super::render;

/// Print the workflow catalog
pub fn execute() -> Result<()> {
    print!("{}", render::stage_catalog());
    Ok(())
}
