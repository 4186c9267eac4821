//! Display-ready rows for the project list.

use serde::Serialize;

use crate::error::TrackerResult;
use crate::models::constants::NOT_STARTED_LABEL;
use crate::models::Project;
use crate::search;

/// One row of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub title: String,
    pub contact: String,
    pub progress: u8,
    /// `"<pct>% (<stage>)"`, e.g. `"16% (Initial Engagement)"`
    pub progress_label: String,
}

impl DisplayRow {
    pub fn from_project(project: &Project) -> TrackerResult<Self> {
        let stage = project.stage()?;
        let progress = stage.map_or(0, |s| s.progress_percent());
        let stage_name = stage.map_or(NOT_STARTED_LABEL, |s| s.name());

        Ok(Self {
            id: project.id.clone(),
            title: project.title.clone(),
            contact: project.contact.clone(),
            progress,
            progress_label: format!("{progress}% ({stage_name})"),
        })
    }
}

/// Projects matching `query`, sorted by PPM number as plain strings.
///
/// The sort is stable, so projects sharing an identifier keep their stored
/// order. "10" sorts before "2".
pub fn visible_rows(projects: &[Project], query: &str) -> TrackerResult<Vec<DisplayRow>> {
    let mut visible = search::filter(projects, query);
    visible.sort_by(|a, b| a.id.cmp(&b.id));
    visible.into_iter().map(DisplayRow::from_project).collect()
}
