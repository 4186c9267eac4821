//! The operations a front end needs, over one [`ProjectStore`].
//!
//! Front ends never touch the project collection directly: they list visible
//! rows, fetch one project, and route every edit through here so it is
//! validated and persisted before the call returns.

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::fs::ProjectStore;
use crate::links::open_external_link;
use crate::models::{LinkKind, Project};
use crate::view::{visible_rows, DisplayRow};

pub struct Tracker {
    store: ProjectStore,
    browser: Option<String>,
}

impl Tracker {
    /// Load the configured data file.
    pub fn open(config: &TrackerConfig) -> TrackerResult<Self> {
        Ok(Self {
            store: ProjectStore::open(&config.data_file)?,
            browser: config.browser.clone(),
        })
    }

    /// Wrap an already loaded store.
    pub fn with_store(store: ProjectStore) -> Self {
        Self {
            store,
            browser: None,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// List rows matching `query`, sorted by PPM number.
    pub fn list_visible(&self, query: &str) -> TrackerResult<Vec<DisplayRow>> {
        visible_rows(self.store.projects(), query)
    }

    pub fn get_project(&self, id: &str) -> TrackerResult<&Project> {
        self.store.find_by_id(id)
    }

    pub fn create_project(&mut self, fields: Project) -> TrackerResult<Project> {
        self.store.create(fields)
    }

    /// Full-record replace. Returns `false` when no project has `id`.
    pub fn update_project(&mut self, id: &str, fields: Project) -> TrackerResult<bool> {
        self.store.update(id, fields)
    }

    pub fn delete_project(&mut self, id: &str) -> TrackerResult<Option<Project>> {
        self.store.delete(id)
    }

    /// Open one of a project's links in the browser.
    pub fn open_link(&self, id: &str, kind: LinkKind) -> TrackerResult<()> {
        let project = self.store.find_by_id(id)?;
        open_external_link(project.links.get(kind), self.browser.as_deref())
    }
}
