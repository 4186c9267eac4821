//! JSON-backed project collection.
//!
//! The store owns the in-memory list of projects and is the only thing that
//! mutates it. Every mutation rewrites the whole backing file before
//! returning. Identifiers are not unique: lookups, updates and deletes act on
//! the first record whose normalized identifier matches, in file order.

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::atomic::write_atomic;
use crate::error::{TrackerError, TrackerResult};
use crate::models::constants::JSON_INDENT;
use crate::models::{normalize_id, Project};

/// Read every project from `path`.
///
/// A missing file is a first run and yields an empty list. A file that
/// cannot be read, is not a JSON array of well-formed projects, or assigns a
/// stage outside the catalog is `CorruptData`; nothing is partially recovered.
pub fn load_projects(path: &Path) -> TrackerResult<Vec<Project>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no project file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(TrackerError::corrupt(path, e.to_string())),
    };

    let projects: Vec<Project> =
        serde_json::from_slice(&bytes).map_err(|e| TrackerError::corrupt(path, e.to_string()))?;

    for (index, project) in projects.iter().enumerate() {
        if let Err(TrackerError::UnknownStage(stage)) = project.validate() {
            return Err(TrackerError::corrupt(
                path,
                format!(
                    "record {index} (ppm_number '{}') has unknown current_step '{stage}'",
                    project.id
                ),
            ));
        }
    }

    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            warn!(ppm_number = %project.id, "duplicate ppm_number in project file");
        }
    }

    debug!(path = %path.display(), count = projects.len(), "loaded projects");
    Ok(projects)
}

/// Write `projects` to `path`, replacing the previous contents atomically.
pub fn save_projects(path: &Path, projects: &[Project]) -> TrackerResult<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    projects
        .serialize(&mut serializer)
        .map_err(io::Error::from)?;

    write_atomic(path, &buf)?;
    debug!(path = %path.display(), count = projects.len(), "saved projects");
    Ok(())
}

/// In-memory project collection bound to one backing file.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// An empty store for `path`. Nothing is read until [`ProjectStore::load`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            projects: Vec::new(),
        }
    }

    /// Create a store for `path` and load it.
    pub fn open<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the backing file's contents.
    ///
    /// On error the previous in-memory collection is kept.
    pub fn load(&mut self) -> TrackerResult<&[Project]> {
        self.projects = load_projects(&self.path)?;
        Ok(&self.projects)
    }

    /// Persist the full in-memory collection.
    pub fn save(&self) -> TrackerResult<()> {
        save_projects(&self.path, &self.projects)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All projects in file order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Append a new project and persist.
    ///
    /// The identifier is trimmed but not checked for uniqueness. A stage
    /// outside the catalog is rejected before anything changes.
    pub fn create(&mut self, mut draft: Project) -> TrackerResult<Project> {
        draft.validate()?;
        draft.id = normalize_id(&draft.id);

        if self.position(&draft.id).is_some() {
            warn!(ppm_number = %draft.id, "creating project with an existing ppm_number");
        }

        self.projects.push(draft.clone());
        self.save()?;
        info!(ppm_number = %draft.id, "created project");
        Ok(draft)
    }

    /// Replace the first project matching `current_id` with `updated`, in place.
    ///
    /// A miss is not an error: nothing changes, nothing is written, and
    /// `Ok(false)` is returned.
    pub fn update(&mut self, current_id: &str, mut updated: Project) -> TrackerResult<bool> {
        updated.validate()?;
        updated.id = normalize_id(&updated.id);

        let Some(index) = self.position(current_id) else {
            warn!(ppm_number = %normalize_id(current_id), "update matched no project");
            return Ok(false);
        };

        self.projects[index] = updated;
        self.save()?;
        info!(
            ppm_number = %normalize_id(current_id),
            new_ppm_number = %self.projects[index].id,
            "updated project"
        );
        Ok(true)
    }

    /// Remove the first project matching `id` and persist.
    ///
    /// A miss is not an error: nothing is written and `Ok(None)` is returned.
    pub fn delete(&mut self, id: &str) -> TrackerResult<Option<Project>> {
        let Some(index) = self.position(id) else {
            warn!(ppm_number = %normalize_id(id), "delete matched no project");
            return Ok(None);
        };

        let removed = self.projects.remove(index);
        self.save()?;
        info!(ppm_number = %removed.id, "deleted project");
        Ok(Some(removed))
    }

    /// First project matching `id`, or `NotFound`.
    pub fn find_by_id(&self, id: &str) -> TrackerResult<&Project> {
        self.position(id)
            .map(|index| &self.projects[index])
            .ok_or_else(|| TrackerError::NotFound(normalize_id(id)))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.has_id(id))
    }
}
