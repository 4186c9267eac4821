use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::stage::WorkflowStage;
use crate::error::TrackerResult;

/// One security review engagement, as persisted in the projects file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// PPM number. Trimmed; numeric values in the file load as strings.
    #[serde(rename = "ppm_number", deserialize_with = "deserialize_ppm_number")]
    pub id: String,
    pub title: String,
    /// Point of contact
    pub contact: String,
    pub description: String,
    pub budget_code: String,
    pub links: ProjectLinks,
    /// Catalog stage name, or empty when the review has not started.
    #[serde(
        rename = "current_step",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub current_stage: String,
    /// Keys this model does not know, written back unchanged on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The three reference links kept for every project. Empty means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub spia: String,
    pub ppm: String,
    pub onenote: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which of the three project links to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Spia,
    Ppm,
    OneNote,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Spia => write!(f, "spia"),
            LinkKind::Ppm => write!(f, "ppm"),
            LinkKind::OneNote => write!(f, "onenote"),
        }
    }
}

impl std::str::FromStr for LinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spia" => Ok(LinkKind::Spia),
            "ppm" => Ok(LinkKind::Ppm),
            "onenote" => Ok(LinkKind::OneNote),
            _ => anyhow::bail!("Invalid link kind: {s}. Use: spia, ppm, onenote"),
        }
    }
}

impl ProjectLinks {
    pub fn get(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::Spia => &self.spia,
            LinkKind::Ppm => &self.ppm,
            LinkKind::OneNote => &self.onenote,
        }
    }
}

impl Project {
    /// A blank project with only its identifier set, as the "new project" form starts.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: normalize_id(id.as_ref()),
            ..Self::default()
        }
    }

    /// True if this project's identifier equals `id` once both are normalized.
    pub fn has_id(&self, id: &str) -> bool {
        normalize_id(&self.id) == normalize_id(id)
    }

    /// The current stage, `None` when not started.
    pub fn stage(&self) -> TrackerResult<Option<WorkflowStage>> {
        WorkflowStage::parse_optional(&self.current_stage)
    }

    pub fn progress_percent(&self) -> TrackerResult<u8> {
        Ok(self.stage()?.map_or(0, |stage| stage.progress_percent()))
    }

    /// Reject records whose stage is outside the catalog.
    pub fn validate(&self) -> TrackerResult<()> {
        self.stage().map(|_| ())
    }
}

/// Canonical form of a PPM number: surrounding whitespace removed.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_string()
}

fn deserialize_ppm_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(normalize_id(&s)),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "ppm_number must be a string or number, found {other}"
        ))),
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
