/// Backing file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "projects.json";

/// Config file looked up in the working directory before the user config dir.
pub const LOCAL_CONFIG_FILE: &str = "review-tracker.toml";

/// Label shown for projects without a current stage.
pub const NOT_STARTED_LABEL: &str = "Not Started";

/// Indentation used for the persisted JSON array.
pub const JSON_INDENT: &[u8] = b"    ";
