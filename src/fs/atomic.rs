//! Whole-file replacement that readers never observe half-written.
//!
//! Content is staged in a temp file next to the target, synced, then renamed
//! over the target. A crash leaves either the old file or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` atomically.
///
/// The staging file is created in the target's directory so the final rename
/// never crosses a filesystem. Existing permissions are carried over; a new
/// file gets the usual 0644 on unix instead of the temp file's 0600.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(parent)?;
    staging.write_all(content)?;
    staging.as_file().sync_all()?;

    match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(staging.path(), existing.permissions())?,
        #[cfg(unix)]
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o644))?;
        }
        Err(_) => {}
    }

    staging.persist(path).map_err(|e| e.error)?;
    Ok(())
}
