//! Opening project links in the user's browser.

use std::process::Command;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

/// Open `url` with `browser` if given, otherwise with the platform opener.
///
/// `browser` may carry arguments (`"firefox --new-window"`); the URL is
/// appended last. Empty URLs are "not provided" and never launched.
pub fn open_external_link(url: &str, browser: Option<&str>) -> TrackerResult<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(TrackerError::Link("link not provided".to_string()));
    }

    let mut command = link_command(url, browser)?;
    debug!(?command, "opening link");

    let program = command.get_program().to_string_lossy().to_string();
    let status = command
        .status()
        .map_err(|e| TrackerError::Link(format!("failed to launch {program}: {e}")))?;

    if !status.success() {
        return Err(TrackerError::Link(format!("{program} exited with {status}")));
    }
    Ok(())
}

/// The opener invocation with `url` as its last, unsplit argument.
fn link_command(url: &str, browser: Option<&str>) -> TrackerResult<Command> {
    let mut command = opener_command(browser)?;
    command.arg(url);
    Ok(command)
}

fn opener_command(browser: Option<&str>) -> TrackerResult<Command> {
    match browser.map(str::trim).filter(|b| !b.is_empty()) {
        Some(browser) => {
            let mut parts = browser.split_whitespace();
            let program = parts
                .next()
                .ok_or_else(|| TrackerError::Link("empty browser command".to_string()))?;
            if which::which(program).is_err() {
                return Err(TrackerError::Link(format!(
                    "browser '{program}' not found on PATH"
                )));
            }
            let mut command = Command::new(program);
            command.args(parts);
            Ok(command)
        }
        None => platform_opener(),
    }
}

#[cfg(target_os = "macos")]
fn platform_opener() -> TrackerResult<Command> {
    Ok(Command::new("open"))
}

#[cfg(target_os = "windows")]
fn platform_opener() -> TrackerResult<Command> {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler");
    Ok(command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener() -> TrackerResult<Command> {
    if which::which("xdg-open").is_err() {
        return Err(TrackerError::Link(
            "xdg-open not found. Install xdg-utils or set REVIEW_TRACKER_BROWSER".to_string(),
        ));
    }
    Ok(Command::new("xdg-open"))
}
