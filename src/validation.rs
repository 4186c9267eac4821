//! Command-line input validation.
//!
//! The store accepts any identifier; these checks only keep obviously
//! broken input from being typed in.

use anyhow::{bail, Result};

use crate::models::WorkflowStage;

/// Maximum allowed length for a PPM number entered on the command line.
pub const MAX_PPM_NUMBER_LENGTH: usize = 128;

/// Validates a PPM number typed by the user.
///
/// # Examples
///
/// ```
/// use review_tracker::validation::validate_ppm_number;
///
/// assert!(validate_ppm_number("2041").is_ok());
/// assert!(validate_ppm_number("   ").is_err());
/// ```
pub fn validate_ppm_number(id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        bail!("PPM number cannot be empty");
    }

    if id.len() > MAX_PPM_NUMBER_LENGTH {
        bail!(
            "PPM number too long: {} characters (max {})",
            id.len(),
            MAX_PPM_NUMBER_LENGTH
        );
    }

    if id.chars().any(char::is_control) {
        bail!("PPM number '{}' contains control characters", id.escape_debug());
    }

    Ok(())
}

/// Validates a stage name: empty, or exactly one of the catalog names.
pub fn validate_stage(name: &str) -> Result<()> {
    WorkflowStage::parse_optional(name)?;
    Ok(())
}

/// Clap value parser for PPM number arguments.
pub fn clap_ppm_number_validator(s: &str) -> Result<String, String> {
    validate_ppm_number(s).map_err(|e| e.to_string())?;
    Ok(s.trim().to_string())
}

/// Clap value parser for stage arguments.
pub fn clap_stage_validator(s: &str) -> Result<String, String> {
    validate_stage(s).map_err(|e| {
        let names: Vec<_> = WorkflowStage::ALL.iter().map(|st| st.name()).collect();
        format!("{e}. Use one of: {}, or \"\" to clear", names.join(", "))
    })?;
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ppm_number() {
        assert!(validate_ppm_number("12345").is_ok());
        assert!(validate_ppm_number("PPM-2024/17").is_ok());
        assert!(validate_ppm_number("").is_err());
        assert!(validate_ppm_number("a\tb").is_err());
        assert!(validate_ppm_number(&"9".repeat(129)).is_err());
    }

    #[test]
    fn test_clap_ppm_number_validator_trims() {
        assert_eq!(clap_ppm_number_validator(" 88 ").unwrap(), "88");
    }

    #[test]
    fn test_validate_stage() {
        assert!(validate_stage("").is_ok());
        assert!(validate_stage("SPIA Form Sent").is_ok());
        assert!(validate_stage("spia form sent").is_err());
    }

    #[test]
    fn test_clap_stage_validator_lists_catalog() {
        let err = clap_stage_validator("Launched").unwrap_err();
        assert!(err.contains("Launched"));
        assert!(err.contains("Review & Approval"));
    }
}
