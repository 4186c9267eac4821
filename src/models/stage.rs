use crate::error::{TrackerError, TrackerResult};
use std::str::FromStr;

/// One step of the fixed security review workflow.
///
/// The catalog is ordered; a project's progress is derived solely from the
/// position of its current stage:
/// - `InitialEngagement` (1 of 6)
/// - `SpiaFormSent` (2 of 6)
/// - `SpiaFormCompleted` (3 of 6)
/// - `StandardsSent` (4 of 6)
/// - `ProofSubmitted` (5 of 6)
/// - `ReviewAndApproval` (6 of 6, complete)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WorkflowStage {
    InitialEngagement,
    SpiaFormSent,
    SpiaFormCompleted,
    StandardsSent,
    ProofSubmitted,
    ReviewAndApproval,
}

impl WorkflowStage {
    /// Every stage in workflow order.
    pub const ALL: [WorkflowStage; 6] = [
        WorkflowStage::InitialEngagement,
        WorkflowStage::SpiaFormSent,
        WorkflowStage::SpiaFormCompleted,
        WorkflowStage::StandardsSent,
        WorkflowStage::ProofSubmitted,
        WorkflowStage::ReviewAndApproval,
    ];

    /// Human-readable name, exactly as persisted in `current_step`.
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowStage::InitialEngagement => "Initial Engagement",
            WorkflowStage::SpiaFormSent => "SPIA Form Sent",
            WorkflowStage::SpiaFormCompleted => "SPIA Form Completed",
            WorkflowStage::StandardsSent => "Standards Sent",
            WorkflowStage::ProofSubmitted => "Proof Submitted",
            WorkflowStage::ReviewAndApproval => "Review & Approval",
        }
    }

    /// 1-based position in the catalog.
    pub fn position(&self) -> usize {
        *self as usize + 1
    }

    /// Completion percentage for this stage, floored.
    pub fn progress_percent(&self) -> u8 {
        (self.position() * 100 / Self::ALL.len()) as u8
    }

    /// Resolve an optional stage name. Empty means "not started".
    pub fn parse_optional(name: &str) -> TrackerResult<Option<WorkflowStage>> {
        if name.is_empty() {
            return Ok(None);
        }
        name.parse().map(Some)
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkflowStage {
    type Err = TrackerError;

    /// Exact, case-sensitive match against the catalog names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|stage| stage.name() == s)
            .copied()
            .ok_or_else(|| TrackerError::UnknownStage(s.to_string()))
    }
}

/// Completion percentage for a persisted stage name.
///
/// Empty means "not started" and yields 0. Any other name must be one of the
/// catalog entries, otherwise `UnknownStage` is returned.
pub fn progress_percent(stage_name: &str) -> TrackerResult<u8> {
    Ok(WorkflowStage::parse_optional(stage_name)?.map_or(0, |stage| stage.progress_percent()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_catalog() {
        let expected = [16, 33, 50, 66, 83, 100];
        for (stage, pct) in WorkflowStage::ALL.iter().zip(expected) {
            assert_eq!(progress_percent(stage.name()).unwrap(), pct, "{stage}");
        }
    }

    #[test]
    fn test_progress_percent_not_started() {
        assert_eq!(progress_percent("").unwrap(), 0);
    }

    #[test]
    fn test_whitespace_is_not_a_stage() {
        assert!(progress_percent("   ").is_err());
        assert!(progress_percent(" Initial Engagement").is_err());
    }

    #[test]
    fn test_progress_percent_unknown_stage() {
        let err = progress_percent("Nonexistent Stage").unwrap_err();
        assert!(matches!(err, TrackerError::UnknownStage(ref s) if s == "Nonexistent Stage"));
    }

    #[test]
    fn test_stage_names_are_case_sensitive() {
        assert!("initial engagement".parse::<WorkflowStage>().is_err());
        assert_eq!(
            "Review & Approval".parse::<WorkflowStage>().unwrap(),
            WorkflowStage::ReviewAndApproval
        );
    }

    #[test]
    fn test_positions() {
        assert_eq!(WorkflowStage::InitialEngagement.position(), 1);
        assert_eq!(WorkflowStage::StandardsSent.position(), 4);
        assert_eq!(WorkflowStage::ReviewAndApproval.position(), 6);
    }

    #[test]
    fn test_display_matches_name() {
        for stage in WorkflowStage::ALL {
            assert_eq!(stage.to_string(), stage.name());
        }
    }
}
