use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};

use crate::config::TrackerConfig;
use crate::models::Project;
use crate::tracker::Tracker;
use crate::validation::clap_stage_validator;

/// Editable project fields shared by `add` and `edit`.
///
/// Unset flags leave the corresponding field as it is.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectFields {
    /// Project title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Point of contact
    #[arg(short, long)]
    pub contact: Option<String>,

    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Budget code
    #[arg(short, long)]
    pub budget_code: Option<String>,

    /// SPIA form link
    #[arg(long)]
    pub spia: Option<String>,

    /// PPM page link
    #[arg(long = "ppm-link")]
    pub ppm_link: Option<String>,

    /// OneNote link
    #[arg(long)]
    pub onenote: Option<String>,

    /// Current workflow stage (exact name, or "" for not started)
    #[arg(short, long, value_parser = clap_stage_validator)]
    pub stage: Option<String>,
}

impl ProjectFields {
    /// Overwrite every field that was given on the command line.
    pub fn apply_to(self, project: &mut Project) {
        let targets = [
            (self.title, &mut project.title),
            (self.contact, &mut project.contact),
            (self.description, &mut project.description),
            (self.budget_code, &mut project.budget_code),
            (self.spia, &mut project.links.spia),
            (self.ppm_link, &mut project.links.ppm),
            (self.onenote, &mut project.links.onenote),
            (self.stage, &mut project.current_stage),
        ];

        for (value, field) in targets {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Load the tracker for the configured data file.
pub fn open_tracker(config: &TrackerConfig) -> Result<Tracker> {
    Tracker::open(config).with_context(|| {
        format!(
            "Failed to load projects from {}",
            config.data_file.display()
        )
    })
}

/// Ask a yes/no question on stdout, reading the answer from `input`.
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{prompt} (y/n): ");
    io::stdout().flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_apply_to_only_overwrites_given_fields() {
        let mut project = Project {
            title: "Old title".to_string(),
            contact: "Old contact".to_string(),
            ..Project::new("1")
        };
        project.links.spia = "https://spia.example/1".to_string();

        let fields = ProjectFields {
            title: Some("New title".to_string()),
            onenote: Some("onenote:///1".to_string()),
            stage: Some("SPIA Form Sent".to_string()),
            ..ProjectFields::default()
        };
        fields.apply_to(&mut project);

        assert_eq!(project.title, "New title");
        assert_eq!(project.contact, "Old contact");
        assert_eq!(project.links.spia, "https://spia.example/1");
        assert_eq!(project.links.onenote, "onenote:///1");
        assert_eq!(project.current_stage, "SPIA Form Sent");
    }

    #[test]
    fn test_apply_to_can_clear_a_field() {
        let mut project = Project::new("1");
        project.current_stage = "Standards Sent".to_string();

        ProjectFields {
            stage: Some(String::new()),
            ..ProjectFields::default()
        }
        .apply_to(&mut project);

        assert_eq!(project.current_stage, "");
    }

    #[test]
    fn test_confirm() {
        assert!(confirm("Delete?", &mut Cursor::new("y\n")).unwrap());
        assert!(confirm("Delete?", &mut Cursor::new(" Y \n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("yes\n")).unwrap());
        assert!(!confirm("Delete?", &mut Cursor::new("")).unwrap());
    }
}
