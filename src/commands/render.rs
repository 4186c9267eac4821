//! Terminal formatting for projects and list rows.

use colored::{ColoredString, Colorize};

use crate::models::constants::NOT_STARTED_LABEL;
use crate::models::{Project, WorkflowStage};
use crate::utils::{progress_bar, truncate};
use crate::view::DisplayRow;

const ID_WIDTH: usize = 12;
const TITLE_WIDTH: usize = 40;
const CONTACT_WIDTH: usize = 28;
const BAR_WIDTH: usize = 20;

fn progress_colored(percent: u8, text: String) -> ColoredString {
    match percent {
        0 => text.dimmed(),
        100 => text.green(),
        _ => text.yellow(),
    }
}

/// The project list as a table: PPM number, title, contact, progress.
pub fn rows_table(rows: &[DisplayRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:ID_WIDTH$} {:TITLE_WIDTH$} {:CONTACT_WIDTH$} {}\n",
        "PPM NUMBER".bold(),
        "TITLE".bold(),
        "POINT OF CONTACT".bold(),
        "PROGRESS".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "─".repeat(ID_WIDTH + TITLE_WIDTH + CONTACT_WIDTH + 30)
    ));

    for row in rows {
        out.push_str(&format!(
            "{:ID_WIDTH$} {:TITLE_WIDTH$} {:CONTACT_WIDTH$} {}\n",
            truncate(&row.id, ID_WIDTH).cyan(),
            truncate(&row.title, TITLE_WIDTH),
            truncate(&row.contact, CONTACT_WIDTH),
            progress_colored(row.progress, row.progress_label.clone())
        ));
    }

    out.push('\n');
    out.push_str(&format!("{} project(s)\n", rows.len()));
    out
}

/// Every field of one project.
pub fn project_detail(project: &Project, progress: u8) -> String {
    let not_provided = || "(not provided)".dimmed().to_string();
    let or_empty = |value: &str| {
        if value.is_empty() {
            not_provided()
        } else {
            value.to_string()
        }
    };

    let stage = if project.current_stage.is_empty() {
        NOT_STARTED_LABEL.dimmed().to_string()
    } else {
        project.current_stage.clone()
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        project.id.cyan().bold(),
        or_empty(&project.title).bold()
    ));
    out.push('\n');
    out.push_str(&format!("{:18} {}\n", "Point of Contact:", or_empty(&project.contact)));
    out.push_str(&format!("{:18} {}\n", "Description:", or_empty(&project.description)));
    out.push_str(&format!("{:18} {}\n", "Budget Code:", or_empty(&project.budget_code)));
    out.push('\n');
    out.push_str(&format!("{}\n", "Links".bold()));
    out.push_str(&format!("  {:16} {}\n", "SPIA Form:", or_empty(&project.links.spia)));
    out.push_str(&format!("  {:16} {}\n", "PPM Page:", or_empty(&project.links.ppm)));
    out.push_str(&format!("  {:16} {}\n", "OneNote:", or_empty(&project.links.onenote)));
    out.push('\n');
    out.push_str(&format!("{}\n", "Progress".bold()));
    out.push_str(&format!("  {:16} {}\n", "Current Step:", stage));
    out.push_str(&format!(
        "  {:16} {} {}\n",
        "Completion:",
        progress_bar(progress, BAR_WIDTH),
        progress_colored(progress, format!("{progress}%"))
    ));
    out
}

/// The workflow catalog with each stage's completion percentage.
pub fn stage_catalog() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:4} {:22} {}\n",
        "#".bold(),
        "STAGE".bold(),
        "PROGRESS".bold()
    ));
    out.push_str(&format!("{}\n", "─".repeat(38)));
    for stage in WorkflowStage::ALL {
        out.push_str(&format!(
            "{:4} {:22} {:>3}%\n",
            stage.position(),
            stage.name(),
            stage.progress_percent()
        ));
    }
    out
}
