//! Integration tests for the project store lifecycle against a real file

use review_tracker::fs::{load_projects, save_projects};
use review_tracker::{Project, ProjectStore, TrackerError};
use std::fs;
use tempfile::TempDir;

fn sample(id: &str, title: &str, contact: &str, stage: &str) -> Project {
    let mut project = Project::new(id);
    project.title = title.to_string();
    project.contact = contact.to_string();
    project.description = format!("{title} security review");
    project.budget_code = format!("BC-{id}");
    project.links.spia = format!("https://spia.example/{id}");
    project.current_stage = stage.to_string();
    project
}

#[test]
fn test_first_run_then_create_persists() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");

    let mut store = ProjectStore::open(&path).expect("Missing file should load as empty");
    assert!(store.is_empty());

    let created = store
        .create(sample("100", "Payments", "Ana Ruiz", "Initial Engagement"))
        .expect("Should create project");

    let reopened = ProjectStore::open(&path).expect("Should reload store");
    assert_eq!(reopened.projects(), &[created.clone()]);
    assert_eq!(reopened.find_by_id("100").unwrap(), &created);
}

#[test]
fn test_save_load_round_trip_is_field_for_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");

    let projects = vec![
        sample("3", "Identity", "Ben Ode", ""),
        sample("1", "Payments", "Ana Ruiz", "Review & Approval"),
        sample("3", "Identity (duplicate)", "Ben Ode", "SPIA Form Completed"),
    ];
    save_projects(&path, &projects).unwrap();

    let loaded = load_projects(&path).unwrap();
    assert_eq!(loaded, projects);

    save_projects(&path, &loaded).unwrap();
    assert_eq!(load_projects(&path).unwrap(), projects);
}

#[test]
fn test_update_and_delete_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    let mut store = ProjectStore::new(&path);

    store.create(sample("1", "One", "a", "")).unwrap();
    store.create(sample("2", "Two", "b", "")).unwrap();

    let mut advanced = store.find_by_id("2").unwrap().clone();
    advanced.current_stage = "Standards Sent".to_string();
    assert!(store.update("2", advanced.clone()).unwrap());
    assert_eq!(load_projects(&path).unwrap()[1], advanced);

    assert!(!store.update("3", sample("3", "Three", "c", "")).unwrap());
    assert_eq!(store.len(), 2);

    assert!(store.delete("1").unwrap().is_some());
    assert!(store.delete("1").unwrap().is_none());

    let remaining = load_projects(&path).unwrap();
    assert_eq!(remaining, vec![advanced]);
}

#[test]
fn test_lookup_miss_is_error_but_mutation_miss_is_not() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ProjectStore::new(temp_dir.path().join("projects.json"));

    assert!(matches!(
        store.find_by_id("missing"),
        Err(TrackerError::NotFound(_))
    ));
    assert!(!store.update("missing", Project::new("missing")).unwrap());
    assert!(store.delete("missing").unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_hand_written_file_with_numeric_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    fs::write(
        &path,
        r#"[
    {
        "ppm_number": 4410,
        "title": "Data lake",
        "contact": "Kim Park",
        "description": "",
        "budget_code": "",
        "links": {"spia": "", "ppm": "", "onenote": ""},
        "current_step": "Proof Submitted"
    },
    {
        "ppm_number": " 77 ",
        "title": "Mobile app",
        "contact": "Lee Ho",
        "description": "",
        "budget_code": "",
        "links": {"spia": "", "ppm": "", "onenote": ""}
    }
]"#,
    )
    .unwrap();

    let mut store = ProjectStore::open(&path).unwrap();
    assert_eq!(store.find_by_id("4410").unwrap().progress_percent().unwrap(), 83);
    assert_eq!(store.find_by_id("77").unwrap().current_stage, "");

    store.save().unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"ppm_number\": \"4410\""));
    assert!(content.contains("\"current_step\": \"\""));
}

#[test]
fn test_corrupt_file_is_reported_not_recovered() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    fs::write(&path, "[{\"ppm_number\": \"1\",").unwrap();

    let err = ProjectStore::open(&path).unwrap_err();
    assert!(matches!(err, TrackerError::CorruptData { .. }));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[{\"ppm_number\": \"1\","
    );
}
