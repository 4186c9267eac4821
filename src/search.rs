//! Case-insensitive substring search over the list columns.

use crate::models::Project;

/// True if `query` appears, ignoring case, in the project's PPM number,
/// title, or contact. An empty query matches every project.
pub fn matches(project: &Project, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    [&project.id, &project.title, &project.contact]
        .iter()
        .any(|field| field.to_lowercase().contains(&query_lower))
}

/// Projects matching `query`, in their original order.
pub fn filter<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    projects.iter().filter(|p| matches(p, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, contact: &str) -> Project {
        Project {
            title: title.to_string(),
            contact: contact.to_string(),
            description: "Contains the word firewall".to_string(),
            budget_code: "NET-9".to_string(),
            ..Project::new(id)
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches(&Project::default(), ""));
        assert!(matches(&project("1", "Anything", "Anyone"), ""));
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let p = project("PPM-2041", "Vendor Portal", "Riley Chen");
        assert!(matches(&p, "2041"));
        assert!(matches(&p, "portal"));
        assert!(matches(&p, "RILEY"));
    }

    #[test]
    fn test_does_not_search_other_fields() {
        let p = project("1", "Vendor Portal", "Riley Chen");
        assert!(!matches(&p, "firewall"));
        assert!(!matches(&p, "NET-9"));
    }

    #[test]
    fn test_query_is_one_literal_substring() {
        let p = project("1", "Vendor Portal", "Riley Chen");
        assert!(matches(&p, "dor por"));
        assert!(!matches(&p, "vendor chen"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let projects = vec![
            project("3", "Alpha api", "x"),
            project("1", "Beta", "y"),
            project("2", "Gamma API", "z"),
        ];
        let ids: Vec<_> = filter(&projects, "api").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "2"]);
    }
}
