mod common;

use common::temp_catalog;
use nexus::catalog::{Catalog, CatalogError, EventStatus};
use std::path::Path;

/// The embedded sample catalog parses with every collection populated.
#[test]
fn test_builtin_catalog_loads() {
    let catalog = Catalog::builtin().expect("builtin catalog parses");
    assert_eq!(catalog.alumni.len(), 6);
    assert_eq!(catalog.jobs.len(), 8);
    assert_eq!(catalog.events.len(), 7);
    assert_eq!(catalog.campaigns.len(), 7);
    assert_eq!(
        catalog.summary(),
        "6 alumni, 8 jobs, 7 events, 7 campaigns"
    );
}

/// Renamed JSON keys land on the right fields.
#[test]
fn test_builtin_records_map_renamed_keys() {
    let catalog = Catalog::builtin().unwrap();
    let first = &catalog.alumni[0];
    assert_eq!(first.name, "Aarav Patel");
    assert_eq!(first.match_score, 83);
    assert_eq!(first.github.as_deref(), Some("github.com/aarav-patel"));
    assert_eq!(catalog.jobs[0].employment_type, "Full-time");
    assert_eq!(catalog.events[0].status, EventStatus::Open);
    assert_eq!(catalog.campaigns[0].progress, 75);
}

/// Directory search is case-insensitive and covers skills.
#[test]
fn test_search_alumni_matches_skills_case_insensitively() {
    let catalog = Catalog::builtin().unwrap();
    let hits = catalog.search_alumni("PYTHON");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Priya Sharma");
}

/// A blank query lists everyone; an unknown one lists nobody.
#[test]
fn test_search_alumni_blank_and_unknown() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.search_alumni("   ").len(), catalog.alumni.len());
    assert!(catalog.search_alumni("no such person zzz").is_empty());
}

/// Search covers company names.
#[test]
fn test_search_alumni_by_company() {
    let catalog = Catalog::builtin().unwrap();
    let hits = catalog.search_alumni("swiggy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Anjali Mehta");
}

/// A catalog file replaces the built-in data.
#[test]
fn test_load_from_file() {
    let (_dir, path) = temp_catalog(
        r#"{
            "alumni": [],
            "jobs": [],
            "events": [],
            "campaigns": [{
                "id": 1, "name": "Library", "description": "Books",
                "category": "Education", "supporters": 3,
                "raised": 1500, "goal": 3000, "progress": 50,
                "end_date": "2025-12-31"
            }]
        }"#,
    );
    let catalog = Catalog::load(Some(path.as_path())).unwrap();
    assert!(catalog.alumni.is_empty());
    assert_eq!(catalog.campaigns[0].goal, 3000);
}

/// Missing catalog files report a read error with the path.
#[test]
fn test_missing_file_is_read_error() {
    let err = Catalog::load(Some(Path::new("/nonexistent/nexus/catalog.json"))).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/nexus/catalog.json"));
}

/// Malformed JSON reports a parse error.
#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = temp_catalog("{ \"alumni\": [");
    let err = Catalog::load_from(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}
