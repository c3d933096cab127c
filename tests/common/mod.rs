//! Shared test utilities: recording collaborators and temp config files.

#![allow(dead_code, unused_imports)]

use nexus::navigation::{Navigator, Route};
use nexus::session::SessionContext;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// One observed collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    MarkAuthenticated,
    Navigate(Route),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// Session and navigator spy sharing one ordered call log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: CallLog,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn session_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::MarkAuthenticated))
            .count()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Navigate(route) => Some(route),
                Call::MarkAuthenticated => None,
            })
            .collect()
    }
}

impl SessionContext for Recorder {
    fn mark_authenticated(&self) {
        self.calls.lock().push(Call::MarkAuthenticated);
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: Route) {
        self.calls.lock().push(Call::Navigate(route));
    }
}

/// Writes `contents` to `config.toml` in a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Writes `contents` to `catalog.json` in a fresh temp dir.
pub fn temp_catalog(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, contents).expect("Failed to write catalog");
    (temp_dir, catalog_path)
}

/// Valid registration values.
pub fn valid_sign_up() -> Vec<(nexus::forms::Field, &'static str)> {
    use nexus::forms::Field;
    vec![
        (Field::DisplayName, "Priya Sharma"),
        (Field::Email, "priya@alumni.edu"),
        (Field::Password, "s3cret!"),
        (Field::ConfirmPassword, "s3cret!"),
        (Field::GraduationYear, "2015"),
        (Field::Degree, "B.Tech Computer Science"),
        (Field::Company, "Infosys"),
    ]
}
