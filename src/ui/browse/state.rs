use crate::navigation::{Route, AUTHENTICATED_LANDING};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    pub route: Route,
    pub selected: usize,
    /// Directory search text. Empty everywhere else.
    pub query: String,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            route: AUTHENTICATED_LANDING,
            selected: 0,
            query: String::new(),
        }
    }
}

impl UiState for BrowseState {}

impl BrowseState {
    pub fn is_searchable(&self) -> bool {
        self.route == Route::AlumniDirectory
    }
}
