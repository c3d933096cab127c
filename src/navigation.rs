//! Screen routes and the navigation seam used by the form controllers.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A screen the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    SignIn,
    SignUp,
    AlumniDirectory,
    Jobs,
    Events,
    Campaigns,
}

/// Browse screens in tab order.
pub const BROWSE_ROUTES: &[Route] = &[
    Route::AlumniDirectory,
    Route::Jobs,
    Route::Events,
    Route::Campaigns,
];

/// Where a successful sign-in or sign-up lands.
pub const AUTHENTICATED_LANDING: Route = Route::AlumniDirectory;

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::AlumniDirectory => "Alumni Directory",
            Route::Jobs => "Jobs",
            Route::Events => "Events",
            Route::Campaigns => "Campaigns",
        }
    }

    /// Browse screens are only reachable with an authenticated session.
    pub fn requires_session(self) -> bool {
        BROWSE_ROUTES.contains(&self)
    }

    pub fn is_form(self) -> bool {
        matches!(self, Route::SignIn | Route::SignUp)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One-way transition to another screen.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Navigation requests waiting for the shell to act on them.
#[derive(Debug, Clone, Default)]
pub struct NavigationQueue {
    pending: Arc<Mutex<VecDeque<Route>>>,
}

impl NavigationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued route, oldest first.
    pub fn drain(&self) -> Vec<Route> {
        self.pending.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Navigator for NavigationQueue {
    fn navigate(&self, route: Route) {
        self.pending.lock().push_back(route);
    }
}
