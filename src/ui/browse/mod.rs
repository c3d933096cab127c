//! Read-only catalog screens: alumni directory, jobs, events, campaigns.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::BrowseState;
pub use view::{format_amount, render_browse};
