//! Read-only sample records behind the browse screens.

mod loader;
mod types;

pub use loader::CatalogError;
pub use types::{AlumniProfile, Campaign, Catalog, Event, EventStatus, JobPosting};
