//! NEXUS alumni network client.
//!
//! Sign-in and account-creation forms backed by a shared validation engine,
//! plus read-only browsing of a static alumni catalog, in a terminal UI.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod forms;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod ui;
