//! Terminal presentation shell: screens, input mapping and rendering.

pub mod app;
pub mod browse;
pub mod events;
pub mod footer;
pub mod form;
pub mod form_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sign_in;
pub mod sign_up;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
