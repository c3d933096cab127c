//! Sign-in screen: email and password, validated on submit.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{SignInController, SIGN_IN_NOTICE};
pub use intent::SignInIntent;
pub use reducer::SignInReducer;
pub use state::SignInState;
