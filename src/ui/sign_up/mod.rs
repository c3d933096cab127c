//! Account creation screen: credentials plus alumni profile attributes.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{SignUpController, SIGN_UP_NOTICE};
pub use intent::SignUpIntent;
pub use reducer::SignUpReducer;
pub use state::SignUpState;
