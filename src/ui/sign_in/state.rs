use crate::forms::{FormState, SIGN_IN_FIELDS};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct SignInState {
    pub form: FormState,
}

impl Default for SignInState {
    fn default() -> Self {
        Self {
            form: FormState::new(SIGN_IN_FIELDS),
        }
    }
}

impl UiState for SignInState {}
