use crate::forms::{FormState, SIGN_UP_FIELDS};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct SignUpState {
    pub form: FormState,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self {
            form: FormState::new(SIGN_UP_FIELDS),
        }
    }
}

impl UiState for SignUpState {}
