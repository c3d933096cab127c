use crate::forms::Field;
use crate::ui::mvi::Reducer;

use super::intent::SignInIntent;
use super::state::SignInState;

/// Pure transitions of the sign-in form.
///
/// Session and navigation effects of an accepted submit are performed by
/// [`SignInController`](super::SignInController).
pub struct SignInReducer;

impl Reducer for SignInReducer {
    type State = SignInState;
    type Intent = SignInIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let form = state.form;
        let form = match intent {
            SignInIntent::FieldChanged { field, value } => form.apply_change(field, value),
            SignInIntent::Submit => form.apply_submit(),
            SignInIntent::TogglePasswordVisibility => form.apply_toggle_secret(Field::Password),
        };
        SignInState { form }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FailureKind, FormPhase};

    fn change(state: SignInState, field: Field, value: &str) -> SignInState {
        SignInReducer::reduce(
            state,
            SignInIntent::FieldChanged {
                field,
                value: value.to_string(),
            },
        )
    }

    #[test]
    fn default_is_editing_with_empty_fields() {
        let state = SignInState::default();
        assert_eq!(state.form.phase(), FormPhase::Editing);
        assert_eq!(state.form.value(Field::Email), "");
        assert_eq!(state.form.value(Field::Password), "");
        assert!(state.form.errors().is_empty());
    }

    #[test]
    fn submit_empty_form_records_required_errors() {
        let state = SignInReducer::reduce(SignInState::default(), SignInIntent::Submit);
        assert_eq!(state.form.phase(), FormPhase::Editing);
        assert_eq!(state.form.errors().kind(Field::Email), Some(FailureKind::Required));
        assert_eq!(
            state.form.errors().kind(Field::Password),
            Some(FailureKind::Required)
        );
    }

    #[test]
    fn valid_submit_reaches_submitted() {
        let state = change(SignInState::default(), Field::Email, "ada@example.org");
        let state = change(state, Field::Password, "lovelace");
        let state = SignInReducer::reduce(state, SignInIntent::Submit);
        assert!(state.form.is_submitted());
        assert!(state.form.errors().is_empty());
    }

    #[test]
    fn toggle_only_touches_visibility() {
        let state = SignInReducer::reduce(SignInState::default(), SignInIntent::Submit);
        let errors = state.form.errors().clone();
        let state = SignInReducer::reduce(state, SignInIntent::TogglePasswordVisibility);
        assert!(state.form.is_secret_visible(Field::Password));
        assert_eq!(state.form.errors(), &errors);
        let state = SignInReducer::reduce(state, SignInIntent::TogglePasswordVisibility);
        assert!(!state.form.is_secret_visible(Field::Password));
    }

    #[test]
    fn fields_outside_layout_are_ignored() {
        let state = change(SignInState::default(), Field::Company, "Acme");
        assert_eq!(state, SignInState::default());
    }
}
