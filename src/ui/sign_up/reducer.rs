use crate::ui::mvi::Reducer;

use super::intent::SignUpIntent;
use super::state::SignUpState;

pub struct SignUpReducer;

impl Reducer for SignUpReducer {
    type State = SignUpState;
    type Intent = SignUpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let form = state.form;
        let form = match intent {
            SignUpIntent::FieldChanged { field, value }
            | SignUpIntent::SelectionChanged { field, value } => form.apply_change(field, value),
            SignUpIntent::Submit => form.apply_submit(),
            SignUpIntent::ToggleSecretVisibility { field } => form.apply_toggle_secret(field),
        };
        SignUpState { form }
    }
}
