use tracing::{debug, info};

use crate::forms::{Field, FormState};
use crate::navigation::Navigator;
use crate::session::SessionContext;
use crate::ui::form::{complete_submission, submit_outcome, FormController, SubmitOutcome};
use crate::ui::mvi::Reducer;

use super::intent::SignUpIntent;
use super::reducer::SignUpReducer;
use super::state::SignUpState;

pub const SIGN_UP_NOTICE: &str = "Account created successfully! Welcome to NEXUS.";

/// Owns the registration form for one visit of the screen.
pub struct SignUpController<S, N> {
    state: SignUpState,
    session: S,
    navigator: N,
}

impl<S: SessionContext, N: Navigator> SignUpController<S, N> {
    pub fn new(session: S, navigator: N) -> Self {
        Self {
            state: SignUpState::default(),
            session,
            navigator,
        }
    }

    pub fn state(&self) -> &SignUpState {
        &self.state
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        debug!(field = %field, "sign-up field changed");
        self.dispatch(SignUpIntent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn on_selection_change(&mut self, field: Field, value: impl Into<String>) {
        debug!(field = %field, "sign-up selection changed");
        self.dispatch(SignUpIntent::SelectionChanged {
            field,
            value: value.into(),
        });
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        let before = self.state.form.clone();
        self.dispatch(SignUpIntent::Submit);
        let outcome = submit_outcome(&before, &self.state.form);
        match outcome {
            SubmitOutcome::Accepted => {
                info!("account created");
                complete_submission(&self.session, &self.navigator);
            }
            SubmitOutcome::Rejected { failures } => {
                let fields: Vec<&str> = self.state.form.errors().fields().map(Field::name).collect();
                debug!(failures, ?fields, "sign-up rejected");
            }
            SubmitOutcome::Ignored => debug!("sign-up already submitted"),
        }
        outcome
    }

    pub fn toggle_secret_visibility(&mut self, field: Field) {
        self.dispatch(SignUpIntent::ToggleSecretVisibility { field });
    }

    fn dispatch(&mut self, intent: SignUpIntent) {
        self.state = SignUpReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl<S: SessionContext, N: Navigator> FormController for SignUpController<S, N> {
    fn form(&self) -> &FormState {
        &self.state.form
    }

    fn change(&mut self, field: Field, value: String) {
        if field.is_selection() {
            self.on_selection_change(field, value);
        } else {
            self.on_field_change(field, value);
        }
    }

    fn submit(&mut self) -> SubmitOutcome {
        self.on_submit()
    }

    fn toggle_secret(&mut self, field: Field) {
        self.toggle_secret_visibility(field);
    }

    fn success_notice(&self) -> &'static str {
        SIGN_UP_NOTICE
    }
}
