use tracing::{debug, info};

use crate::forms::{Field, FormState};
use crate::navigation::Navigator;
use crate::session::SessionContext;
use crate::ui::form::{complete_submission, submit_outcome, FormController, SubmitOutcome};
use crate::ui::mvi::Reducer;

use super::intent::SignInIntent;
use super::reducer::SignInReducer;
use super::state::SignInState;

pub const SIGN_IN_NOTICE: &str = "Login successful!";

/// Owns the sign-in form for one visit of the screen.
///
/// An accepted submit marks the session and requests the landing view,
/// exactly once. No identity check happens: passing local validation is
/// what "success" means here.
pub struct SignInController<S, N> {
    state: SignInState,
    session: S,
    navigator: N,
}

impl<S: SessionContext, N: Navigator> SignInController<S, N> {
    pub fn new(session: S, navigator: N) -> Self {
        Self {
            state: SignInState::default(),
            session,
            navigator,
        }
    }

    pub fn state(&self) -> &SignInState {
        &self.state
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        debug!(field = %field, "sign-in field changed");
        self.dispatch(SignInIntent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        let before = self.state.form.clone();
        self.dispatch(SignInIntent::Submit);
        let outcome = submit_outcome(&before, &self.state.form);
        match outcome {
            SubmitOutcome::Accepted => {
                info!("sign-in accepted");
                complete_submission(&self.session, &self.navigator);
            }
            SubmitOutcome::Rejected { failures } => {
                let fields: Vec<&str> = self.state.form.errors().fields().map(Field::name).collect();
                debug!(failures, ?fields, "sign-in rejected");
            }
            SubmitOutcome::Ignored => debug!("sign-in already submitted"),
        }
        outcome
    }

    pub fn toggle_secret_visibility(&mut self) {
        self.dispatch(SignInIntent::TogglePasswordVisibility);
    }

    fn dispatch(&mut self, intent: SignInIntent) {
        self.state = SignInReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl<S: SessionContext, N: Navigator> FormController for SignInController<S, N> {
    fn form(&self) -> &FormState {
        &self.state.form
    }

    fn change(&mut self, field: Field, value: String) {
        self.on_field_change(field, value);
    }

    fn submit(&mut self) -> SubmitOutcome {
        self.on_submit()
    }

    fn toggle_secret(&mut self, field: Field) {
        if field == Field::Password {
            self.toggle_secret_visibility();
        }
    }

    fn success_notice(&self) -> &'static str {
        SIGN_IN_NOTICE
    }
}
