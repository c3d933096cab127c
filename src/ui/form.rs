//! Seam between the terminal shell and the two entry-form controllers.

use crate::forms::{Field, FormState};
use crate::navigation::{Navigator, AUTHENTICATED_LANDING};
use crate::session::SessionContext;

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed. Session marked, landing view requested.
    Accepted,
    /// At least one field failed; the form stays open with inline errors.
    Rejected { failures: usize },
    /// The form was already submitted during this visit.
    Ignored,
}

/// Operations the shell drives on whichever form screen is active.
pub trait FormController {
    fn form(&self) -> &FormState;

    /// Routes a value edit to the field- or selection-change handler.
    fn change(&mut self, field: Field, value: String);

    fn submit(&mut self) -> SubmitOutcome;

    /// Flips visibility of `field` if it is a secret this form carries.
    fn toggle_secret(&mut self, field: Field);

    /// Notice shown once the form is accepted.
    fn success_notice(&self) -> &'static str;
}

/// Classifies a submit by comparing the form before and after the reducer.
pub(crate) fn submit_outcome(before: &FormState, after: &FormState) -> SubmitOutcome {
    if before.is_submitted() {
        SubmitOutcome::Ignored
    } else if after.is_submitted() {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected {
            failures: after.errors().len(),
        }
    }
}

/// Side effects of an accepted submit: session first, then one navigation.
pub(crate) fn complete_submission<S, N>(session: &S, navigator: &N)
where
    S: SessionContext,
    N: Navigator,
{
    session.mark_authenticated();
    navigator.navigate(AUTHENTICATED_LANDING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SIGN_IN_FIELDS;

    #[test]
    fn outcome_of_rejected_submit_counts_failures() {
        let before = FormState::new(SIGN_IN_FIELDS);
        let after = before.clone().apply_submit();
        assert_eq!(
            submit_outcome(&before, &after),
            SubmitOutcome::Rejected { failures: 2 }
        );
    }

    #[test]
    fn outcome_after_terminal_state_is_ignored() {
        let form = FormState::new(SIGN_IN_FIELDS)
            .apply_change(Field::Email, "a@b.co".into())
            .apply_change(Field::Password, "secret".into())
            .apply_submit();
        assert!(form.is_submitted());
        let again = form.clone().apply_submit();
        assert_eq!(submit_outcome(&form, &again), SubmitOutcome::Ignored);
    }
}
