mod common;

use common::{valid_sign_up, Call, Recorder};
use nexus::forms::{FailureKind, Field, FormPhase, SIGN_UP_FIELDS};
use nexus::navigation::Route;
use nexus::ui::form::{FormController, SubmitOutcome};
use nexus::ui::sign_up::{SignUpController, SIGN_UP_NOTICE};

fn controller() -> (SignUpController<Recorder, Recorder>, Recorder) {
    let recorder = Recorder::new();
    (
        SignUpController::new(recorder.clone(), recorder.clone()),
        recorder,
    )
}

fn fill(controller: &mut SignUpController<Recorder, Recorder>) {
    for (field, value) in valid_sign_up() {
        if field.is_selection() {
            controller.on_selection_change(field, value);
        } else {
            controller.on_field_change(field, value);
        }
    }
}

/// Empty registration rejects every field as required.
#[test]
fn test_empty_form_rejects_all_fields() {
    let (mut controller, recorder) = controller();
    assert_eq!(
        controller.on_submit(),
        SubmitOutcome::Rejected {
            failures: SIGN_UP_FIELDS.len()
        }
    );
    assert!(recorder.calls().is_empty());
    let errors = controller.state().form.errors();
    for field in SIGN_UP_FIELDS {
        assert_eq!(errors.kind(*field), Some(FailureKind::Required));
    }
}

/// A complete form is accepted with session then navigation.
#[test]
fn test_complete_form_is_accepted() {
    let (mut controller, recorder) = controller();
    fill(&mut controller);

    assert_eq!(controller.on_submit(), SubmitOutcome::Accepted);
    assert_eq!(
        recorder.calls(),
        vec![
            Call::MarkAuthenticated,
            Call::Navigate(Route::AlumniDirectory)
        ]
    );
    assert_eq!(controller.state().form.phase(), FormPhase::Submitted);
    assert_eq!(controller.success_notice(), SIGN_UP_NOTICE);
}

/// Mismatched confirmation blocks submit without other failures.
#[test]
fn test_mismatched_confirmation() {
    let (mut controller, recorder) = controller();
    fill(&mut controller);
    controller.on_field_change(Field::ConfirmPassword, "different");

    assert_eq!(
        controller.on_submit(),
        SubmitOutcome::Rejected { failures: 1 }
    );
    assert_eq!(
        controller.state().form.errors().message(Field::ConfirmPassword),
        Some("Passwords do not match")
    );
    assert_eq!(recorder.session_calls(), 0);
}

/// Selection change clears the year error like a text edit would.
#[test]
fn test_selection_change_clears_error() {
    let (mut controller, _recorder) = controller();
    controller.on_submit();
    assert!(controller
        .state()
        .form
        .errors()
        .contains(Field::GraduationYear));

    controller.on_selection_change(Field::GraduationYear, "2001");
    let form = &controller.state().form;
    assert!(!form.errors().contains(Field::GraduationYear));
    assert_eq!(form.value(Field::GraduationYear), "2001");
    assert!(form.errors().contains(Field::Degree));
}

/// Password and confirmation visibility flip independently.
#[test]
fn test_secret_visibility_is_per_field() {
    let (mut controller, _recorder) = controller();
    controller.toggle_secret_visibility(Field::ConfirmPassword);
    let form = &controller.state().form;
    assert!(form.is_secret_visible(Field::ConfirmPassword));
    assert!(!form.is_secret_visible(Field::Password));

    controller.toggle_secret_visibility(Field::Password);
    assert!(controller.state().form.is_secret_visible(Field::Password));
}

/// The shell-facing `change` routes the year through the selection path.
#[test]
fn test_form_controller_change_routes_selection() {
    let (mut controller, _recorder) = controller();
    controller.on_submit();
    FormController::change(&mut controller, Field::GraduationYear, "1999".to_string());
    assert_eq!(controller.form().value(Field::GraduationYear), "1999");
    assert!(!controller.form().errors().contains(Field::GraduationYear));
}

/// Effects fire once even if submit is pressed repeatedly.
#[test]
fn test_effects_fire_once() {
    let (mut controller, recorder) = controller();
    fill(&mut controller);
    assert_eq!(controller.on_submit(), SubmitOutcome::Accepted);
    assert_eq!(controller.on_submit(), SubmitOutcome::Ignored);
    assert_eq!(controller.on_submit(), SubmitOutcome::Ignored);
    assert_eq!(recorder.session_calls(), 1);
    assert_eq!(recorder.navigations().len(), 1);
}
