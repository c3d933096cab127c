//! Form model and validation shared by the sign-in and registration screens.

mod field;
mod state;
mod validation;
mod years;

pub use field::{Field, FieldValues, SIGN_IN_FIELDS, SIGN_UP_FIELDS};
pub use state::{FormPhase, FormState};
pub use validation::{
    rules_for, validate, FailureKind, FieldValidationFailure, Rule, ValidationResult,
    MIN_PASSWORD_CHARS,
};
pub use years::{current_year, graduation_years, step_year, GRADUATION_YEAR_SPAN};
