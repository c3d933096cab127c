use std::collections::BTreeSet;

use super::field::{Field, FieldValues};
use super::validation::{validate, ValidationResult};

/// Where a form is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Terminal for the screen visit. Further input is ignored.
    Submitted,
}

/// Values, errors and display flags of one form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    layout: &'static [Field],
    values: FieldValues,
    errors: ValidationResult,
    secret_visible: BTreeSet<Field>,
    phase: FormPhase,
}

impl FormState {
    pub fn new(layout: &'static [Field]) -> Self {
        Self {
            layout,
            values: FieldValues::empty(layout),
            errors: ValidationResult::default(),
            secret_visible: BTreeSet::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn layout(&self) -> &'static [Field] {
        self.layout
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn is_secret_visible(&self, field: Field) -> bool {
        self.secret_visible.contains(&field)
    }

    /// Stores `value` and drops any stale error for `field`.
    ///
    /// Fields outside the layout are ignored.
    pub(crate) fn apply_change(mut self, field: Field, value: String) -> Self {
        if self.is_submitted() || !self.layout.contains(&field) {
            return self;
        }
        self.values.set(field, value);
        self.errors.clear(field);
        self
    }

    /// Flips the visibility flag of a secret field in the layout.
    pub(crate) fn apply_toggle_secret(mut self, field: Field) -> Self {
        if self.is_submitted() || !field.is_secret() || !self.layout.contains(&field) {
            return self;
        }
        if !self.secret_visible.remove(&field) {
            self.secret_visible.insert(field);
        }
        self
    }

    /// Validates the whole layout. An empty result moves the form to
    /// [`FormPhase::Submitted`]; otherwise the result becomes the error map.
    pub(crate) fn apply_submit(mut self) -> Self {
        if self.is_submitted() {
            return self;
        }
        let result = validate(&self.values, self.layout);
        if result.is_empty() {
            self.phase = FormPhase::Submitted;
        }
        self.errors = result;
        self
    }
}
