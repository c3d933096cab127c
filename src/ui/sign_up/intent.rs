use crate::forms::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SignUpIntent {
    /// Free-text edit. Clears that field's error.
    FieldChanged { field: Field, value: String },
    /// A value picked from an enumerated set (graduation year). Same
    /// error-clearing contract as a text edit.
    SelectionChanged { field: Field, value: String },
    Submit,
    /// Show or mask one of the two password fields.
    ToggleSecretVisibility { field: Field },
}

impl Intent for SignUpIntent {}
