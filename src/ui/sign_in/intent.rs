use crate::forms::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SignInIntent {
    /// Replaces the value of a field. Clears that field's error.
    FieldChanged { field: Field, value: String },
    Submit,
    /// Show or mask the password.
    TogglePasswordVisibility,
}

impl Intent for SignInIntent {}
