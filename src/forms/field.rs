use std::collections::BTreeMap;
use std::fmt;

/// A named, user-editable value on one of the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    DisplayName,
    Email,
    Password,
    ConfirmPassword,
    GraduationYear,
    Degree,
    Company,
}

/// Field layout of the sign-in form, in display order.
pub const SIGN_IN_FIELDS: &[Field] = &[Field::Email, Field::Password];

/// Field layout of the registration form, in display order.
pub const SIGN_UP_FIELDS: &[Field] = &[
    Field::DisplayName,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::GraduationYear,
    Field::Degree,
    Field::Company,
];

impl Field {
    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Field::DisplayName => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::GraduationYear => "graduationYear",
            Field::Degree => "degree",
            Field::Company => "company",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::DisplayName => "Full Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::GraduationYear => "Graduation Year",
            Field::Degree => "Degree",
            Field::Company => "Current Company",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::DisplayName => "Enter your full name",
            Field::Email => "Enter your email",
            Field::Password => "Enter your password",
            Field::ConfirmPassword => "Confirm your password",
            Field::GraduationYear => "Select graduation year",
            Field::Degree => "e.g., Computer Science Engineering",
            Field::Company => "Enter your current company",
        }
    }

    /// Secret fields are masked unless their visibility flag is set.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Selection fields take their value from an enumerated set, not free text.
    pub fn is_selection(self) -> bool {
        matches!(self, Field::GraduationYear)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of field values for one form.
///
/// Lookups of a field that was never set yield `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    /// Creates a snapshot with an empty entry for every field in `layout`.
    pub fn empty(layout: &[Field]) -> Self {
        Self {
            values: layout.iter().map(|field| (*field, String::new())).collect(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }
}
