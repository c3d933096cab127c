//! Field validation engine shared by the sign-in and registration forms.
//!
//! Every field carries an ordered list of [`Rule`]s. Rules run in order and
//! the first failure wins, so "required" always masks format, length and
//! match failures for the same field. Fields are checked independently of
//! each other.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{Field, FieldValues};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Unanchored: any substring of the form `x@y.z` passes.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Required,
    InvalidFormat,
    TooShort,
    Mismatch,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Required => "required",
            FailureKind::InvalidFormat => "invalid format",
            FailureKind::TooShort => "too short",
            FailureKind::Mismatch => "mismatch",
        }
    }
}

/// A single rejected field together with the text shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {}", .kind.as_str())]
pub struct FieldValidationFailure {
    pub field: Field,
    pub kind: FailureKind,
}

impl FieldValidationFailure {
    /// User-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (Field::DisplayName, _) => "Name is required",
            (Field::Email, FailureKind::InvalidFormat) => "Email is invalid",
            (Field::Email, _) => "Email is required",
            (Field::Password, FailureKind::TooShort) => "Password must be at least 6 characters",
            (Field::Password, _) => "Password is required",
            (Field::ConfirmPassword, FailureKind::Mismatch) => "Passwords do not match",
            (Field::ConfirmPassword, _) => "Please confirm your password",
            (Field::GraduationYear, _) => "Graduation year is required",
            (Field::Degree, _) => "Degree is required",
            (Field::Company, _) => "Company is required",
        }
    }
}

/// One check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value is not the empty string. Whitespace counts as present.
    Present,
    /// Value is non-empty after trimming.
    PresentTrimmed,
    /// Value contains `non-space @ non-space . non-space`.
    EmailShape,
    /// Value has at least this many characters.
    MinChars(usize),
    /// Value equals the other field's value exactly.
    Equals(Field),
}

impl Rule {
    fn check(self, value: &str, values: &FieldValues) -> Result<(), FailureKind> {
        let passed = match self {
            Rule::Present => !value.is_empty(),
            Rule::PresentTrimmed => !value.trim().is_empty(),
            Rule::EmailShape => EMAIL_SHAPE.is_match(value),
            Rule::MinChars(min) => value.chars().count() >= min,
            Rule::Equals(other) => value == values.get(other),
        };
        if passed {
            Ok(())
        } else {
            Err(self.failure_kind())
        }
    }

    fn failure_kind(self) -> FailureKind {
        match self {
            Rule::Present | Rule::PresentTrimmed => FailureKind::Required,
            Rule::EmailShape => FailureKind::InvalidFormat,
            Rule::MinChars(_) => FailureKind::TooShort,
            Rule::Equals(_) => FailureKind::Mismatch,
        }
    }
}

/// Ordered rules for `field`.
///
/// Email is deliberately not trimmed before its presence check while the
/// free-text profile fields are.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::DisplayName => &[Rule::PresentTrimmed],
        Field::Email => &[Rule::Present, Rule::EmailShape],
        Field::Password => &[Rule::Present, Rule::MinChars(MIN_PASSWORD_CHARS)],
        Field::ConfirmPassword => &[Rule::Present, Rule::Equals(Field::Password)],
        Field::GraduationYear => &[Rule::Present],
        Field::Degree => &[Rule::PresentTrimmed],
        Field::Company => &[Rule::PresentTrimmed],
    }
}

/// Fields that currently fail validation, mapped to their first failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    failures: BTreeMap<Field, FailureKind>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn kind(&self, field: Field) -> Option<FailureKind> {
        self.failures.get(&field).copied()
    }

    pub fn failure(&self, field: Field) -> Option<FieldValidationFailure> {
        self.kind(field)
            .map(|kind| FieldValidationFailure { field, kind })
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.failure(field).map(|failure| failure.message())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.failures.contains_key(&field)
    }

    /// Drops the failure recorded for `field`, returning whether one existed.
    pub fn clear(&mut self, field: Field) -> bool {
        self.failures.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.failures.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValidationFailure> + '_ {
        self.failures
            .iter()
            .map(|(field, kind)| FieldValidationFailure {
                field: *field,
                kind: *kind,
            })
    }
}

impl FromIterator<FieldValidationFailure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter
                .into_iter()
                .map(|failure| (failure.field, failure.kind))
                .collect(),
        }
    }
}

/// Checks `required` fields of `values`, returning the first failing rule
/// of each failing field.
///
/// Pure: the same snapshot always yields the same result.
pub fn validate(values: &FieldValues, required: &[Field]) -> ValidationResult {
    required
        .iter()
        .filter_map(|&field| {
            let value = values.get(field);
            rules_for(field)
                .iter()
                .find_map(|rule| rule.check(value, values).err())
                .map(|kind| FieldValidationFailure { field, kind })
        })
        .collect()
}
