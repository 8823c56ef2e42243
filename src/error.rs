//! Errors raised while building, validating, or reconstructing payloads.
//!
//! Every fallible operation in this crate returns [`BuildError`]. The first
//! violated rule stops the operation; errors are never collected.

use std::{
    borrow::Cow,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::types::util::datetime::TimestampParseError;

/// Maximum number of characters of an offending value echoed in messages.
const MAX_ECHOED_VALUE: usize = 64;

/// Any failure produced by a builder or by the component factory.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A single field failed its predicate.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A rule spanning several fields or sibling entities was violated.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// A configurator returned a different builder than the one requested.
    #[error("expected to receive a {expected} builder, got {received} instead")]
    TypeMismatch {
        expected: &'static str,
        received: &'static str,
    },

    /// Raw JSON could not be mapped to any known builder.
    #[error("cannot deserialize payload: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A validated payload could not be turned into a JSON value.
    #[error("cannot serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A date input could not be represented as a timestamp.
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),
}

impl BuildError {
    /// The field error, if this is one.
    pub const fn as_field(&self) -> Option<&FieldError> {
        match self {
            Self::Field(error) => Some(error),
            _ => None,
        }
    }

    /// The structural error, if this is one.
    pub const fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural(error) => Some(error),
            _ => None,
        }
    }
}

/// A scalar value that failed its predicate.
///
/// Carries the field path (`"name"`, `"choices.name"`, `"fields.value"`), the
/// offending value when there was one, and the violated constraint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    field: Cow<'static, str>,
    value: Option<String>,
    kind: FieldErrorType,
}

impl FieldError {
    pub(crate) fn new(field: impl Into<Cow<'static, str>>, kind: FieldErrorType) -> Self {
        Self {
            field: field.into(),
            value: None,
            kind,
        }
    }

    /// A required field that was never set.
    pub(crate) fn missing(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(field, FieldErrorType::Missing)
    }

    pub(crate) fn with_value(mut self, value: impl Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Path of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The rejected value, rendered as text.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &FieldErrorType {
        &self.kind
    }

    /// Consume the error, returning the field path, the owned error type and
    /// the rejected value.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (Cow<'static, str>, FieldErrorType, Option<String>) {
        (self.field, self.kind, self.value)
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "expected {} {}", self.field, self.kind)?;

        if let Some(value) = &self.value {
            if value.chars().count() > MAX_ECHOED_VALUE {
                let head: String = value.chars().take(MAX_ECHOED_VALUE).collect();
                write!(f, ", got {head:?}...")?;
            } else {
                write!(f, ", got {value:?}")?;
            }
        }

        Ok(())
    }
}

impl Error for FieldError {}

/// Type of [`FieldError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldErrorType {
    /// The field is required but was never set.
    Missing,
    /// Text is shorter than allowed.
    TooShort { min: usize },
    /// Text is longer than allowed.
    TooLong { max: usize },
    /// Text does not match the required pattern.
    Pattern { pattern: &'static str },
    /// Number is outside the allowed range (inclusive).
    OutOfRange { min: i64, max: i64 },
    /// Number is NaN or infinite.
    NotFinite,
    /// Text is not an absolute URL.
    InvalidUrl,
    /// Value is not part of the allowed set.
    NotAllowed { allowed: &'static str },
    /// Value carries none of its meaningful parts.
    Empty,
}

impl Display for FieldErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Missing => f.write_str("to be set"),
            Self::TooShort { min } => write!(f, "to be at least {min} characters long"),
            Self::TooLong { max } => write!(f, "to be at most {max} characters long"),
            Self::Pattern { pattern } => write!(f, "to match {pattern:?}"),
            Self::OutOfRange { min, max } => write!(f, "to be between {min} and {max}"),
            Self::NotFinite => f.write_str("to be a finite number"),
            Self::InvalidUrl => f.write_str("to be a valid URL"),
            Self::NotAllowed { allowed } => write!(f, "to be one of {allowed}"),
            Self::Empty => f.write_str("to not be empty"),
        }
    }
}

/// A composite rule that was violated.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StructuralError {
    #[error("cannot construct a button with both a label and an emoji")]
    LabelAndEmoji,

    #[error("autocomplete and choices are mutually exclusive")]
    ChoicesAndAutocomplete,

    #[error("cannot mix subcommands and subcommand groups at the root level")]
    SubcommandsAndGroups,

    #[error("cannot mix options with subcommands or subcommand groups at the root level")]
    OptionsAndSubcommands,

    #[error("a {container} cannot contain a {child}")]
    NestedContainer {
        container: &'static str,
        child: &'static str,
    },

    #[error("{collection} cannot hold more than {max} entries (got {count})")]
    TooMany {
        collection: &'static str,
        max: usize,
        count: usize,
    },

    #[error("{min_field} ({min}) cannot be greater than {max_field} ({max})")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
        min: String,
        max: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{BuildError, FieldError, FieldErrorType, StructuralError};

    #[test]
    fn field_error_display_names_field_and_value() {
        let err = FieldError::new("label", FieldErrorType::TooLong { max: 80 }).with_value("abc");
        assert_eq!(
            err.to_string(),
            "expected label to be at most 80 characters long, got \"abc\""
        );
    }

    #[test]
    fn field_error_display_truncates_long_values() {
        let err = FieldError::new("description", FieldErrorType::TooLong { max: 100 })
            .with_value("a".repeat(200));
        let message = err.to_string();
        assert!(message.ends_with("..."));
        assert!(message.len() < 200);
    }

    #[test]
    fn missing_field_has_no_value() {
        let err = FieldError::missing("custom_id");
        assert_eq!(err.to_string(), "expected custom_id to be set");
        let (field, kind, value) = err.into_parts();
        assert_eq!(field, "custom_id");
        assert_eq!(kind, FieldErrorType::Missing);
        assert!(value.is_none());
    }

    #[test]
    fn build_error_is_transparent_over_structural() {
        let err = BuildError::from(StructuralError::LabelAndEmoji);
        assert_eq!(
            err.to_string(),
            "cannot construct a button with both a label and an emoji"
        );
        assert_eq!(err.as_structural(), Some(&StructuralError::LabelAndEmoji));
        assert!(err.as_field().is_none());
    }

    #[test]
    fn type_mismatch_names_both_builders() {
        let err = BuildError::TypeMismatch {
            expected: "SubcommandBuilder",
            received: "StringOption",
        };
        assert_eq!(
            err.to_string(),
            "expected to receive a SubcommandBuilder builder, got StringOption instead"
        );
    }
}
