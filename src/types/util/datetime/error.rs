//! Why a [`Timestamp`] could not be created.
//!
//! [`Timestamp`]: super::Timestamp

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Reason that a timestamp couldn't be created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    /// Rejected input, rendered as text.
    input: String,
    /// Present for [`TimestampParseErrorType::Parsing`].
    source: Option<chrono::ParseError>,
}

impl TimestampParseError {
    /// Input that is blank or has no date/time separator.
    pub(crate) fn format(input: &str) -> Self {
        Self {
            kind: TimestampParseErrorType::Format,
            input: input.to_owned(),
            source: None,
        }
    }

    /// An epoch offset chrono cannot represent.
    pub(crate) fn range(input: i64) -> Self {
        Self {
            kind: TimestampParseErrorType::Range,
            input: input.to_string(),
            source: None,
        }
    }

    pub(crate) fn parsing(input: &str, source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Parsing,
            input: input.to_owned(),
            source: Some(source),
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// The value that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consume the error, returning the owned error type and the parser
    /// error, if any.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (TimestampParseErrorType, Option<chrono::ParseError>) {
        (self.kind, self.source)
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            TimestampParseErrorType::Format => {
                write!(f, "{:?} is not an iso 8601 datetime", self.input)
            }
            TimestampParseErrorType::Parsing => {
                write!(f, "cannot parse timestamp {:?}", self.input)?;
                match &self.source {
                    Some(source) => write!(f, ": {source}"),
                    None => Ok(()),
                }
            }
            TimestampParseErrorType::Range => write!(
                f,
                "{} is outside the representable range of timestamps",
                self.input
            ),
        }
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|source| source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimestampParseErrorType {
    /// Input is empty or not shaped like a datetime.
    Format,
    /// The ISO 8601 parser rejected the input.
    Parsing,
    /// The instant is outside the representable range.
    Range,
}
