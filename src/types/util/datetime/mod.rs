//! ISO 8601 timestamps for embeds.
//!
//! Every accepted input (epoch milliseconds, epoch seconds, a
//! [`DateTime<Utc>`], or an ISO 8601 string with any offset) normalizes to one
//! canonical rendering: UTC with millisecond precision and a `Z` suffix,
//! e.g. `2021-01-01T01:01:01.000Z`.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// A UTC instant rendered as a canonical ISO 8601 string.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse an ISO 8601 / RFC 3339 datetime, with or without fractional
    /// seconds, in any offset.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Format`] for blank input and
    /// [`TimestampParseErrorType::Parsing`] when the parser rejects it.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        let trimmed = datetime.trim();

        if trimmed.is_empty() || !trimmed.contains('T') {
            return Err(TimestampParseError::format(datetime));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(|source| TimestampParseError::parsing(trimmed, source))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the instant can't be
    /// represented.
    pub fn from_millis(unix_milliseconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::from_timestamp_millis(unix_milliseconds)
            .map(Self)
            .ok_or_else(|| TimestampParseError::range(unix_milliseconds))
    }

    /// Create a timestamp from Unix epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the instant can't be
    /// represented.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::from_timestamp(unix_seconds, 0)
            .map(Self)
            .ok_or_else(|| TimestampParseError::range(unix_seconds))
    }

    /// Unix epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Unix epoch seconds.
    pub fn as_secs(&self) -> i64 {
        self.0.timestamp()
    }

    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Canonical ISO 8601 rendering.
    pub fn iso_8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.iso_8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&'_ str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Timestamp::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_8601())
    }
}
