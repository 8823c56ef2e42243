//! Field validators shared by every builder.
//!
//! Pure predicates over primitive values. Builders call them eagerly from
//! setters and again from `build`, so a payload that skipped a setter still
//! fails before it is serialized.
//!
//! Text lengths are counted in Unicode scalar values.

use std::{borrow::Cow, fmt::Display, sync::LazyLock};

use regex::Regex;
use url::Url;

use crate::error::{FieldError, FieldErrorType, StructuralError};
use crate::types::{channel::ChannelType, component::ComponentEmoji};

// ---------------------------------------------------------------------------
// Platform limits
// ---------------------------------------------------------------------------

pub const COMMAND_NAME_MAX: usize = 32;
pub const COMMAND_DESCRIPTION_MAX: usize = 100;
pub const MAX_OPTIONS: usize = 25;
pub const MAX_CHOICES: usize = 25;
pub const CHOICE_NAME_MAX: usize = 100;
pub const CHOICE_STRING_VALUE_MAX: usize = 100;

pub const CUSTOM_ID_MAX: usize = 100;
pub const BUTTON_LABEL_MAX: usize = 80;
pub const SELECT_PLACEHOLDER_MAX: usize = 100;
pub const SELECT_VALUES_MAX: u8 = 25;
pub const SELECT_OPTIONS_MAX: usize = 25;
pub const SELECT_OPTION_TEXT_MAX: usize = 100;

pub const EMBED_TITLE_MAX: usize = 256;
pub const EMBED_DESCRIPTION_MAX: usize = 4096;
pub const EMBED_FIELD_NAME_MAX: usize = 256;
pub const EMBED_FIELD_VALUE_MAX: usize = 1024;
pub const EMBED_FOOTER_TEXT_MAX: usize = 2048;
pub const EMBED_AUTHOR_NAME_MAX: usize = 256;
pub const MAX_EMBED_FIELDS: usize = 25;
pub const EMBED_COLOR_MAX: u32 = 0xFF_FFFF;

const COMMAND_NAME_PATTERN: &str = r"^[\p{Ll}\p{N}_-]{1,32}$";
const CONTEXT_MENU_NAME_PATTERN: &str = r"^( *[\p{L}\p{N}_-]+ *)+$";

static COMMAND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMAND_NAME_PATTERN).expect("command name pattern compiles"));

static CONTEXT_MENU_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CONTEXT_MENU_NAME_PATTERN).expect("context menu name pattern compiles")
});

// ---------------------------------------------------------------------------
// Generic predicates
// ---------------------------------------------------------------------------

/// Unwrap a required field, failing with [`FieldErrorType::Missing`].
pub fn required<'a, T: ?Sized>(
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, FieldError> {
    value.ok_or_else(|| FieldError::missing(field))
}

/// Text length within `min..=max` characters.
pub fn text_length(
    field: impl Into<Cow<'static, str>>,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let count = value.chars().count();

    if count < min {
        return Err(FieldError::new(field, FieldErrorType::TooShort { min }).with_value(value));
    }

    if count > max {
        return Err(FieldError::new(field, FieldErrorType::TooLong { max }).with_value(value));
    }

    Ok(())
}

/// Integer within `min..=max`.
pub fn range<T>(field: &'static str, value: T, min: i64, max: i64) -> Result<(), FieldError>
where
    T: Into<i64> + Copy + Display,
{
    let wide: i64 = value.into();

    if wide < min || wide > max {
        return Err(
            FieldError::new(field, FieldErrorType::OutOfRange { min, max }).with_value(value),
        );
    }

    Ok(())
}

/// Rejects NaN and the infinities.
pub fn finite(field: &'static str, value: f64) -> Result<(), FieldError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FieldError::new(field, FieldErrorType::NotFinite).with_value(value))
    }
}

/// An absolute URL.
pub fn url(field: &'static str, value: &str) -> Result<(), FieldError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| FieldError::new(field, FieldErrorType::InvalidUrl).with_value(value))
}

/// Adding `adding` entries to a collection of `current` stays within `max`.
pub fn max_items(
    collection: &'static str,
    current: usize,
    adding: usize,
    max: usize,
) -> Result<(), StructuralError> {
    let count = current.saturating_add(adding);

    if count > max {
        return Err(StructuralError::TooMany {
            collection,
            max,
            count,
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Domain predicates
// ---------------------------------------------------------------------------

/// Slash command, subcommand, and option names.
pub fn command_name(value: &str) -> Result<(), FieldError> {
    text_length("name", value, 1, COMMAND_NAME_MAX)?;

    if !COMMAND_NAME.is_match(value) {
        return Err(FieldError::new(
            "name",
            FieldErrorType::Pattern {
                pattern: COMMAND_NAME_PATTERN,
            },
        )
        .with_value(value));
    }

    Ok(())
}

/// Context menu command names: spaces and any-case letters allowed, but the
/// name must still be lowercase.
pub fn context_menu_name(value: &str) -> Result<(), FieldError> {
    text_length("name", value, 1, COMMAND_NAME_MAX)?;

    if !CONTEXT_MENU_NAME.is_match(value) || value.chars().any(char::is_uppercase) {
        return Err(FieldError::new(
            "name",
            FieldErrorType::Pattern {
                pattern: CONTEXT_MENU_NAME_PATTERN,
            },
        )
        .with_value(value));
    }

    Ok(())
}

pub fn command_description(value: &str) -> Result<(), FieldError> {
    text_length("description", value, 1, COMMAND_DESCRIPTION_MAX)
}

pub fn custom_id(value: &str) -> Result<(), FieldError> {
    text_length("custom_id", value, 1, CUSTOM_ID_MAX)
}

/// Channel kinds a channel option may be restricted to. Direct-message
/// kinds are excluded.
pub fn channel_type(value: ChannelType) -> Result<(), FieldError> {
    if value.is_selectable() {
        Ok(())
    } else {
        Err(FieldError::new(
            "channel_types",
            FieldErrorType::NotAllowed {
                allowed: ChannelType::SELECTABLE_NAMES,
            },
        )
        .with_value(value.name()))
    }
}

/// An emoji needs an id or a name to be rendered.
pub fn emoji(value: &ComponentEmoji) -> Result<(), FieldError> {
    let has_id = value.id.as_deref().is_some_and(|id| !id.is_empty());
    let has_name = value.name.as_deref().is_some_and(|name| !name.is_empty());

    if has_id || has_name {
        Ok(())
    } else {
        Err(FieldError::new("emoji", FieldErrorType::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_name_accepts_lowercase_digits_and_separators() {
        let longest = "a".repeat(32);
        for name in ["ping", "a", "set-role_2", "ñandú", "v2", longest.as_str()] {
            assert!(command_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn command_name_rejects_bad_names() {
        let too_long = "a".repeat(33);
        for name in ["", "Ping", "with space", "bang!", "名前", too_long.as_str()] {
            assert!(command_name(name).is_err(), "{name} should be invalid");
        }
    }

    #[test]
    fn command_name_reports_pattern() {
        let err = command_name("Ping").unwrap_err();
        assert!(matches!(err.kind(), FieldErrorType::Pattern { .. }));
        assert_eq!(err.value(), Some("Ping"));
    }

    #[test]
    fn context_menu_name_allows_spaces() {
        assert!(context_menu_name("user info").is_ok());
        assert!(context_menu_name("User Info").is_err());
        assert!(context_menu_name("bad!").is_err());
        assert!(context_menu_name("").is_err());
    }

    #[test]
    fn text_length_counts_characters() {
        assert!(text_length("label", &"é".repeat(80), 1, 80).is_ok());
        let err = text_length("label", &"é".repeat(81), 1, 80).unwrap_err();
        assert_eq!(err.kind(), &FieldErrorType::TooLong { max: 80 });
        let err = text_length("label", "", 1, 80).unwrap_err();
        assert_eq!(err.kind(), &FieldErrorType::TooShort { min: 1 });
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(finite("value", 1.5).is_ok());
        assert!(finite("value", f64::NAN).is_err());
        assert!(finite("value", f64::INFINITY).is_err());
        assert!(finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(range("min_values", 0u8, 0, 25).is_ok());
        assert!(range("min_values", 25u8, 0, 25).is_ok());
        let err = range("min_values", 26u8, 0, 25).unwrap_err();
        assert_eq!(err.kind(), &FieldErrorType::OutOfRange { min: 0, max: 25 });
    }

    #[test]
    fn url_requires_absolute_url() {
        assert!(url("url", "https://discord.js.org/").is_ok());
        let err = url("url", "foobar").unwrap_err();
        assert_eq!(err.kind(), &FieldErrorType::InvalidUrl);
    }

    #[test]
    fn max_items_allows_exact_limit() {
        assert!(max_items("options", 24, 1, MAX_OPTIONS).is_ok());
        assert_eq!(
            max_items("options", 25, 1, MAX_OPTIONS),
            Err(StructuralError::TooMany {
                collection: "options",
                max: 25,
                count: 26,
            })
        );
    }

    #[test]
    fn channel_type_rejects_direct_messages() {
        assert!(channel_type(ChannelType::GuildText).is_ok());
        assert!(channel_type(ChannelType::PrivateThread).is_ok());
        assert!(channel_type(ChannelType::Dm).is_err());
        assert!(channel_type(ChannelType::GroupDm).is_err());
    }

    #[test]
    fn emoji_needs_id_or_name() {
        assert!(emoji(&ComponentEmoji::default()).is_err());
        assert!(emoji(&ComponentEmoji {
            name: Some("⭐".to_owned()),
            ..ComponentEmoji::default()
        })
        .is_ok());
    }
}
