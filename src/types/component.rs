//! Message component payloads: action rows, buttons, and select menus.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{
    de::{Deserializer, Error as DeError},
    Deserialize, Serialize,
};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::util::ValueExt;
use crate::error::{FieldError, FieldErrorType};

/// Discriminant of a message component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    SelectMenu = 3,
}

/// Visual style of a button. [`Link`](Self::Link) buttons open a URL, every
/// other style sends an interaction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

impl ButtonStyle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Link => "Link",
        }
    }
}

impl Display for ButtonStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonStyle {
    type Err = FieldError;

    /// Parse a style by name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Primary,
            Self::Secondary,
            Self::Success,
            Self::Danger,
            Self::Link,
        ]
        .into_iter()
        .find(|style| style.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| {
            FieldError::new(
                "style",
                FieldErrorType::NotAllowed {
                    allowed: "Primary, Secondary, Success, Danger, Link",
                },
            )
            .with_value(s)
        })
    }
}

/// Emoji shown on a button or select menu option.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ComponentEmoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl FromStr for ComponentEmoji {
    type Err = FieldError;

    /// Accepts a custom emoji mention (`<:name:id>`, `<a:name:id>`), a
    /// `:name:` shortcode, a bare emoji id, or a unicode emoji.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(FieldError::new("emoji", FieldErrorType::Empty));
        }

        if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
            let (animated, rest) = match inner.strip_prefix('a') {
                Some(rest) if rest.starts_with(':') => (true, rest),
                _ => (false, inner),
            };

            if let Some((name, id)) = rest.strip_prefix(':').and_then(|r| r.split_once(':')) {
                if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                    return Ok(Self {
                        id: Some(id.to_owned()),
                        name: (!name.is_empty()).then(|| name.to_owned()),
                        animated: Some(animated),
                    });
                }
            }
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self {
                id: Some(s.to_owned()),
                ..Self::default()
            });
        }

        let name = s
            .strip_prefix(':')
            .and_then(|rest| rest.strip_suffix(':'))
            .filter(|name| !name.is_empty())
            .unwrap_or(s);

        Ok(Self {
            name: Some(name.to_owned()),
            ..Self::default()
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// A button of any style. Link buttons carry `url`, the others `custom_id`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub custom_id: String,
    #[serde(default)]
    pub options: Vec<SelectMenuOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectMenuOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Any message component, discriminated by its `type` field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
}

impl Component {
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::SelectMenu,
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let kind = match value.get("type") {
            Some(kind) => kind.as_u64().ok_or_else(|| {
                D::Error::custom(format!("component type must be an integer, got {kind}"))
            })?,
            None => return Err(DeError::missing_field("type")),
        };

        match kind {
            1 => value.deserialize_into().map(Self::ActionRow),
            2 => value.deserialize_into().map(Self::Button),
            3 => value.deserialize_into().map(Self::SelectMenu),
            other => return Err(DeError::custom(format!("unknown component type {other}"))),
        }
        .map_err(DeError::custom)
    }
}
