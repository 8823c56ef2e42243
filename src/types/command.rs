//! Application command registration payloads.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::channel::ChannelType;

/// Kind of application command.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// Slash command.
    ChatInput = 1,
    /// Right-click command on a user.
    User = 2,
    /// Right-click command on a message.
    Message = 3,
}

/// Discriminant of a command option.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    Subcommand = 1,
    SubcommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
}

impl CommandOptionType {
    /// Subcommands and subcommand groups hold other options instead of a value.
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Subcommand | Self::SubcommandGroup)
    }
}

/// Body of a slash command registration.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApplicationCommand {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,
}

/// Body of a user or message context menu command registration.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContextMenuCommand {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommandType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permission: Option<bool>,
}

/// One node of a command's option tree.
///
/// Value options always carry `required`; subcommands and groups carry
/// `options` instead.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApplicationCommandOption {
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ApplicationCommandOptionChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<CommandOptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<CommandOptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,
}

impl ApplicationCommandOption {
    /// Option of the given kind with every optional field absent.
    pub fn new(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: None,
            choices: None,
            autocomplete: None,
            channel_types: None,
            min_value: None,
            max_value: None,
            options: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApplicationCommandOptionChoice {
    pub name: String,
    pub value: CommandOptionValue,
}

/// A choice value or numeric bound.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionValue {
    String(String),
    Integer(i64),
    Number(f64),
}
