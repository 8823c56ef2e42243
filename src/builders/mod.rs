//! Validated builders for every payload in [`crate::types`].
//!
//! Setters validate their argument and hand the builder back, so chains read
//! `Builder::new().set_x(..)?.set_y(..)?`. `build()` re-runs every check and
//! returns the wire struct; `to_json()` does the same and returns a
//! [`serde_json::Value`].

pub mod command;
pub mod component;
pub mod embed;

pub use self::command::{
    BooleanOption, ChannelOption, Choice, ChoiceValue, CommandOption, ContextMenuCommandBuilder,
    HasChannelTypes, HasChoices, IntegerOption, MentionableOption, NameAndDescription,
    NamedDescribed, NumberOption, OptionBase, OptionBuilder, OptionContainer, RoleOption,
    SlashCommandBuilder, StringOption, SubcommandBuilder, SubcommandGroupBuilder, UserOption,
    ValueOption,
};
pub use self::component::{
    create_component, ActionRowBuilder, ButtonBase, ComponentBuilder, InteractionButtonBuilder,
    LinkButtonBuilder, SelectMenuBuilder, SelectMenuOptionBuilder, SharedButton,
};
pub use self::embed::{EmbedAuthorOptions, EmbedBuilder};

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::error::BuildError;

/// Serialize an already validated payload.
pub(crate) fn to_json_value<T: Serialize>(
    builder: &'static str,
    payload: &T,
) -> Result<Value, BuildError> {
    let value = serde_json::to_value(payload).map_err(BuildError::Serialize)?;
    trace!(builder, "serialized payload");
    Ok(value)
}
