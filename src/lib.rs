//! Validated builders for Discord interaction payloads.
//!
//! Slash and context menu commands, message components, and embeds are
//! assembled through builders in [`builders`]. Each setter checks its input
//! against the platform limits in [`validate`], and `build()` / `to_json()`
//! run a final pass before producing the wire shapes in [`types`].
//!
//! ```
//! use interaction_builders::prelude::*;
//!
//! # fn main() -> Result<(), BuildError> {
//! let command = SlashCommandBuilder::new()
//!     .set_name("echo")?
//!     .set_description("Replies with your input")?
//!     .add_string_option_with(|option| {
//!         option
//!             .set_name("input")?
//!             .set_description("The input to echo back")
//!             .map(|option| option.set_required(true))
//!     })?;
//!
//! assert_eq!(command.to_json()?["options"][0]["required"], true);
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod error;
pub mod types;
pub mod validate;

/// Builders, their capability traits, and the error type.
pub mod prelude {
    pub use crate::builders::{
        create_component, ActionRowBuilder, BooleanOption, ChannelOption, Choice,
        CommandOption, ComponentBuilder, ContextMenuCommandBuilder, EmbedAuthorOptions,
        EmbedBuilder, HasChannelTypes, HasChoices, IntegerOption, InteractionButtonBuilder,
        LinkButtonBuilder, MentionableOption, NamedDescribed, NumberOption, OptionBuilder,
        OptionContainer, RoleOption, SelectMenuBuilder, SelectMenuOptionBuilder, SharedButton,
        SlashCommandBuilder, StringOption, SubcommandBuilder, SubcommandGroupBuilder,
        UserOption, ValueOption,
    };
    pub use crate::error::{BuildError, FieldError, FieldErrorType, StructuralError};
    pub use crate::types::{
        ButtonStyle, ChannelType, CommandType, ComponentEmoji, EmbedField, Timestamp,
    };
}
