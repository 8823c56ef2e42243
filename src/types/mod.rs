//! Wire types: the exact JSON shapes the platform accepts.
//!
//! Every builder in [`crate::builders`] produces one of these from `build()`.
//! Field names match the platform's snake_case convention and absent
//! optionals are skipped rather than serialized as `null`.

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Channel kinds used by channel option filters.
pub mod channel;

/// Slash and context menu command registration bodies.
pub mod command;

/// Action rows, buttons, and select menus.
pub mod component;

/// Rich embeds.
pub mod embed;

/// Timestamps and serde helpers.
pub mod util;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

pub use self::channel::ChannelType;
pub use self::command::{
    ApplicationCommand, ApplicationCommandOption, ApplicationCommandOptionChoice,
    CommandOptionType, CommandOptionValue, CommandType, ContextMenuCommand,
};
pub use self::component::{
    ActionRow, Button, ButtonStyle, Component, ComponentEmoji, ComponentType, SelectMenu,
    SelectMenuOption,
};
pub use self::embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, EmbedProvider};
pub use self::util::Timestamp;
