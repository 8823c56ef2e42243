//! Message component builders and the factory that rebuilds them from JSON.

mod action_row;
mod button;
mod select_menu;

pub use self::action_row::ActionRowBuilder;
pub use self::button::{ButtonBase, InteractionButtonBuilder, LinkButtonBuilder, SharedButton};
pub use self::select_menu::{SelectMenuBuilder, SelectMenuOptionBuilder};

use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::builders::to_json_value;
use crate::error::BuildError;
use crate::types::component::{ButtonStyle, Component, ComponentType};

/// Any component builder.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentBuilder {
    ActionRow(ActionRowBuilder),
    InteractionButton(InteractionButtonBuilder),
    LinkButton(LinkButtonBuilder),
    SelectMenu(SelectMenuBuilder),
}

impl ComponentBuilder {
    /// An empty button of the given style: a [`LinkButtonBuilder`] for
    /// [`ButtonStyle::Link`], an [`InteractionButtonBuilder`] otherwise.
    pub fn button(style: ButtonStyle) -> Self {
        match style {
            ButtonStyle::Link => Self::LinkButton(LinkButtonBuilder::new()),
            style => Self::InteractionButton(InteractionButtonBuilder::with_style(style)),
        }
    }

    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::InteractionButton(_) | Self::LinkButton(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::SelectMenu,
        }
    }

    pub const fn builder_name(&self) -> &'static str {
        match self {
            Self::ActionRow(_) => "ActionRowBuilder",
            Self::InteractionButton(_) => "InteractionButtonBuilder",
            Self::LinkButton(_) => "LinkButtonBuilder",
            Self::SelectMenu(_) => "SelectMenuBuilder",
        }
    }

    pub fn build(&self) -> Result<Component, BuildError> {
        Ok(match self {
            Self::ActionRow(row) => Component::ActionRow(row.build()?),
            Self::InteractionButton(button) => Component::Button(button.build()?),
            Self::LinkButton(button) => Component::Button(button.build()?),
            Self::SelectMenu(menu) => Component::SelectMenu(menu.build()?),
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value(self.builder_name(), &self.build()?)
    }
}

impl From<Component> for ComponentBuilder {
    fn from(component: Component) -> Self {
        match component {
            Component::ActionRow(row) => Self::ActionRow(row.into()),
            Component::Button(button) if button.style == ButtonStyle::Link => {
                Self::LinkButton(button.into())
            }
            Component::Button(button) => Self::InteractionButton(button.into()),
            Component::SelectMenu(menu) => Self::SelectMenu(menu.into()),
        }
    }
}

impl From<ActionRowBuilder> for ComponentBuilder {
    fn from(row: ActionRowBuilder) -> Self {
        Self::ActionRow(row)
    }
}

impl From<InteractionButtonBuilder> for ComponentBuilder {
    fn from(button: InteractionButtonBuilder) -> Self {
        Self::InteractionButton(button)
    }
}

impl From<LinkButtonBuilder> for ComponentBuilder {
    fn from(button: LinkButtonBuilder) -> Self {
        Self::LinkButton(button)
    }
}

impl From<SelectMenuBuilder> for ComponentBuilder {
    fn from(menu: SelectMenuBuilder) -> Self {
        Self::SelectMenu(menu)
    }
}

/// Rebuild a component builder from raw JSON.
///
/// Dispatches on `type`, and for buttons on `style`, recursing into action
/// rows. Unknown discriminants fail; nothing is dropped. The result is not
/// validated until it is built.
pub fn create_component(raw: Value) -> Result<ComponentBuilder, BuildError> {
    let component: Component = serde_json::from_value(raw).map_err(BuildError::Deserialize)?;
    debug!(kind = ?component.kind(), "reconstructing component");

    Ok(component.into())
}

impl FromStr for ComponentBuilder {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let component: Component = serde_json::from_str(s).map_err(BuildError::Deserialize)?;
        debug!(kind = ?component.kind(), "reconstructing component");

        Ok(component.into())
    }
}
