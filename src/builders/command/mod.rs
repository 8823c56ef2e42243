//! Slash command builders.
//!
//! A root [`SlashCommandBuilder`] holds either value options, subcommands, or
//! subcommand groups, never a mix. The typed adders move the builder into a
//! [`state`] that only offers adders for the same family; the untyped
//! [`add_option`](SlashCommandBuilder::add_option) stays available everywhere
//! and checks the same rules at runtime.

mod channel_types;
mod choices;
mod container;
mod context_menu;
mod options;
mod shared;
mod subcommand;

pub use self::channel_types::HasChannelTypes;
pub use self::choices::{Choice, ChoiceList, ChoiceValue, HasChoices};
pub use self::container::{CommandOption, OptionContainer};
pub use self::context_menu::ContextMenuCommandBuilder;
pub use self::options::{
    BooleanOption, ChannelOption, IntegerOption, MentionableOption, NumberOption, RoleOption,
    StringOption, UserOption,
};
pub use self::shared::{NameAndDescription, NamedDescribed, OptionBase, OptionBuilder, ValueOption};
pub use self::subcommand::{SubcommandBuilder, SubcommandGroupBuilder};

use std::{iter, marker::PhantomData};

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, StructuralError};
use crate::types::command::{ApplicationCommand, CommandOptionType};
use crate::validate::{self, MAX_OPTIONS};

use self::container::expect_kind;
use self::state::{AcceptsOptions, AcceptsSubcommandGroups, AcceptsSubcommands};

/// Which option families a [`SlashCommandBuilder`] still accepts.
pub mod state {
    mod sealed {
        pub trait Sealed {}
    }

    /// Nothing added yet.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Unrestricted;

    /// At least one value option was added.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct OptionsOnly;

    /// At least one subcommand was added.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SubcommandsOnly;

    /// At least one subcommand group was added.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SubcommandGroupsOnly;

    impl sealed::Sealed for Unrestricted {}
    impl sealed::Sealed for OptionsOnly {}
    impl sealed::Sealed for SubcommandsOnly {}
    impl sealed::Sealed for SubcommandGroupsOnly {}

    pub trait AcceptsOptions: sealed::Sealed {}
    impl AcceptsOptions for Unrestricted {}
    impl AcceptsOptions for OptionsOnly {}

    pub trait AcceptsSubcommands: sealed::Sealed {}
    impl AcceptsSubcommands for Unrestricted {}
    impl AcceptsSubcommands for SubcommandsOnly {}

    pub trait AcceptsSubcommandGroups: sealed::Sealed {}
    impl AcceptsSubcommandGroups for Unrestricted {}
    impl AcceptsSubcommandGroups for SubcommandGroupsOnly {}
}

/// Root options must not mix subcommands with groups, nor either with value
/// options.
fn check_root_kinds(
    kinds: impl IntoIterator<Item = CommandOptionType>,
) -> Result<(), StructuralError> {
    let (mut subcommands, mut groups, mut values) = (false, false, false);

    for kind in kinds {
        match kind {
            CommandOptionType::Subcommand => subcommands = true,
            CommandOptionType::SubcommandGroup => groups = true,
            _ => values = true,
        }
    }

    if subcommands && groups {
        return Err(StructuralError::SubcommandsAndGroups);
    }

    if values && (subcommands || groups) {
        return Err(StructuralError::OptionsAndSubcommands);
    }

    Ok(())
}

/// Builder for a slash command registration.
#[derive(Clone, Debug, PartialEq)]
pub struct SlashCommandBuilder<S = state::Unrestricted> {
    names: NameAndDescription,
    options: Vec<CommandOption>,
    default_permission: Option<bool>,
    state: PhantomData<S>,
}

impl SlashCommandBuilder {
    pub fn new() -> Self {
        Self {
            names: NameAndDescription::default(),
            options: Vec::new(),
            default_permission: None,
            state: PhantomData,
        }
    }
}

impl Default for SlashCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SlashCommandBuilder<S> {
    fn narrow<T>(self) -> SlashCommandBuilder<T> {
        SlashCommandBuilder {
            names: self.names,
            options: self.options,
            default_permission: self.default_permission,
            state: PhantomData,
        }
    }

    /// Whether the command is enabled by default when added to a guild.
    pub fn set_default_permission(mut self, default_permission: bool) -> Self {
        self.default_permission = Some(default_permission);
        self
    }

    pub const fn default_permission(&self) -> Option<bool> {
        self.default_permission
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Append any option, checking the option cap and root homogeneity.
    pub fn add_option(mut self, option: impl Into<CommandOption>) -> Result<Self, BuildError> {
        let option = option.into();

        validate::max_items("options", self.options.len(), 1, MAX_OPTIONS)?;
        check_root_kinds(
            self.options
                .iter()
                .map(CommandOption::kind)
                .chain(iter::once(option.kind())),
        )?;
        self.options.push(option);

        Ok(self)
    }

    pub fn build(&self) -> Result<ApplicationCommand, BuildError> {
        let (name, description) = self.names.validated()?;

        validate::max_items("options", 0, self.options.len(), MAX_OPTIONS)?;
        check_root_kinds(self.options.iter().map(CommandOption::kind))?;
        let options = self
            .options
            .iter()
            .map(CommandOption::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApplicationCommand {
            name: name.to_owned(),
            description: description.to_owned(),
            options,
            default_permission: self.default_permission,
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("SlashCommandBuilder", &self.build()?)
    }
}

impl<S> NamedDescribed for SlashCommandBuilder<S> {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.names
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.names
    }
}

impl<S: AcceptsOptions> OptionContainer for SlashCommandBuilder<S> {
    type WithOptions = SlashCommandBuilder<state::OptionsOnly>;

    fn push_value_option(self, option: CommandOption) -> Result<Self::WithOptions, BuildError> {
        if option.kind().is_container() {
            return Err(BuildError::TypeMismatch {
                expected: "value option",
                received: option.builder_name(),
            });
        }

        self.add_option(option).map(Self::narrow)
    }
}

impl<S: AcceptsSubcommands> SlashCommandBuilder<S> {
    pub fn add_subcommand(
        self,
        subcommand: SubcommandBuilder,
    ) -> Result<SlashCommandBuilder<state::SubcommandsOnly>, BuildError> {
        self.add_option(subcommand).map(Self::narrow)
    }

    /// Configure a fresh [`SubcommandBuilder`] and append it.
    pub fn add_subcommand_with<F, R>(
        self,
        configure: F,
    ) -> Result<SlashCommandBuilder<state::SubcommandsOnly>, BuildError>
    where
        F: FnOnce(SubcommandBuilder) -> Result<R, BuildError>,
        R: Into<CommandOption>,
    {
        let option = expect_kind::<SubcommandBuilder>(configure(SubcommandBuilder::new())?.into())?;
        self.add_option(option).map(Self::narrow)
    }
}

impl<S: AcceptsSubcommandGroups> SlashCommandBuilder<S> {
    pub fn add_subcommand_group(
        self,
        group: SubcommandGroupBuilder,
    ) -> Result<SlashCommandBuilder<state::SubcommandGroupsOnly>, BuildError> {
        self.add_option(group).map(Self::narrow)
    }

    /// Configure a fresh [`SubcommandGroupBuilder`] and append it.
    pub fn add_subcommand_group_with<F, R>(
        self,
        configure: F,
    ) -> Result<SlashCommandBuilder<state::SubcommandGroupsOnly>, BuildError>
    where
        F: FnOnce(SubcommandGroupBuilder) -> Result<R, BuildError>,
        R: Into<CommandOption>,
    {
        let configured = configure(SubcommandGroupBuilder::new())?;
        let option = expect_kind::<SubcommandGroupBuilder>(configured.into())?;
        self.add_option(option).map(Self::narrow)
    }
}
