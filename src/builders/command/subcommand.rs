//! Subcommands and subcommand groups.

use crate::error::{BuildError, StructuralError};
use crate::types::command::{ApplicationCommandOption, CommandOptionType};
use crate::validate::{self, MAX_OPTIONS};

use super::container::{expect_kind, CommandOption, OptionContainer};
use super::shared::{NameAndDescription, NamedDescribed, OptionBuilder};

/// A subcommand: a named container of value options.
///
/// Subcommands cannot hold other subcommands or groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubcommandBuilder {
    names: NameAndDescription,
    options: Vec<CommandOption>,
}

impl SubcommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Append a value option. Subcommands and groups are rejected, as is a
    /// 26th option.
    pub fn add_option(mut self, option: impl Into<CommandOption>) -> Result<Self, BuildError> {
        let option = option.into();

        reject_container("SubcommandBuilder", &option)?;
        validate::max_items("options", self.options.len(), 1, MAX_OPTIONS)?;
        self.options.push(option);

        Ok(self)
    }
}

fn reject_container(
    container: &'static str,
    option: &CommandOption,
) -> Result<(), StructuralError> {
    if option.kind().is_container() {
        return Err(StructuralError::NestedContainer {
            container,
            child: option.builder_name(),
        });
    }

    Ok(())
}

impl NamedDescribed for SubcommandBuilder {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.names
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.names
    }
}

impl OptionContainer for SubcommandBuilder {
    type WithOptions = Self;

    fn push_value_option(self, option: CommandOption) -> Result<Self, BuildError> {
        self.add_option(option)
    }
}

impl OptionBuilder for SubcommandBuilder {
    const KIND: CommandOptionType = CommandOptionType::Subcommand;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let (name, description) = self.names.validated()?;

        validate::max_items("options", 0, self.options.len(), MAX_OPTIONS)?;
        let options = self
            .options
            .iter()
            .map(|option| {
                reject_container("SubcommandBuilder", option)?;
                option.build()
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        let mut option = ApplicationCommandOption::new(Self::KIND, name, description);
        option.options = Some(options);

        Ok(option)
    }
}

impl From<SubcommandBuilder> for CommandOption {
    fn from(subcommand: SubcommandBuilder) -> Self {
        Self::Subcommand(subcommand)
    }
}

/// A named group of subcommands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubcommandGroupBuilder {
    names: NameAndDescription,
    subcommands: Vec<SubcommandBuilder>,
}

impl SubcommandGroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subcommands(&self) -> &[SubcommandBuilder] {
        &self.subcommands
    }

    pub fn add_subcommand(mut self, subcommand: SubcommandBuilder) -> Result<Self, BuildError> {
        validate::max_items("options", self.subcommands.len(), 1, MAX_OPTIONS)?;
        self.subcommands.push(subcommand);

        Ok(self)
    }

    /// Configure a fresh [`SubcommandBuilder`] and append it.
    pub fn add_subcommand_with<F, R>(self, configure: F) -> Result<Self, BuildError>
    where
        F: FnOnce(SubcommandBuilder) -> Result<R, BuildError>,
        R: Into<CommandOption>,
    {
        let option = expect_kind::<SubcommandBuilder>(configure(SubcommandBuilder::new())?.into())?;
        self.add_option(option)
    }

    /// Append an option, which must be a subcommand.
    pub fn add_option(self, option: impl Into<CommandOption>) -> Result<Self, BuildError> {
        match option.into() {
            CommandOption::Subcommand(subcommand) => self.add_subcommand(subcommand),
            other => Err(StructuralError::NestedContainer {
                container: "SubcommandGroupBuilder",
                child: other.builder_name(),
            }
            .into()),
        }
    }
}

impl NamedDescribed for SubcommandGroupBuilder {
    fn name_and_description(&self) -> &NameAndDescription {
        &self.names
    }

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
        &mut self.names
    }
}

impl OptionBuilder for SubcommandGroupBuilder {
    const KIND: CommandOptionType = CommandOptionType::SubcommandGroup;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let (name, description) = self.names.validated()?;

        validate::max_items("options", 0, self.subcommands.len(), MAX_OPTIONS)?;
        let options = self
            .subcommands
            .iter()
            .map(SubcommandBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        let mut option = ApplicationCommandOption::new(Self::KIND, name, description);
        option.options = Some(options);

        Ok(option)
    }
}

impl From<SubcommandGroupBuilder> for CommandOption {
    fn from(group: SubcommandGroupBuilder) -> Self {
        Self::SubcommandGroup(group)
    }
}
