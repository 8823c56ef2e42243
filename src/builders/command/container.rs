//! The option tree: a sum type over every option builder, and the adders
//! shared by everything that holds value options.

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::BuildError;
use crate::types::command::{ApplicationCommandOption, CommandOptionType};

use super::options::{
    BooleanOption, ChannelOption, IntegerOption, MentionableOption, NumberOption, RoleOption,
    StringOption, UserOption,
};
use super::shared::{NamedDescribed, OptionBuilder};
use super::subcommand::{SubcommandBuilder, SubcommandGroupBuilder};

/// Name of the builder that emits options of `kind`.
pub(crate) const fn builder_name(kind: CommandOptionType) -> &'static str {
    match kind {
        CommandOptionType::Subcommand => "SubcommandBuilder",
        CommandOptionType::SubcommandGroup => "SubcommandGroupBuilder",
        CommandOptionType::String => "StringOption",
        CommandOptionType::Integer => "IntegerOption",
        CommandOptionType::Boolean => "BooleanOption",
        CommandOptionType::User => "UserOption",
        CommandOptionType::Channel => "ChannelOption",
        CommandOptionType::Role => "RoleOption",
        CommandOptionType::Mentionable => "MentionableOption",
        CommandOptionType::Number => "NumberOption",
    }
}

/// Any option builder, as stored in a command or subcommand.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOption {
    Boolean(BooleanOption),
    String(StringOption),
    Integer(IntegerOption),
    Number(NumberOption),
    User(UserOption),
    Role(RoleOption),
    Mentionable(MentionableOption),
    Channel(ChannelOption),
    Subcommand(SubcommandBuilder),
    SubcommandGroup(SubcommandGroupBuilder),
}

impl CommandOption {
    pub const fn kind(&self) -> CommandOptionType {
        match self {
            Self::Boolean(_) => CommandOptionType::Boolean,
            Self::String(_) => CommandOptionType::String,
            Self::Integer(_) => CommandOptionType::Integer,
            Self::Number(_) => CommandOptionType::Number,
            Self::User(_) => CommandOptionType::User,
            Self::Role(_) => CommandOptionType::Role,
            Self::Mentionable(_) => CommandOptionType::Mentionable,
            Self::Channel(_) => CommandOptionType::Channel,
            Self::Subcommand(_) => CommandOptionType::Subcommand,
            Self::SubcommandGroup(_) => CommandOptionType::SubcommandGroup,
        }
    }

    pub const fn builder_name(&self) -> &'static str {
        builder_name(self.kind())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Boolean(option) => option.name(),
            Self::String(option) => option.name(),
            Self::Integer(option) => option.name(),
            Self::Number(option) => option.name(),
            Self::User(option) => option.name(),
            Self::Role(option) => option.name(),
            Self::Mentionable(option) => option.name(),
            Self::Channel(option) => option.name(),
            Self::Subcommand(option) => option.name(),
            Self::SubcommandGroup(option) => option.name(),
        }
    }

    pub fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        match self {
            Self::Boolean(option) => option.build(),
            Self::String(option) => option.build(),
            Self::Integer(option) => option.build(),
            Self::Number(option) => option.build(),
            Self::User(option) => option.build(),
            Self::Role(option) => option.build(),
            Self::Mentionable(option) => option.build(),
            Self::Channel(option) => option.build(),
            Self::Subcommand(option) => option.build(),
            Self::SubcommandGroup(option) => option.build(),
        }
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value(self.builder_name(), &self.build()?)
    }
}

/// Fails unless `option` was produced by a `T` builder.
pub(crate) fn expect_kind<T: OptionBuilder>(
    option: CommandOption,
) -> Result<CommandOption, BuildError> {
    if option.kind() == T::KIND {
        Ok(option)
    } else {
        Err(BuildError::TypeMismatch {
            expected: builder_name(T::KIND),
            received: option.builder_name(),
        })
    }
}

macro_rules! value_option_adders {
    ($($option:ident => $add:ident, $add_with:ident;)*) => {
        $(
            #[doc = concat!("Append a [`", stringify!($option), "`].")]
            fn $add(self, option: $option) -> Result<Self::WithOptions, BuildError> {
                self.push_value_option(option.into())
            }

            #[doc = concat!(
                "Configure a fresh [`", stringify!($option), "`] and append it. ",
                "Returning any other builder from `configure` is a type mismatch."
            )]
            fn $add_with<F, R>(self, configure: F) -> Result<Self::WithOptions, BuildError>
            where
                F: FnOnce($option) -> Result<R, BuildError>,
                R: Into<CommandOption>,
            {
                let option = expect_kind::<$option>(configure($option::new())?.into())?;
                self.push_value_option(option)
            }
        )*
    };
}

/// Builders that accept value options.
pub trait OptionContainer: Sized {
    /// The builder returned after a value option was added.
    type WithOptions;

    /// Append an option already known to be a value option.
    #[doc(hidden)]
    fn push_value_option(self, option: CommandOption) -> Result<Self::WithOptions, BuildError>;

    value_option_adders! {
        BooleanOption => add_boolean_option, add_boolean_option_with;
        StringOption => add_string_option, add_string_option_with;
        IntegerOption => add_integer_option, add_integer_option_with;
        NumberOption => add_number_option, add_number_option_with;
        UserOption => add_user_option, add_user_option_with;
        RoleOption => add_role_option, add_role_option_with;
        MentionableOption => add_mentionable_option, add_mentionable_option_with;
        ChannelOption => add_channel_option, add_channel_option_with;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::command::{HasChoices, SlashCommandBuilder};

    #[test]
    fn configurator_returning_wrong_builder_is_a_type_mismatch() {
        let err = SlashCommandBuilder::new()
            .add_string_option_with(|_| {
                BooleanOption::new()
                    .set_name("flag")?
                    .set_description("A flag")
            })
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::TypeMismatch {
                expected: "StringOption",
                received: "BooleanOption",
            }
        ));
    }

    #[test]
    fn configurator_errors_propagate() {
        let err = SubcommandBuilder::new()
            .add_integer_option_with(|option| option.set_name("Bad"))
            .unwrap_err();
        assert!(err.as_field().is_some());
    }

    #[test]
    fn configured_option_is_appended() {
        let sub = SubcommandBuilder::new()
            .add_string_option_with(|option| {
                option
                    .set_name("query")?
                    .set_description("What to look up")?
                    .add_choice("All", "all")
            })
            .unwrap();

        assert_eq!(sub.options().len(), 1);
        assert_eq!(sub.options()[0].kind(), CommandOptionType::String);
        assert_eq!(sub.options()[0].name(), Some("query"));
    }
}
