//! Behavior shared by every command, subcommand, and option builder.

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, FieldError};
use crate::types::command::{ApplicationCommandOption, CommandOptionType};
use crate::validate;

use super::container::{builder_name, CommandOption};

/// A name and description pair, both unset until their setter succeeds.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameAndDescription {
    name: Option<String>,
    description: Option<String>,
}

impl NameAndDescription {
    /// Both values, re-validated. Unset values fail as missing.
    pub(crate) fn validated(&self) -> Result<(&str, &str), FieldError> {
        let name = validate::required("name", self.name.as_deref())?;
        validate::command_name(name)?;

        let description = validate::required("description", self.description.as_deref())?;
        validate::command_description(description)?;

        Ok((name, description))
    }
}

/// Anything carrying a command-style name and description.
pub trait NamedDescribed: Sized {
    fn name_and_description(&self) -> &NameAndDescription;

    fn name_and_description_mut(&mut self) -> &mut NameAndDescription;

    /// Set the name: 1 to 32 lowercase letters, digits, `-` or `_`.
    fn set_name(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        validate::command_name(&name)?;
        self.name_and_description_mut().name = Some(name);

        Ok(self)
    }

    /// Set the description: 1 to 100 characters.
    fn set_description(mut self, description: impl Into<String>) -> Result<Self, BuildError> {
        let description = description.into();
        validate::command_description(&description)?;
        self.name_and_description_mut().description = Some(description);

        Ok(self)
    }

    fn name(&self) -> Option<&str> {
        self.name_and_description().name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.name_and_description().description.as_deref()
    }
}

/// Fields every value option has: names plus the `required` flag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OptionBase {
    pub(crate) names: NameAndDescription,
    pub(crate) required: bool,
}

impl OptionBase {
    /// The minimal wire shape of a value option, `required` always present.
    pub(crate) fn build(
        &self,
        kind: CommandOptionType,
    ) -> Result<ApplicationCommandOption, BuildError> {
        let (name, description) = self.names.validated()?;
        let mut option = ApplicationCommandOption::new(kind, name, description);
        option.required = Some(self.required);

        Ok(option)
    }
}

/// A builder producing exactly one node of a command's option tree.
pub trait OptionBuilder: NamedDescribed + Into<CommandOption> {
    /// Discriminant this builder always emits.
    const KIND: CommandOptionType;

    /// Validate and return the wire option.
    fn build(&self) -> Result<ApplicationCommandOption, BuildError>;

    fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value(builder_name(Self::KIND), &self.build()?)
    }
}

/// A leaf option that holds a value instead of other options.
pub trait ValueOption: OptionBuilder {
    fn base(&self) -> &OptionBase;

    fn base_mut(&mut self) -> &mut OptionBase;

    fn set_required(mut self, required: bool) -> Self {
        self.base_mut().required = required;
        self
    }

    fn required(&self) -> bool {
        self.base().required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::command::BooleanOption;
    use crate::error::FieldErrorType;
    use serde_json::json;

    #[test]
    fn unset_names_fail_as_missing() {
        let err = NameAndDescription::default().validated().unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.kind(), &FieldErrorType::Missing);

        let option = BooleanOption::new().set_name("flag").unwrap();
        let err = option.build().unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("description"));
    }

    #[test]
    fn setters_reject_invalid_values_and_keep_state() {
        let option = BooleanOption::new().set_name("flag").unwrap();
        assert!(option.clone().set_name("Flag").is_err());
        assert!(option.clone().set_description("").is_err());
        assert!(option.clone().set_description("a".repeat(101)).is_err());
        assert_eq!(option.name(), Some("flag"));
        assert_eq!(option.description(), None);
    }

    #[test]
    fn value_option_always_emits_required() {
        let option = BooleanOption::new()
            .set_name("flag")
            .unwrap()
            .set_description("A flag")
            .unwrap();
        assert!(!option.required());
        assert_eq!(
            option.to_json().unwrap(),
            json!({ "type": 5, "name": "flag", "description": "A flag", "required": false })
        );

        let option = option.set_required(true);
        assert_eq!(option.to_json().unwrap()["required"], json!(true));
    }
}
