//! Concrete value options.

use std::fmt::Display;

use crate::error::{BuildError, StructuralError};
use crate::types::channel::ChannelType;
use crate::types::command::{ApplicationCommandOption, CommandOptionType, CommandOptionValue};
use crate::validate;

use super::channel_types::HasChannelTypes;
use super::choices::{ChoiceList, HasChoices};
use super::container::CommandOption;
use super::shared::{NameAndDescription, NamedDescribed, OptionBase, OptionBuilder, ValueOption};

macro_rules! value_option {
    ($option:ident, $variant:ident) => {
        impl $option {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl NamedDescribed for $option {
            fn name_and_description(&self) -> &NameAndDescription {
                &self.base.names
            }

            fn name_and_description_mut(&mut self) -> &mut NameAndDescription {
                &mut self.base.names
            }
        }

        impl ValueOption for $option {
            fn base(&self) -> &OptionBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut OptionBase {
                &mut self.base
            }
        }

        impl From<$option> for CommandOption {
            fn from(option: $option) -> Self {
                Self::$variant(option)
            }
        }
    };
}

macro_rules! plain_option {
    ($(#[$meta:meta])* $option:ident, $variant:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $option {
            base: OptionBase,
        }

        value_option!($option, $variant);

        impl OptionBuilder for $option {
            const KIND: CommandOptionType = CommandOptionType::$variant;

            fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
                self.base.build(Self::KIND)
            }
        }
    };
}

plain_option!(
    /// A true/false option.
    BooleanOption,
    Boolean
);
plain_option!(
    /// Resolves to a user.
    UserOption,
    User
);
plain_option!(
    /// Resolves to a role.
    RoleOption,
    Role
);
plain_option!(
    /// Resolves to a user or a role.
    MentionableOption,
    Mentionable
);

/// Fails when both bounds are set and `min > max`.
fn ordered_bounds<T: PartialOrd + Display>(
    min: Option<T>,
    max: Option<T>,
) -> Result<(), StructuralError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(StructuralError::InvertedRange {
            min_field: "min_value",
            max_field: "max_value",
            min: min.to_string(),
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// String
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringOption {
    base: OptionBase,
    choices: ChoiceList<String>,
}

value_option!(StringOption, String);

impl HasChoices for StringOption {
    type Value = String;

    fn choice_list(&self) -> &ChoiceList<String> {
        &self.choices
    }

    fn choice_list_mut(&mut self) -> &mut ChoiceList<String> {
        &mut self.choices
    }
}

impl OptionBuilder for StringOption {
    const KIND: CommandOptionType = CommandOptionType::String;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let mut option = self.base.build(Self::KIND)?;
        self.choices.apply(&mut option)?;

        Ok(option)
    }
}

// ---------------------------------------------------------------------------
// Integer
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegerOption {
    base: OptionBase,
    choices: ChoiceList<i64>,
    min_value: Option<i64>,
    max_value: Option<i64>,
}

value_option!(IntegerOption, Integer);

impl IntegerOption {
    pub fn set_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn set_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub const fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    pub const fn max_value(&self) -> Option<i64> {
        self.max_value
    }
}

impl HasChoices for IntegerOption {
    type Value = i64;

    fn choice_list(&self) -> &ChoiceList<i64> {
        &self.choices
    }

    fn choice_list_mut(&mut self) -> &mut ChoiceList<i64> {
        &mut self.choices
    }
}

impl OptionBuilder for IntegerOption {
    const KIND: CommandOptionType = CommandOptionType::Integer;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let mut option = self.base.build(Self::KIND)?;
        self.choices.apply(&mut option)?;

        ordered_bounds(self.min_value, self.max_value)?;
        option.min_value = self.min_value.map(CommandOptionValue::Integer);
        option.max_value = self.max_value.map(CommandOptionValue::Integer);

        Ok(option)
    }
}

// ---------------------------------------------------------------------------
// Number
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberOption {
    base: OptionBase,
    choices: ChoiceList<f64>,
    min_value: Option<f64>,
    max_value: Option<f64>,
}

value_option!(NumberOption, Number);

impl NumberOption {
    pub fn set_min_value(mut self, min_value: f64) -> Result<Self, BuildError> {
        validate::finite("min_value", min_value)?;
        self.min_value = Some(min_value);

        Ok(self)
    }

    pub fn set_max_value(mut self, max_value: f64) -> Result<Self, BuildError> {
        validate::finite("max_value", max_value)?;
        self.max_value = Some(max_value);

        Ok(self)
    }

    pub const fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    pub const fn max_value(&self) -> Option<f64> {
        self.max_value
    }
}

impl HasChoices for NumberOption {
    type Value = f64;

    fn choice_list(&self) -> &ChoiceList<f64> {
        &self.choices
    }

    fn choice_list_mut(&mut self) -> &mut ChoiceList<f64> {
        &mut self.choices
    }
}

impl OptionBuilder for NumberOption {
    const KIND: CommandOptionType = CommandOptionType::Number;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let mut option = self.base.build(Self::KIND)?;
        self.choices.apply(&mut option)?;

        if let Some(min_value) = self.min_value {
            validate::finite("min_value", min_value)?;
        }
        if let Some(max_value) = self.max_value {
            validate::finite("max_value", max_value)?;
        }
        ordered_bounds(self.min_value, self.max_value)?;
        option.min_value = self.min_value.map(CommandOptionValue::Number);
        option.max_value = self.max_value.map(CommandOptionValue::Number);

        Ok(option)
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelOption {
    base: OptionBase,
    channel_types: Option<Vec<ChannelType>>,
}

value_option!(ChannelOption, Channel);

impl HasChannelTypes for ChannelOption {
    fn channel_type_list(&self) -> Option<&[ChannelType]> {
        self.channel_types.as_deref()
    }

    fn channel_type_list_mut(&mut self) -> &mut Option<Vec<ChannelType>> {
        &mut self.channel_types
    }
}

impl OptionBuilder for ChannelOption {
    const KIND: CommandOptionType = CommandOptionType::Channel;

    fn build(&self) -> Result<ApplicationCommandOption, BuildError> {
        let mut option = self.base.build(Self::KIND)?;

        for channel_type in self.channel_types() {
            validate::channel_type(*channel_type)?;
        }
        option.channel_types.clone_from(&self.channel_types);

        Ok(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldErrorType;
    use serde_json::json;
    use static_assertions::assert_impl_all;

    assert_impl_all!(BooleanOption: Clone, Send, Sync);
    assert_impl_all!(StringOption: Clone, Send, Sync);
    assert_impl_all!(NumberOption: Clone, Send, Sync);
    assert_impl_all!(ChannelOption: Clone, Send, Sync);

    #[test]
    fn each_option_emits_its_discriminant() {
        fn kind_of(option: impl OptionBuilder) -> serde_json::Value {
            let option = option.set_name("opt").unwrap().set_description("An option").unwrap();
            option.to_json().unwrap()["type"].clone()
        }

        assert_eq!(kind_of(StringOption::new()), json!(3));
        assert_eq!(kind_of(IntegerOption::new()), json!(4));
        assert_eq!(kind_of(BooleanOption::new()), json!(5));
        assert_eq!(kind_of(UserOption::new()), json!(6));
        assert_eq!(kind_of(ChannelOption::new()), json!(7));
        assert_eq!(kind_of(RoleOption::new()), json!(8));
        assert_eq!(kind_of(MentionableOption::new()), json!(9));
        assert_eq!(kind_of(NumberOption::new()), json!(10));
    }

    #[test]
    fn integer_bounds_are_emitted() {
        let option = IntegerOption::new()
            .set_name("amount")
            .unwrap()
            .set_description("How many")
            .unwrap()
            .set_required(true)
            .set_min_value(1)
            .set_max_value(10);

        assert_eq!(
            option.to_json().unwrap(),
            json!({
                "type": 4,
                "name": "amount",
                "description": "How many",
                "required": true,
                "min_value": 1,
                "max_value": 10
            })
        );
    }

    #[test]
    fn inverted_bounds_fail_at_build() {
        let option = NumberOption::new()
            .set_name("ratio")
            .unwrap()
            .set_description("A ratio")
            .unwrap()
            .set_min_value(2.5)
            .unwrap()
            .set_max_value(0.5)
            .unwrap();

        assert!(matches!(
            option.build().unwrap_err().as_structural(),
            Some(StructuralError::InvertedRange { .. })
        ));
    }

    #[test]
    fn number_bounds_must_be_finite() {
        let err = NumberOption::new().set_min_value(f64::INFINITY).unwrap_err();
        assert_eq!(
            err.as_field().map(|e| e.kind()),
            Some(&FieldErrorType::NotFinite)
        );
    }

    #[test]
    fn number_choices_keep_fractions() {
        let option = NumberOption::new()
            .set_name("fraction")
            .unwrap()
            .set_description("Pick a fraction")
            .unwrap()
            .add_choice("half", 0.5)
            .unwrap();

        assert_eq!(
            option.to_json().unwrap()["choices"],
            json!([{ "name": "half", "value": 0.5 }])
        );
    }
}
