//! Predefined choices and autocomplete for string, integer, and number options.
//!
//! The two are mutually exclusive: whichever is enabled first blocks the
//! other, and `build` checks again.

use crate::error::{BuildError, FieldError, StructuralError};
use crate::types::command::{
    ApplicationCommandOption, ApplicationCommandOptionChoice, CommandOptionValue,
};
use crate::validate::{self, CHOICE_NAME_MAX, CHOICE_STRING_VALUE_MAX, MAX_CHOICES};

/// A value type an option can offer as a choice.
pub trait ChoiceValue: Clone {
    fn validate(&self) -> Result<(), FieldError>;

    fn into_option_value(self) -> CommandOptionValue;
}

impl ChoiceValue for String {
    fn validate(&self) -> Result<(), FieldError> {
        validate::text_length("choices.value", self, 1, CHOICE_STRING_VALUE_MAX)
    }

    fn into_option_value(self) -> CommandOptionValue {
        CommandOptionValue::String(self)
    }
}

impl ChoiceValue for i64 {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }

    fn into_option_value(self) -> CommandOptionValue {
        CommandOptionValue::Integer(self)
    }
}

impl ChoiceValue for f64 {
    fn validate(&self) -> Result<(), FieldError> {
        validate::finite("choices.value", *self)
    }

    fn into_option_value(self) -> CommandOptionValue {
        CommandOptionValue::Number(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Choice<T> {
    pub name: String,
    pub value: T,
}

/// Choice storage embedded in each option that supports it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceList<T> {
    choices: Option<Vec<Choice<T>>>,
    autocomplete: Option<bool>,
}

impl<T> Default for ChoiceList<T> {
    fn default() -> Self {
        Self {
            choices: None,
            autocomplete: None,
        }
    }
}

impl<T: ChoiceValue> ChoiceList<T> {
    pub(crate) fn as_slice(&self) -> &[Choice<T>] {
        self.choices.as_deref().unwrap_or_default()
    }

    pub(crate) fn autocomplete(&self) -> bool {
        self.autocomplete.unwrap_or(false)
    }

    fn check_entry(name: &str, value: &T) -> Result<(), FieldError> {
        validate::text_length("choices.name", name, 1, CHOICE_NAME_MAX)?;
        value.validate()
    }

    fn check_room(&self, adding: usize) -> Result<(), StructuralError> {
        if self.autocomplete() {
            return Err(StructuralError::ChoicesAndAutocomplete);
        }

        validate::max_items("choices", self.as_slice().len(), adding, MAX_CHOICES)
    }

    pub(crate) fn push(&mut self, name: String, value: T) -> Result<(), BuildError> {
        self.check_room(1)?;
        Self::check_entry(&name, &value)?;
        self.choices
            .get_or_insert_with(Vec::new)
            .push(Choice { name, value });

        Ok(())
    }

    /// Validates the whole batch before appending any of it.
    pub(crate) fn extend(&mut self, batch: Vec<Choice<T>>) -> Result<(), BuildError> {
        if batch.is_empty() {
            return Ok(());
        }

        self.check_room(batch.len())?;
        for choice in &batch {
            Self::check_entry(&choice.name, &choice.value)?;
        }
        self.choices.get_or_insert_with(Vec::new).extend(batch);

        Ok(())
    }

    pub(crate) fn set_autocomplete(&mut self, autocomplete: bool) -> Result<(), StructuralError> {
        if autocomplete && !self.as_slice().is_empty() {
            return Err(StructuralError::ChoicesAndAutocomplete);
        }

        self.autocomplete = Some(autocomplete);
        Ok(())
    }

    /// Re-check everything and copy the choices onto a wire option.
    pub(crate) fn apply(&self, option: &mut ApplicationCommandOption) -> Result<(), BuildError> {
        let choices = self.as_slice();

        if self.autocomplete() && !choices.is_empty() {
            return Err(StructuralError::ChoicesAndAutocomplete.into());
        }
        validate::max_items("choices", 0, choices.len(), MAX_CHOICES)?;
        for choice in choices {
            Self::check_entry(&choice.name, &choice.value)?;
        }

        option.autocomplete = self.autocomplete;
        option.choices = self.choices.as_ref().map(|choices| {
            choices
                .iter()
                .map(|choice| ApplicationCommandOptionChoice {
                    name: choice.name.clone(),
                    value: choice.value.clone().into_option_value(),
                })
                .collect()
        });

        Ok(())
    }
}

/// Options that can offer predefined choices or autocomplete.
pub trait HasChoices: Sized {
    type Value: ChoiceValue;

    fn choice_list(&self) -> &ChoiceList<Self::Value>;

    fn choice_list_mut(&mut self) -> &mut ChoiceList<Self::Value>;

    /// Append one choice. Fails once autocomplete is on or 25 choices exist.
    fn add_choice(
        mut self,
        name: impl Into<String>,
        value: impl Into<Self::Value>,
    ) -> Result<Self, BuildError> {
        self.choice_list_mut().push(name.into(), value.into())?;
        Ok(self)
    }

    /// Append several choices. Either all are added or none are.
    fn add_choices<I, N, V>(mut self, choices: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Self::Value>,
    {
        let batch = choices
            .into_iter()
            .map(|(name, value)| Choice {
                name: name.into(),
                value: value.into(),
            })
            .collect();
        self.choice_list_mut().extend(batch)?;

        Ok(self)
    }

    /// Turning autocomplete on fails if any choice was added.
    fn set_autocomplete(mut self, autocomplete: bool) -> Result<Self, BuildError> {
        self.choice_list_mut().set_autocomplete(autocomplete)?;
        Ok(self)
    }

    fn choices(&self) -> &[Choice<Self::Value>] {
        self.choice_list().as_slice()
    }

    fn autocomplete(&self) -> bool {
        self.choice_list().autocomplete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::command::{
        IntegerOption, NamedDescribed, NumberOption, OptionBuilder, StringOption,
    };
    use crate::error::FieldErrorType;
    use serde_json::json;

    fn string_option() -> StringOption {
        StringOption::new()
            .set_name("color")
            .unwrap()
            .set_description("Pick a color")
            .unwrap()
    }

    #[test]
    fn choices_keep_insertion_order() {
        let option = string_option()
            .add_choice("Red", "red")
            .unwrap()
            .add_choices([("Green", "green"), ("Blue", "blue")])
            .unwrap();

        assert_eq!(
            option.to_json().unwrap()["choices"],
            json!([
                { "name": "Red", "value": "red" },
                { "name": "Green", "value": "green" },
                { "name": "Blue", "value": "blue" }
            ])
        );
    }

    #[test]
    fn autocomplete_blocks_choices() {
        let option = string_option().set_autocomplete(true).unwrap();
        let err = option.add_choice("Red", "red").unwrap_err();
        assert_eq!(
            err.as_structural(),
            Some(&StructuralError::ChoicesAndAutocomplete)
        );
    }

    #[test]
    fn choices_block_autocomplete() {
        let option = string_option().add_choice("Red", "red").unwrap();
        assert!(option.clone().set_autocomplete(true).is_err());
        assert!(option.set_autocomplete(false).is_ok());
    }

    #[test]
    fn autocomplete_false_is_emitted_without_choices() {
        let json = string_option().set_autocomplete(false).unwrap().to_json().unwrap();
        assert_eq!(json["autocomplete"], json!(false));
        assert!(json.get("choices").is_none());
    }

    #[test]
    fn twenty_sixth_choice_fails() {
        let option = IntegerOption::new()
            .set_name("n")
            .unwrap()
            .set_description("A number")
            .unwrap()
            .add_choices((0..25).map(|i: i64| (format!("choice {i}"), i)))
            .unwrap();
        assert_eq!(option.choices().len(), 25);

        let err = option.add_choice("extra", 25).unwrap_err();
        assert!(matches!(
            err.as_structural(),
            Some(StructuralError::TooMany { max: 25, count: 26, .. })
        ));
    }

    #[test]
    fn failing_batch_adds_nothing() {
        let option = string_option().add_choice("Red", "red").unwrap();
        let err = option
            .clone()
            .add_choices([("Green", "green"), ("", "empty-name")])
            .unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("choices.name"));

        let err = option
            .clone()
            .add_choices((0..25).map(|i| (i.to_string(), i.to_string())))
            .unwrap_err();
        assert!(err.as_structural().is_some());
        assert_eq!(option.choices().len(), 1);
    }

    #[test]
    fn choice_values_are_validated_by_type() {
        let err = string_option().add_choice("Long", "v".repeat(101)).unwrap_err();
        assert_eq!(
            err.as_field().map(FieldError::kind),
            Some(&FieldErrorType::TooLong { max: 100 })
        );

        let number = NumberOption::new();
        let err = number.add_choice("nan", f64::NAN).unwrap_err();
        assert_eq!(
            err.as_field().map(FieldError::kind),
            Some(&FieldErrorType::NotFinite)
        );
    }

    #[test]
    fn choice_name_length_boundary() {
        let option = string_option().add_choice("n".repeat(100), "ok").unwrap();
        assert_eq!(option.choices().len(), 1);

        let err = IntegerOption::new().add_choice("n".repeat(101), 1).unwrap_err();
        let field = err.as_field().unwrap();
        assert_eq!(field.field(), "choices.name");
        assert_eq!(field.kind(), &FieldErrorType::TooLong { max: 100 });
    }
}
