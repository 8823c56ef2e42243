//! Select menus and their options.

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, FieldError, FieldErrorType, StructuralError};
use crate::types::component::{ComponentEmoji, ComponentType, SelectMenu, SelectMenuOption};
use crate::validate::{
    self, SELECT_OPTIONS_MAX, SELECT_OPTION_TEXT_MAX, SELECT_PLACEHOLDER_MAX, SELECT_VALUES_MAX,
};

// ---------------------------------------------------------------------------
// Option
// ---------------------------------------------------------------------------

/// One entry of a select menu.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectMenuOptionBuilder {
    label: Option<String>,
    value: Option<String>,
    description: Option<String>,
    emoji: Option<ComponentEmoji>,
    default: Option<bool>,
}

impl SelectMenuOptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 to 100 characters.
    pub fn set_label(mut self, label: impl Into<String>) -> Result<Self, BuildError> {
        let label = label.into();
        validate::text_length("label", &label, 1, SELECT_OPTION_TEXT_MAX)?;
        self.label = Some(label);

        Ok(self)
    }

    /// 1 to 100 characters.
    pub fn set_value(mut self, value: impl Into<String>) -> Result<Self, BuildError> {
        let value = value.into();
        validate::text_length("value", &value, 1, SELECT_OPTION_TEXT_MAX)?;
        self.value = Some(value);

        Ok(self)
    }

    /// 1 to 100 characters.
    pub fn set_description(mut self, description: impl Into<String>) -> Result<Self, BuildError> {
        let description = description.into();
        validate::text_length("description", &description, 1, SELECT_OPTION_TEXT_MAX)?;
        self.description = Some(description);

        Ok(self)
    }

    pub fn set_emoji(mut self, emoji: ComponentEmoji) -> Result<Self, BuildError> {
        validate::emoji(&emoji)?;
        self.emoji = Some(emoji);

        Ok(self)
    }

    /// Whether the option is selected when the menu is first shown.
    pub fn set_default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn build(&self) -> Result<SelectMenuOption, BuildError> {
        let label = validate::required("label", self.label.as_deref())?;
        validate::text_length("label", label, 1, SELECT_OPTION_TEXT_MAX)?;

        let value = validate::required("value", self.value.as_deref())?;
        validate::text_length("value", value, 1, SELECT_OPTION_TEXT_MAX)?;

        if let Some(description) = &self.description {
            validate::text_length("description", description, 1, SELECT_OPTION_TEXT_MAX)?;
        }
        if let Some(emoji) = &self.emoji {
            validate::emoji(emoji)?;
        }

        Ok(SelectMenuOption {
            label: label.to_owned(),
            value: value.to_owned(),
            description: self.description.clone(),
            emoji: self.emoji.clone(),
            default: self.default,
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("SelectMenuOptionBuilder", &self.build()?)
    }
}

impl From<SelectMenuOption> for SelectMenuOptionBuilder {
    fn from(option: SelectMenuOption) -> Self {
        Self {
            label: Some(option.label),
            value: Some(option.value),
            description: option.description,
            emoji: option.emoji,
            default: option.default,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// A dropdown of up to 25 options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectMenuBuilder {
    custom_id: Option<String>,
    options: Vec<SelectMenuOptionBuilder>,
    placeholder: Option<String>,
    min_values: Option<u8>,
    max_values: Option<u8>,
    disabled: Option<bool>,
}

fn values_in_range(field: &'static str, count: u8) -> Result<(), FieldError> {
    validate::range(field, count, 0, i64::from(SELECT_VALUES_MAX))
}

/// Every option must build on its own; the batch is checked before the menu
/// changes.
fn checked_batch(
    current: usize,
    options: impl IntoIterator<Item = SelectMenuOptionBuilder>,
) -> Result<Vec<SelectMenuOptionBuilder>, BuildError> {
    let batch: Vec<_> = options.into_iter().collect();

    validate::max_items("options", current, batch.len(), SELECT_OPTIONS_MAX)?;
    for option in &batch {
        option.build()?;
    }

    Ok(batch)
}

impl SelectMenuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 to 100 characters.
    pub fn set_custom_id(mut self, custom_id: impl Into<String>) -> Result<Self, BuildError> {
        let custom_id = custom_id.into();
        validate::custom_id(&custom_id)?;
        self.custom_id = Some(custom_id);

        Ok(self)
    }

    /// At most 100 characters.
    pub fn set_placeholder(mut self, placeholder: impl Into<String>) -> Result<Self, BuildError> {
        let placeholder = placeholder.into();
        validate::text_length("placeholder", &placeholder, 0, SELECT_PLACEHOLDER_MAX)?;
        self.placeholder = Some(placeholder);

        Ok(self)
    }

    /// 0 to 25.
    pub fn set_min_values(mut self, min_values: u8) -> Result<Self, BuildError> {
        values_in_range("min_values", min_values)?;
        self.min_values = Some(min_values);

        Ok(self)
    }

    /// 0 to 25.
    pub fn set_max_values(mut self, max_values: u8) -> Result<Self, BuildError> {
        values_in_range("max_values", max_values)?;
        self.max_values = Some(max_values);

        Ok(self)
    }

    pub fn set_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn add_option(self, option: SelectMenuOptionBuilder) -> Result<Self, BuildError> {
        self.add_options([option])
    }

    /// Append options. Either all are added or none are.
    pub fn add_options(
        mut self,
        options: impl IntoIterator<Item = SelectMenuOptionBuilder>,
    ) -> Result<Self, BuildError> {
        let batch = checked_batch(self.options.len(), options)?;
        self.options.extend(batch);

        Ok(self)
    }

    /// Replace every option. On failure the current options are kept.
    pub fn set_options(
        mut self,
        options: impl IntoIterator<Item = SelectMenuOptionBuilder>,
    ) -> Result<Self, BuildError> {
        self.options = checked_batch(0, options)?;
        Ok(self)
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn options(&self) -> &[SelectMenuOptionBuilder] {
        &self.options
    }

    pub fn build(&self) -> Result<SelectMenu, BuildError> {
        let custom_id = validate::required("custom_id", self.custom_id.as_deref())?;
        validate::custom_id(custom_id)?;

        if self.options.is_empty() {
            return Err(FieldError::new("options", FieldErrorType::Empty).into());
        }
        validate::max_items("options", 0, self.options.len(), SELECT_OPTIONS_MAX)?;
        let options = self
            .options
            .iter()
            .map(SelectMenuOptionBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(placeholder) = &self.placeholder {
            validate::text_length("placeholder", placeholder, 0, SELECT_PLACEHOLDER_MAX)?;
        }
        if let Some(min_values) = self.min_values {
            values_in_range("min_values", min_values)?;
        }
        if let Some(max_values) = self.max_values {
            values_in_range("max_values", max_values)?;
        }
        if let (Some(min), Some(max)) = (self.min_values, self.max_values) {
            if min > max {
                return Err(StructuralError::InvertedRange {
                    min_field: "min_values",
                    max_field: "max_values",
                    min: min.to_string(),
                    max: max.to_string(),
                }
                .into());
            }
        }

        Ok(SelectMenu {
            kind: ComponentType::SelectMenu,
            custom_id: custom_id.to_owned(),
            options,
            placeholder: self.placeholder.clone(),
            min_values: self.min_values,
            max_values: self.max_values,
            disabled: self.disabled,
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("SelectMenuBuilder", &self.build()?)
    }
}

impl From<SelectMenu> for SelectMenuBuilder {
    fn from(menu: SelectMenu) -> Self {
        Self {
            custom_id: Some(menu.custom_id),
            options: menu.options.into_iter().map(Into::into).collect(),
            placeholder: menu.placeholder,
            min_values: menu.min_values,
            max_values: menu.max_values,
            disabled: menu.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SelectMenuBuilder: Clone, Send, Sync);

    fn option(value: &str) -> SelectMenuOptionBuilder {
        SelectMenuOptionBuilder::new()
            .set_label(value.to_uppercase())
            .unwrap()
            .set_value(value)
            .unwrap()
    }

    fn menu() -> SelectMenuBuilder {
        SelectMenuBuilder::new().set_custom_id("pick").unwrap()
    }

    #[test]
    fn select_menu_json() {
        let menu = menu()
            .set_placeholder("Nothing selected")
            .unwrap()
            .set_min_values(1)
            .unwrap()
            .set_max_values(2)
            .unwrap()
            .add_options([
                option("a").set_description("First").unwrap().set_default(true),
                option("b"),
            ])
            .unwrap();

        assert_eq!(
            menu.to_json().unwrap(),
            json!({
                "type": 3,
                "custom_id": "pick",
                "options": [
                    { "label": "A", "value": "a", "description": "First", "default": true },
                    { "label": "B", "value": "b" }
                ],
                "placeholder": "Nothing selected",
                "min_values": 1,
                "max_values": 2
            })
        );
    }

    #[test]
    fn select_menu_requires_options() {
        let err = menu().build().unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("options"));
        assert_eq!(err.as_field().map(FieldError::kind), Some(&FieldErrorType::Empty));
    }

    #[test]
    fn select_menu_requires_custom_id() {
        let err = SelectMenuBuilder::new()
            .add_option(option("a"))
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("custom_id"));
    }

    #[test]
    fn twenty_sixth_option_fails_and_keeps_the_menu() {
        let full = menu()
            .add_options((0..25).map(|i| option(&i.to_string())))
            .unwrap();
        assert_eq!(full.options().len(), 25);
        assert!(full.clone().add_option(option("extra")).is_err());

        let partial = menu().add_option(option("a")).unwrap();
        let err = partial
            .clone()
            .add_options([option("b"), SelectMenuOptionBuilder::new()])
            .unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("label"));
        assert_eq!(partial.options().len(), 1);
    }

    #[test]
    fn set_options_replaces() {
        let menu = menu()
            .add_options([option("a"), option("b")])
            .unwrap()
            .set_options([option("c")])
            .unwrap();
        assert_eq!(menu.options().len(), 1);
        assert_eq!(menu.options()[0].value(), Some("c"));
    }

    #[test]
    fn value_counts_are_bounded() {
        assert!(menu().set_min_values(25).is_ok());
        assert!(menu().set_max_values(26).is_err());

        let err = menu()
            .add_option(option("a"))
            .unwrap()
            .set_min_values(3)
            .unwrap()
            .set_max_values(1)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(
            err.as_structural(),
            Some(StructuralError::InvertedRange { .. })
        ));
    }

    #[test]
    fn placeholder_length() {
        assert!(menu().set_placeholder("p".repeat(100)).is_ok());
        assert!(menu().set_placeholder("p".repeat(101)).is_err());
    }
}
