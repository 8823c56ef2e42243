//! Interaction and link buttons.

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, FieldError, FieldErrorType, StructuralError};
use crate::types::component::{Button, ButtonStyle, ComponentEmoji, ComponentType};
use crate::validate::{self, BUTTON_LABEL_MAX};

/// Fields both button shapes share.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ButtonBase {
    label: Option<String>,
    emoji: Option<ComponentEmoji>,
    disabled: Option<bool>,
}

impl ButtonBase {
    fn check(&self) -> Result<(), BuildError> {
        if self.label.is_some() && self.emoji.is_some() {
            return Err(StructuralError::LabelAndEmoji.into());
        }

        if let Some(label) = &self.label {
            validate::text_length("label", label, 1, BUTTON_LABEL_MAX)?;
        }
        if let Some(emoji) = &self.emoji {
            validate::emoji(emoji)?;
        }

        Ok(())
    }

    fn to_button(&self, style: ButtonStyle) -> Button {
        Button {
            kind: ComponentType::Button,
            style,
            label: self.label.clone(),
            emoji: self.emoji.clone(),
            disabled: self.disabled,
            custom_id: None,
            url: None,
        }
    }

    fn from_button(button: &Button) -> Self {
        Self {
            label: button.label.clone(),
            emoji: button.emoji.clone(),
            disabled: button.disabled,
        }
    }
}

/// Label, emoji, and disabled setters. A button shows a label or an emoji,
/// never both.
pub trait SharedButton: Sized {
    fn button_base(&self) -> &ButtonBase;

    fn button_base_mut(&mut self) -> &mut ButtonBase;

    /// 1 to 80 characters. Fails if an emoji is already set.
    fn set_label(mut self, label: impl Into<String>) -> Result<Self, BuildError> {
        let label = label.into();

        if self.button_base().emoji.is_some() {
            return Err(StructuralError::LabelAndEmoji.into());
        }
        validate::text_length("label", &label, 1, BUTTON_LABEL_MAX)?;
        self.button_base_mut().label = Some(label);

        Ok(self)
    }

    /// Fails if a label is already set.
    fn set_emoji(mut self, emoji: ComponentEmoji) -> Result<Self, BuildError> {
        if self.button_base().label.is_some() {
            return Err(StructuralError::LabelAndEmoji.into());
        }
        validate::emoji(&emoji)?;
        self.button_base_mut().emoji = Some(emoji);

        Ok(self)
    }

    fn set_disabled(mut self, disabled: bool) -> Self {
        self.button_base_mut().disabled = Some(disabled);
        self
    }

    fn label(&self) -> Option<&str> {
        self.button_base().label.as_deref()
    }

    fn emoji(&self) -> Option<&ComponentEmoji> {
        self.button_base().emoji.as_ref()
    }

    fn disabled(&self) -> bool {
        self.button_base().disabled.unwrap_or(false)
    }
}

fn reject_link(style: ButtonStyle) -> Result<(), FieldError> {
    if style == ButtonStyle::Link {
        return Err(FieldError::new(
            "style",
            FieldErrorType::NotAllowed {
                allowed: "Primary, Secondary, Success, Danger",
            },
        )
        .with_value(style));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Interaction button
// ---------------------------------------------------------------------------

/// A button that sends an interaction carrying its `custom_id`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InteractionButtonBuilder {
    base: ButtonBase,
    style: Option<ButtonStyle>,
    custom_id: Option<String>,
}

impl InteractionButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller guarantees `style` is not [`ButtonStyle::Link`].
    pub(super) fn with_style(style: ButtonStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Any style but [`ButtonStyle::Link`].
    pub fn set_style(mut self, style: ButtonStyle) -> Result<Self, BuildError> {
        reject_link(style)?;
        self.style = Some(style);

        Ok(self)
    }

    /// 1 to 100 characters.
    pub fn set_custom_id(mut self, custom_id: impl Into<String>) -> Result<Self, BuildError> {
        let custom_id = custom_id.into();
        validate::custom_id(&custom_id)?;
        self.custom_id = Some(custom_id);

        Ok(self)
    }

    pub const fn style(&self) -> Option<ButtonStyle> {
        self.style
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn build(&self) -> Result<Button, BuildError> {
        let style = *validate::required("style", self.style.as_ref())?;
        reject_link(style)?;

        let custom_id = validate::required("custom_id", self.custom_id.as_deref())?;
        validate::custom_id(custom_id)?;

        self.base.check()?;

        Ok(Button {
            custom_id: Some(custom_id.to_owned()),
            ..self.base.to_button(style)
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("InteractionButtonBuilder", &self.build()?)
    }
}

impl SharedButton for InteractionButtonBuilder {
    fn button_base(&self) -> &ButtonBase {
        &self.base
    }

    fn button_base_mut(&mut self) -> &mut ButtonBase {
        &mut self.base
    }
}

impl From<Button> for InteractionButtonBuilder {
    /// Copies the payload as is; `build` validates it.
    fn from(button: Button) -> Self {
        Self {
            base: ButtonBase::from_button(&button),
            style: Some(button.style),
            custom_id: button.custom_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Link button
// ---------------------------------------------------------------------------

/// A button that opens a URL. Its style is always [`ButtonStyle::Link`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LinkButtonBuilder {
    base: ButtonBase,
    url: Option<String>,
}

impl LinkButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Result<Self, BuildError> {
        let url = url.into();
        validate::url("url", &url)?;
        self.url = Some(url);

        Ok(self)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn build(&self) -> Result<Button, BuildError> {
        let url = validate::required("url", self.url.as_deref())?;
        validate::url("url", url)?;

        self.base.check()?;

        Ok(Button {
            url: Some(url.to_owned()),
            ..self.base.to_button(ButtonStyle::Link)
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("LinkButtonBuilder", &self.build()?)
    }
}

impl SharedButton for LinkButtonBuilder {
    fn button_base(&self) -> &ButtonBase {
        &self.base
    }

    fn button_base_mut(&mut self) -> &mut ButtonBase {
        &mut self.base
    }
}

impl From<Button> for LinkButtonBuilder {
    fn from(button: Button) -> Self {
        Self {
            base: ButtonBase::from_button(&button),
            url: button.url,
        }
    }
}
