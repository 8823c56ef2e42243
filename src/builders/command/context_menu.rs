use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, FieldError, FieldErrorType};
use crate::types::command::{CommandType, ContextMenuCommand};
use crate::validate;

/// Right-click command on a user or a message. Has a name but no
/// description or options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContextMenuCommandBuilder {
    name: Option<String>,
    kind: Option<CommandType>,
    default_permission: Option<bool>,
}

fn check_kind(kind: CommandType) -> Result<(), FieldError> {
    match kind {
        CommandType::User | CommandType::Message => Ok(()),
        CommandType::ChatInput => Err(FieldError::new(
            "type",
            FieldErrorType::NotAllowed {
                allowed: "User, Message",
            },
        )
        .with_value("ChatInput")),
    }
}

impl ContextMenuCommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 to 32 characters; spaces are allowed, uppercase letters are not.
    pub fn set_name(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        validate::context_menu_name(&name)?;
        self.name = Some(name);

        Ok(self)
    }

    pub fn set_type(mut self, kind: CommandType) -> Result<Self, BuildError> {
        check_kind(kind)?;
        self.kind = Some(kind);

        Ok(self)
    }

    pub fn set_default_permission(mut self, default_permission: bool) -> Self {
        self.default_permission = Some(default_permission);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn kind(&self) -> Option<CommandType> {
        self.kind
    }

    pub fn build(&self) -> Result<ContextMenuCommand, BuildError> {
        let name = validate::required("name", self.name.as_deref())?;
        validate::context_menu_name(name)?;

        let kind = *validate::required("type", self.kind.as_ref())?;
        check_kind(kind)?;

        Ok(ContextMenuCommand {
            name: name.to_owned(),
            kind,
            default_permission: self.default_permission,
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("ContextMenuCommandBuilder", &self.build()?)
    }
}
