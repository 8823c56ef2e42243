use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::BuildError;
use crate::types::component::{ActionRow, ComponentType};

use super::ComponentBuilder;

const ROW_CHILDREN: &str = "InteractionButtonBuilder, LinkButtonBuilder or SelectMenuBuilder";

/// A horizontal row of buttons or a select menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionRowBuilder {
    components: Vec<ComponentBuilder>,
}

/// Rows cannot nest.
fn check_children(components: &[ComponentBuilder]) -> Result<(), BuildError> {
    match components
        .iter()
        .find(|component| matches!(component, ComponentBuilder::ActionRow(_)))
    {
        Some(row) => Err(BuildError::TypeMismatch {
            expected: ROW_CHILDREN,
            received: row.builder_name(),
        }),
        None => Ok(()),
    }
}

impl ActionRowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(self, component: impl Into<ComponentBuilder>) -> Result<Self, BuildError> {
        self.add_components([component])
    }

    /// Append components in order. A batch holding an action row is rejected
    /// whole.
    pub fn add_components<C: Into<ComponentBuilder>>(
        mut self,
        components: impl IntoIterator<Item = C>,
    ) -> Result<Self, BuildError> {
        let batch: Vec<ComponentBuilder> = components.into_iter().map(Into::into).collect();

        check_children(&batch)?;
        self.components.extend(batch);

        Ok(self)
    }

    /// Replace every component.
    pub fn set_components<C: Into<ComponentBuilder>>(
        mut self,
        components: impl IntoIterator<Item = C>,
    ) -> Result<Self, BuildError> {
        let batch: Vec<ComponentBuilder> = components.into_iter().map(Into::into).collect();

        check_children(&batch)?;
        self.components = batch;

        Ok(self)
    }

    pub fn components(&self) -> &[ComponentBuilder] {
        &self.components
    }

    pub fn build(&self) -> Result<ActionRow, BuildError> {
        check_children(&self.components)?;

        Ok(ActionRow {
            kind: ComponentType::ActionRow,
            components: self
                .components
                .iter()
                .map(ComponentBuilder::build)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("ActionRowBuilder", &self.build()?)
    }
}

impl From<ActionRow> for ActionRowBuilder {
    fn from(row: ActionRow) -> Self {
        Self {
            components: row.components.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::component::{InteractionButtonBuilder, LinkButtonBuilder, SharedButton};
    use crate::types::component::ButtonStyle;
    use serde_json::json;

    fn button(id: &str) -> InteractionButtonBuilder {
        InteractionButtonBuilder::new()
            .set_style(ButtonStyle::Secondary)
            .unwrap()
            .set_custom_id(id)
            .unwrap()
            .set_label(id)
            .unwrap()
    }

    #[test]
    fn row_keeps_insertion_order() {
        let link = LinkButtonBuilder::new()
            .set_url("https://example.com")
            .unwrap()
            .set_label("Site")
            .unwrap();
        let row = ActionRowBuilder::new()
            .add_components([button("a"), button("b")])
            .unwrap()
            .add_component(link)
            .unwrap();

        assert_eq!(
            row.to_json().unwrap(),
            json!({
                "type": 1,
                "components": [
                    { "type": 2, "style": 2, "label": "a", "custom_id": "a" },
                    { "type": 2, "style": 2, "label": "b", "custom_id": "b" },
                    { "type": 2, "style": 5, "label": "Site", "url": "https://example.com" }
                ]
            })
        );
    }

    #[test]
    fn nested_rows_are_rejected() {
        let row = ActionRowBuilder::new().add_component(button("a")).unwrap();
        let err = row
            .clone()
            .add_components([ComponentBuilder::from(button("b")), ActionRowBuilder::new().into()])
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::TypeMismatch {
                received: "ActionRowBuilder",
                ..
            }
        ));
        assert_eq!(row.components().len(), 1);
    }

    #[test]
    fn set_components_replaces() {
        let row = ActionRowBuilder::new()
            .add_component(button("a"))
            .unwrap()
            .set_components([button("b")])
            .unwrap();
        assert_eq!(row.components().len(), 1);
        assert_eq!(row.to_json().unwrap()["components"][0]["custom_id"], json!("b"));
    }
}
