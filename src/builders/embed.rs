//! Embed builder.
//!
//! Every setter validates its own argument, so `build` only snapshots the
//! current state.

use serde_json::Value;

use crate::builders::to_json_value;
use crate::error::{BuildError, FieldError};
use crate::types::embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
use crate::types::util::Timestamp;
use crate::validate::{
    self, EMBED_AUTHOR_NAME_MAX, EMBED_COLOR_MAX, EMBED_DESCRIPTION_MAX, EMBED_FIELD_NAME_MAX,
    EMBED_FIELD_VALUE_MAX, EMBED_FOOTER_TEXT_MAX, EMBED_TITLE_MAX, MAX_EMBED_FIELDS,
};

/// Optional links attached to an embed author.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmbedAuthorOptions<'a> {
    pub icon_url: Option<&'a str>,
    pub url: Option<&'a str>,
}

/// Ergonomic builder for [`Embed`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbedBuilder {
    inner: Embed,
}

fn check_field(field: &EmbedField) -> Result<(), FieldError> {
    validate::text_length("fields.name", &field.name, 1, EMBED_FIELD_NAME_MAX)?;
    validate::text_length("fields.value", &field.value, 1, EMBED_FIELD_VALUE_MAX)
}

fn optional_url(field: &'static str, url: Option<&str>) -> Result<Option<String>, FieldError> {
    url.map(|url| validate::url(field, url).map(|()| url.to_owned()))
        .transpose()
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 to 256 characters.
    pub fn set_title(mut self, title: impl Into<String>) -> Result<Self, BuildError> {
        let title = title.into();
        validate::text_length("title", &title, 1, EMBED_TITLE_MAX)?;
        self.inner.title = Some(title);

        Ok(self)
    }

    /// 1 to 4096 characters.
    pub fn set_description(mut self, description: impl Into<String>) -> Result<Self, BuildError> {
        let description = description.into();
        validate::text_length("description", &description, 1, EMBED_DESCRIPTION_MAX)?;
        self.inner.description = Some(description);

        Ok(self)
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Result<Self, BuildError> {
        let url = url.into();
        validate::url("url", &url)?;
        self.inner.url = Some(url);

        Ok(self)
    }

    /// A 24-bit RGB color such as `0xFF6600`.
    pub fn set_color(mut self, color: u32) -> Result<Self, BuildError> {
        validate::range("color", color, 0, i64::from(EMBED_COLOR_MAX))?;
        self.inner.color = Some(color);

        Ok(self)
    }

    pub fn set_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.inner.timestamp = Some(timestamp.into());
        self
    }

    /// Unix epoch milliseconds.
    pub fn set_timestamp_millis(self, unix_milliseconds: i64) -> Result<Self, BuildError> {
        Ok(self.set_timestamp(Timestamp::from_millis(unix_milliseconds)?))
    }

    pub fn set_timestamp_now(self) -> Self {
        self.set_timestamp(Timestamp::now())
    }

    pub fn set_thumbnail(mut self, url: impl Into<String>) -> Result<Self, BuildError> {
        let url = url.into();
        validate::url("thumbnail.url", &url)?;
        self.inner.thumbnail = Some(EmbedMedia::new(url));

        Ok(self)
    }

    pub fn set_image(mut self, url: impl Into<String>) -> Result<Self, BuildError> {
        let url = url.into();
        validate::url("image.url", &url)?;
        self.inner.image = Some(EmbedMedia::new(url));

        Ok(self)
    }

    /// Author name of 1 to 256 characters, with optional icon and link.
    pub fn set_author(
        mut self,
        name: impl Into<String>,
        options: EmbedAuthorOptions<'_>,
    ) -> Result<Self, BuildError> {
        let name = name.into();
        validate::text_length("author.name", &name, 1, EMBED_AUTHOR_NAME_MAX)?;
        let icon_url = optional_url("author.icon_url", options.icon_url)?;
        let url = optional_url("author.url", options.url)?;

        self.inner.author = Some(EmbedAuthor {
            name,
            url,
            icon_url,
        });

        Ok(self)
    }

    /// Footer text of 1 to 2048 characters, with an optional icon.
    pub fn set_footer(
        mut self,
        text: impl Into<String>,
        icon_url: Option<&str>,
    ) -> Result<Self, BuildError> {
        let text = text.into();
        validate::text_length("footer.text", &text, 1, EMBED_FOOTER_TEXT_MAX)?;
        let icon_url = optional_url("footer.icon_url", icon_url)?;

        self.inner.footer = Some(EmbedFooter { text, icon_url });

        Ok(self)
    }

    pub fn clear_title(mut self) -> Self {
        self.inner.title = None;
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.inner.description = None;
        self
    }

    pub fn clear_url(mut self) -> Self {
        self.inner.url = None;
        self
    }

    pub fn clear_color(mut self) -> Self {
        self.inner.color = None;
        self
    }

    pub fn clear_timestamp(mut self) -> Self {
        self.inner.timestamp = None;
        self
    }

    pub fn clear_thumbnail(mut self) -> Self {
        self.inner.thumbnail = None;
        self
    }

    pub fn clear_image(mut self) -> Self {
        self.inner.image = None;
        self
    }

    /// Removes the author along with its icon and link.
    pub fn clear_author(mut self) -> Self {
        self.inner.author = None;
        self
    }

    /// Append a field: name up to 256 characters, value up to 1024.
    pub fn add_field(
        self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Result<Self, BuildError> {
        self.add_fields([EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        }])
    }

    /// Append fields. Either all are added or none are.
    pub fn add_fields(
        mut self,
        fields: impl IntoIterator<Item = EmbedField>,
    ) -> Result<Self, BuildError> {
        let batch: Vec<EmbedField> = fields.into_iter().collect();

        validate::max_items("fields", self.inner.fields.len(), batch.len(), MAX_EMBED_FIELDS)?;
        for field in &batch {
            check_field(field)?;
        }
        self.inner.fields.extend(batch);

        Ok(self)
    }

    /// Remove `delete_count` fields starting at `index` and insert `fields`
    /// in their place. Out of range positions are clamped. The result must
    /// still hold at most 25 fields.
    pub fn splice_fields(
        mut self,
        index: usize,
        delete_count: usize,
        fields: impl IntoIterator<Item = EmbedField>,
    ) -> Result<Self, BuildError> {
        let batch: Vec<EmbedField> = fields.into_iter().collect();
        let len = self.inner.fields.len();
        let start = index.min(len);
        let end = start.saturating_add(delete_count).min(len);

        validate::max_items("fields", len - (end - start), batch.len(), MAX_EMBED_FIELDS)?;
        for field in &batch {
            check_field(field)?;
        }
        self.inner.fields.splice(start..end, batch);

        Ok(self)
    }

    pub fn fields(&self) -> &[EmbedField] {
        &self.inner.fields
    }

    /// Total characters across title, description, footer text, author name,
    /// and every field name and value.
    pub fn length(&self) -> usize {
        let embed = &self.inner;
        let count = |text: Option<&str>| text.map_or(0, |text| text.chars().count());

        count(embed.title.as_deref())
            + count(embed.description.as_deref())
            + count(embed.footer.as_ref().map(|footer| footer.text.as_str()))
            + count(embed.author.as_ref().map(|author| author.name.as_str()))
            + embed
                .fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
    }

    /// Re-run every setter check against the current state. Setters already
    /// enforce these, so this only matters for embeds built with `From`.
    pub fn validate(&self) -> Result<(), BuildError> {
        let embed = &self.inner;

        if let Some(title) = &embed.title {
            validate::text_length("title", title, 1, EMBED_TITLE_MAX)?;
        }
        if let Some(description) = &embed.description {
            validate::text_length("description", description, 1, EMBED_DESCRIPTION_MAX)?;
        }
        optional_url("url", embed.url.as_deref())?;
        if let Some(color) = embed.color {
            validate::range("color", color, 0, i64::from(EMBED_COLOR_MAX))?;
        }
        optional_url("thumbnail.url", embed.thumbnail.as_ref().map(|m| m.url.as_str()))?;
        optional_url("image.url", embed.image.as_ref().map(|m| m.url.as_str()))?;
        if let Some(author) = &embed.author {
            validate::text_length("author.name", &author.name, 1, EMBED_AUTHOR_NAME_MAX)?;
            optional_url("author.icon_url", author.icon_url.as_deref())?;
            optional_url("author.url", author.url.as_deref())?;
        }
        if let Some(footer) = &embed.footer {
            validate::text_length("footer.text", &footer.text, 1, EMBED_FOOTER_TEXT_MAX)?;
            optional_url("footer.icon_url", footer.icon_url.as_deref())?;
        }

        validate::max_items("fields", embed.fields.len(), 0, MAX_EMBED_FIELDS)?;
        embed.fields.iter().try_for_each(check_field)?;

        Ok(())
    }

    /// Snapshot of the current state.
    pub fn build(&self) -> Embed {
        self.inner.clone()
    }

    pub fn to_json(&self) -> Result<Value, BuildError> {
        to_json_value("EmbedBuilder", &self.inner)
    }
}

impl From<Embed> for EmbedBuilder {
    fn from(inner: Embed) -> Self {
        Self { inner }
    }
}

impl TryFrom<Value> for EmbedBuilder {
    type Error = BuildError;

    /// Parse a raw embed object. Fields are taken as is.
    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        serde_json::from_value::<Embed>(raw)
            .map(Self::from)
            .map_err(BuildError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldErrorType, StructuralError};
    use serde_json::json;
    use static_assertions::assert_impl_all;

    assert_impl_all!(EmbedBuilder: Clone, Send, Sync);

    fn field(name: &str) -> EmbedField {
        EmbedField::new(name, "value")
    }

    #[test]
    fn add_field_defaults_inline_to_false() {
        let embed = EmbedBuilder::new().add_field("foo", "bar", false).unwrap();
        assert_eq!(
            embed.to_json().unwrap()["fields"],
            json!([{ "name": "foo", "value": "bar", "inline": false }])
        );
    }

    #[test]
    fn full_embed_json() {
        let embed = EmbedBuilder::new()
            .set_title("Title")
            .unwrap()
            .set_description("Description")
            .unwrap()
            .set_url("https://discord.js.org/")
            .unwrap()
            .set_color(0x00FF00)
            .unwrap()
            .set_timestamp_millis(1_609_459_200_000)
            .unwrap()
            .set_thumbnail("https://example.com/thumb.png")
            .unwrap()
            .set_image("https://example.com/image.png")
            .unwrap()
            .set_author(
                "Author",
                EmbedAuthorOptions {
                    icon_url: Some("https://example.com/icon.png"),
                    url: None,
                },
            )
            .unwrap()
            .set_footer("Footer", None)
            .unwrap()
            .add_field("a", "b", true)
            .unwrap();

        assert_eq!(
            embed.to_json().unwrap(),
            json!({
                "title": "Title",
                "description": "Description",
                "url": "https://discord.js.org/",
                "color": 65280,
                "timestamp": "2021-01-01T00:00:00.000Z",
                "thumbnail": { "url": "https://example.com/thumb.png" },
                "image": { "url": "https://example.com/image.png" },
                "author": { "name": "Author", "icon_url": "https://example.com/icon.png" },
                "footer": { "text": "Footer" },
                "fields": [{ "name": "a", "value": "b", "inline": true }]
            })
        );
    }

    #[test]
    fn timestamps_normalize_to_iso_8601() {
        let from_millis = EmbedBuilder::new().set_timestamp_millis(0).unwrap();
        let from_date = EmbedBuilder::new()
            .set_timestamp(Timestamp::parse("1970-01-01T01:00:00+01:00").unwrap());

        assert_eq!(from_millis.to_json().unwrap()["timestamp"], json!("1970-01-01T00:00:00.000Z"));
        assert_eq!(from_millis, from_date);
    }

    #[test]
    fn color_must_fit_in_24_bits() {
        assert!(EmbedBuilder::new().set_color(0xFF_FFFF).is_ok());
        let err = EmbedBuilder::new().set_color(0x100_0000).unwrap_err();
        assert_eq!(
            err.as_field().map(FieldError::kind),
            Some(&FieldErrorType::OutOfRange { min: 0, max: 0xFF_FFFF })
        );
    }

    #[test]
    fn text_limits() {
        assert!(EmbedBuilder::new().set_title("t".repeat(256)).is_ok());
        assert!(EmbedBuilder::new().set_title("t".repeat(257)).is_err());
        assert!(EmbedBuilder::new().set_description("d".repeat(4097)).is_err());
        assert!(EmbedBuilder::new().set_footer("f".repeat(2049), None).is_err());
        assert!(EmbedBuilder::new()
            .set_author("a".repeat(257), EmbedAuthorOptions::default())
            .is_err());
        assert!(EmbedBuilder::new().add_field("n", "v".repeat(1025), false).is_err());
        assert!(EmbedBuilder::new().add_field("", "v", false).is_err());
    }

    #[test]
    fn urls_are_checked() {
        assert!(EmbedBuilder::new().set_url("foobar").is_err());
        assert!(EmbedBuilder::new().set_image("foobar").is_err());
        assert!(EmbedBuilder::new()
            .set_footer("Footer", Some("not a url"))
            .is_err());
    }

    #[test]
    fn twenty_sixth_field_fails_and_leaves_fields_unchanged() {
        let embed = EmbedBuilder::new()
            .add_fields((0..25).map(|i| field(&format!("f{i}"))))
            .unwrap();
        assert_eq!(embed.fields().len(), 25);

        let err = embed.clone().add_field("extra", "value", false).unwrap_err();
        assert!(matches!(
            err.as_structural(),
            Some(StructuralError::TooMany { count: 26, .. })
        ));
        assert_eq!(embed.fields().len(), 25);
    }

    #[test]
    fn splice_replaces_and_checks_the_result_size() {
        let embed = EmbedBuilder::new()
            .add_fields([field("a"), field("b"), field("c")])
            .unwrap()
            .splice_fields(1, 1, [field("x"), field("y")])
            .unwrap();
        let names: Vec<_> = embed.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "x", "y", "c"]);

        let embed = embed.splice_fields(10, 10, [field("z")]).unwrap();
        assert_eq!(embed.fields().last().map(|f| f.name.as_str()), Some("z"));

        let full = EmbedBuilder::new()
            .add_fields((0..25).map(|i| field(&i.to_string())))
            .unwrap();
        assert!(full.clone().splice_fields(0, 1, [field("swap")]).is_ok());
        assert!(full.clone().splice_fields(0, 0, [field("extra")]).is_err());
        assert!(full.splice_fields(0, 1, [field("a"), field("b")]).is_err());
    }

    #[test]
    fn length_counts_text_fields() {
        let embed = EmbedBuilder::new()
            .set_title("abc")
            .unwrap()
            .set_description("de")
            .unwrap()
            .set_footer("f", None)
            .unwrap()
            .set_author("gh", EmbedAuthorOptions::default())
            .unwrap()
            .add_field("ij", "klm", false)
            .unwrap();

        assert_eq!(embed.length(), 13);
        assert_eq!(EmbedBuilder::new().length(), 0);
    }

    #[test]
    fn reconstruction_keeps_received_only_fields() {
        let raw = json!({
            "title": "Video",
            "timestamp": "2021-01-01T01:00:00+01:00",
            "video": { "url": "https://example.com/v.mp4", "width": 640 },
            "provider": { "name": "Example" }
        });
        let embed = EmbedBuilder::try_from(raw).unwrap();

        let json = embed.to_json().unwrap();
        assert_eq!(json["timestamp"], json!("2021-01-01T00:00:00.000Z"));
        assert_eq!(json["video"]["width"], json!(640));
        assert_eq!(json["provider"], json!({ "name": "Example" }));
        assert_eq!(json["fields"], json!([]));
        assert!(embed.validate().is_ok());
    }

    #[test]
    fn cleared_fields_are_omitted() {
        let embed = EmbedBuilder::try_from(json!({
            "title": "Old",
            "description": "Stale",
            "url": "https://example.com/",
            "color": 255,
            "timestamp": "2021-01-01T00:00:00.000Z",
            "thumbnail": { "url": "https://example.com/t.png" },
            "image": { "url": "https://example.com/i.png" },
            "author": { "name": "Someone" },
            "footer": { "text": "Kept" }
        }))
        .unwrap()
        .clear_title()
        .clear_description()
        .clear_url()
        .clear_color()
        .clear_timestamp()
        .clear_thumbnail()
        .clear_image()
        .clear_author();

        assert_eq!(
            embed.to_json().unwrap(),
            json!({ "footer": { "text": "Kept" }, "fields": [] })
        );
        assert_eq!(embed.length(), 4);
    }

    #[test]
    fn cleared_title_can_be_set_again() {
        let embed = EmbedBuilder::new()
            .set_title("First")
            .unwrap()
            .clear_title()
            .set_title("Second")
            .unwrap();
        assert_eq!(embed.to_json().unwrap()["title"], json!("Second"));
    }

    #[test]
    fn validate_catches_reconstructed_violations() {
        let embed = EmbedBuilder::try_from(json!({
            "title": "ok",
            "fields": [{ "name": "", "value": "v" }]
        }))
        .unwrap();

        let err = embed.validate().unwrap_err();
        assert_eq!(err.as_field().map(FieldError::field), Some("fields.name"));
        assert!(embed.to_json().is_ok());
    }
}
