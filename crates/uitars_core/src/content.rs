//! Message content: plain text or an ordered list of multimodal parts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Content of a single message.
///
/// Serializes untagged, so `Text` becomes a JSON string and `Parts` a JSON
/// array, matching the OpenAI chat format.
///
/// # Examples
///
/// ```
/// use uitars_core::{Content, ContentPart};
///
/// let text = Content::from("Open the settings app");
/// assert_eq!(serde_json::to_string(&text).unwrap(), "\"Open the settings app\"");
///
/// let parts = Content::from(vec![
///     ContentPart::text("What is on screen?"),
///     ContentPart::image_url("data:image/png;base64,iVBORw0KGgo="),
/// ]);
/// assert!(serde_json::to_string(&parts).unwrap().starts_with('['));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum Content {
    /// Plain text content
    Text(String),
    /// Mixed text and image parts, in order
    Parts(Vec<ContentPart>),
    /// Any other JSON value a caller supplied (`null`, an object, a number),
    /// forwarded untouched
    #[from(skip)]
    Raw(Value),
}

impl Content {
    /// Returns the text when this is plain text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Parts(_) | Content::Raw(_) => None,
        }
    }

    /// Returns the parts when this is multimodal content.
    pub fn as_parts(&self) -> Option<&[ContentPart]> {
        match self {
            Content::Text(_) | Content::Raw(_) => None,
            Content::Parts(parts) => Some(parts),
        }
    }

    /// True for an empty string, an empty part list or a `null` value.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Parts(parts) => parts.is_empty(),
            Content::Raw(value) => value.is_null(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

/// Image reference inside an `image_url` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Remote URL or `data:` URI
    pub url: String,
    /// Optional resolution hint (`low`, `high`, `auto`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// One element of multimodal content.
///
/// `Text` and `ImageUrl` cover the shapes this crate builds itself. Anything
/// else a caller passes in, including known shapes with extra fields, is
/// carried as `Raw` so it reaches the wire exactly as supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    /// `{"type": "text", "text": ...}`
    Text { text: String },
    /// `{"type": "image_url", "image_url": {"url": ...}}`
    ImageUrl { image_url: ImageUrl },
    /// Any other JSON value, forwarded untouched
    Raw(Value),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TypedPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TypedPartRef<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: &'a ImageUrl },
}

impl ContentPart {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// An image part pointing at `url` (remote URL or `data:` URI).
    pub fn image_url(url: impl Into<String>) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: None,
            },
        }
    }

    /// Classifies a caller-supplied JSON part.
    ///
    /// The typed variant is used only when serializing it reproduces `value`
    /// exactly; otherwise the value is kept as [`ContentPart::Raw`].
    pub fn from_value(value: Value) -> Self {
        let typed = match TypedPart::deserialize(&value) {
            Ok(TypedPart::Text { text }) => ContentPart::Text { text },
            Ok(TypedPart::ImageUrl { image_url }) => ContentPart::ImageUrl { image_url },
            Err(_) => return ContentPart::Raw(value),
        };

        match serde_json::to_value(&typed) {
            Ok(reencoded) if reencoded == value => typed,
            _ => ContentPart::Raw(value),
        }
    }
}

impl Serialize for ContentPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContentPart::Text { text } => TypedPartRef::Text { text }.serialize(serializer),
            ContentPart::ImageUrl { image_url } => {
                TypedPartRef::ImageUrl { image_url }.serialize(serializer)
            }
            ContentPart::Raw(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ContentPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ContentPart::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_part_is_typed() {
        let part = ContentPart::from_value(json!({"type": "text", "text": "hi"}));
        assert_eq!(part, ContentPart::text("hi"));
    }

    #[test]
    fn image_part_is_typed() {
        let part = ContentPart::from_value(json!({
            "type": "image_url",
            "image_url": {"url": "data:image/png;base64,AAAA", "detail": "high"}
        }));
        match part {
            ContentPart::ImageUrl { image_url } => {
                assert_eq!(image_url.url, "data:image/png;base64,AAAA");
                assert_eq!(image_url.detail.as_deref(), Some("high"));
            }
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[test]
    fn extra_fields_fall_back_to_raw() {
        let value = json!({"type": "text", "text": "hi", "cache_control": {"type": "ephemeral"}});
        let part = ContentPart::from_value(value.clone());
        assert_eq!(part, ContentPart::Raw(value.clone()));
        assert_eq!(serde_json::to_value(&part).unwrap(), value);
    }

    #[test]
    fn unknown_part_types_are_forwarded() {
        let value = json!({"type": "input_audio", "input_audio": {"data": "UklGR", "format": "wav"}});
        let part: ContentPart = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&part).unwrap(), value);
    }

    #[test]
    fn content_serializes_untagged() {
        let content = Content::Parts(vec![
            ContentPart::text("look"),
            ContentPart::image_url("https://example.com/a.png"),
        ]);
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!([
                {"type": "text", "text": "look"},
                {"type": "image_url", "image_url": {"url": "https://example.com/a.png"}}
            ])
        );
        assert_eq!(serde_json::to_value(Content::from("plain")).unwrap(), json!("plain"));
    }

    #[test]
    fn empty_content_is_allowed() {
        assert!(Content::from("").is_empty());
        assert!(Content::Parts(Vec::new()).is_empty());
        assert_eq!(Content::from("x").as_text(), Some("x"));
    }

    #[test]
    fn other_json_content_is_forwarded() {
        let content: Content = serde_json::from_value(json!({"text": "odd"})).unwrap();
        assert_eq!(content, Content::Raw(json!({"text": "odd"})));
        assert_eq!(serde_json::to_value(&content).unwrap(), json!({"text": "odd"}));

        let null: Content = serde_json::from_value(Value::Null).unwrap();
        assert!(null.is_empty());
        assert_eq!(null.as_text(), None);
    }
}
