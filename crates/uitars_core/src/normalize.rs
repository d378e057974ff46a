//! Conversions from the two supported chat shapes into a canonical [`Conversation`].
//!
//! Structured chats are JSON records that already carry `role` and `content`.
//! Legacy chats are `(role, text)` pairs. Both produce the same canonical type,
//! and both fail on the first bad element without returning partial output.

use crate::{Content, ContentPart, Conversation, Message, Role};
use serde_json::Value;
use tracing::{debug, instrument};
use uitars_error::MalformedInputError;

/// Normalizes a structured chat: records with `role` and `content` fields.
///
/// `content` is copied as given: a string, an array of parts (copied without
/// validation), or any other JSON value, which is forwarded untouched. Any
/// other fields on a record are ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uitars_core::{Role, normalize_structured};
///
/// let chat = vec![
///     json!({"role": "system", "content": "You are a phone operator."}),
///     json!({"role": "user", "content": [
///         {"type": "text", "text": "What is on screen?"},
///         {"type": "image_url", "image_url": {"url": "data:image/png;base64,iVBORw0KGgo="}}
///     ], "name": "ignored"}),
/// ];
///
/// let conversation = normalize_structured(&chat).unwrap();
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(*conversation.messages()[1].role(), Role::User);
/// ```
///
/// # Errors
///
/// Returns [`MalformedInputError`] naming the first element that is not an
/// object, lacks `role` or `content`, or has an empty or non-string `role`.
/// Roles are always strings on the wire, so a `role` of any other JSON type
/// is rejected rather than forwarded.
#[instrument(skip(chat), fields(elements = chat.len()))]
pub fn normalize_structured(chat: &[Value]) -> Result<Conversation, MalformedInputError> {
    let conversation = chat
        .iter()
        .enumerate()
        .map(|(index, element)| structured_message(index, element))
        .collect::<Result<Conversation, _>>()?;

    debug!(messages = conversation.len(), "Normalized structured chat");
    Ok(conversation)
}

fn structured_message(index: usize, element: &Value) -> Result<Message, MalformedInputError> {
    let record = element
        .as_object()
        .ok_or_else(|| MalformedInputError::new(index, "expected an object with `role` and `content`"))?;

    let role = match record.get("role") {
        Some(Value::String(role)) => role_from(index, role)?,
        Some(_) => return Err(MalformedInputError::new(index, "`role` must be a string")),
        None => return Err(MalformedInputError::new(index, "missing `role` field")),
    };

    let content = match record.get("content") {
        Some(Value::String(text)) => Content::Text(text.clone()),
        Some(Value::Array(parts)) => Content::Parts(
            parts
                .iter()
                .cloned()
                .map(ContentPart::from_value)
                .collect(),
        ),
        Some(other) => Content::Raw(other.clone()),
        None => return Err(MalformedInputError::new(index, "missing `content` field")),
    };

    Ok(Message::new(role, content))
}

/// Normalizes a legacy chat of `(role, text)` pairs.
///
/// # Examples
///
/// ```
/// use uitars_core::{Role, normalize_legacy};
///
/// let chat = [("system", "Be terse."), ("user", "Tap the back button.")];
/// let conversation = normalize_legacy(&chat).unwrap();
///
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(*conversation.messages()[0].role(), Role::System);
/// assert_eq!(conversation.messages()[1].content().as_text(), Some("Tap the back button."));
/// ```
///
/// # Errors
///
/// Returns [`MalformedInputError`] for the first pair whose role is empty.
#[instrument(skip(chat), fields(elements = chat.len()))]
pub fn normalize_legacy<R, C>(chat: &[(R, C)]) -> Result<Conversation, MalformedInputError>
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let conversation = chat
        .iter()
        .enumerate()
        .map(|(index, (role, content))| legacy_message(index, role.as_ref(), content.as_ref()))
        .collect::<Result<Conversation, _>>()?;

    debug!(messages = conversation.len(), "Normalized legacy chat");
    Ok(conversation)
}

/// Normalizes a legacy chat that arrived as JSON, e.g. `[["user", "hi"]]`.
///
/// # Errors
///
/// Returns [`MalformedInputError`] for the first element that is not a
/// two-element array of strings, or whose role is empty.
#[instrument(skip(chat), fields(elements = chat.len()))]
pub fn normalize_legacy_values(chat: &[Value]) -> Result<Conversation, MalformedInputError> {
    let conversation = chat
        .iter()
        .enumerate()
        .map(|(index, element)| legacy_value_message(index, element))
        .collect::<Result<Conversation, _>>()?;

    debug!(messages = conversation.len(), "Normalized legacy chat values");
    Ok(conversation)
}

fn legacy_message(index: usize, role: &str, content: &str) -> Result<Message, MalformedInputError> {
    Ok(Message::new(
        role_from(index, role)?,
        Content::Text(content.to_string()),
    ))
}

fn legacy_value_message(index: usize, element: &Value) -> Result<Message, MalformedInputError> {
    match element.as_array().map(Vec::as_slice) {
        Some([Value::String(role), Value::String(content)]) => legacy_message(index, role, content),
        Some([_, _]) => Err(MalformedInputError::new(
            index,
            "role and content must both be strings",
        )),
        Some(items) => Err(MalformedInputError::new(
            index,
            format!("expected a (role, content) pair, found {} items", items.len()),
        )),
        None => Err(MalformedInputError::new(
            index,
            "expected a (role, content) pair",
        )),
    }
}

fn role_from(index: usize, role: &str) -> Result<Role, MalformedInputError> {
    if role.is_empty() {
        return Err(MalformedInputError::new(index, "`role` must not be empty"));
    }
    Ok(Role::from(role))
}
