//! Type conversions between canonical conversations and the OpenAI wire format.

use crate::openai_compat::{ChatRequest, ChatResponse};
use serde::Deserialize;
use serde_json::Value;
use uitars_core::{Conversation, GenerationParams};
use uitars_error::{MalformedInputError, ResponseFormatError, ResponseFormatErrorKind};

/// Builds the outbound body for a canonical conversation.
pub fn to_chat_request<'a>(
    model: &'a str,
    conversation: &'a Conversation,
    params: &GenerationParams,
) -> ChatRequest<'a> {
    ChatRequest::new(
        model,
        conversation.messages(),
        *params.max_tokens(),
        *params.temperature(),
    )
}

/// Checks that every message carries a non-empty role.
///
/// Conversations built by hand skip the normalizers, so this runs again
/// before anything is sent.
///
/// # Errors
///
/// Returns [`MalformedInputError`] for the first message with an empty role.
pub fn check_roles(conversation: &Conversation) -> Result<(), MalformedInputError> {
    match conversation
        .messages()
        .iter()
        .position(|message| message.role().as_str().is_empty())
    {
        Some(index) => Err(MalformedInputError::new(index, "`role` must not be empty")),
        None => Ok(()),
    }
}

/// Extracts `choices[0].message.content` from a raw response body.
///
/// # Errors
///
/// Returns [`ResponseFormatErrorKind::InvalidJson`] with the raw text when the
/// body is not JSON, and [`ResponseFormatErrorKind::MissingCompletion`] with
/// the parsed body when the expected path is absent or not a string.
pub fn completion_text(body: &[u8]) -> Result<String, ResponseFormatError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ResponseFormatError::new(ResponseFormatErrorKind::InvalidJson {
            raw: String::from_utf8_lossy(body).into_owned(),
            message: e.to_string(),
        })
    })?;

    let response = match ChatResponse::deserialize(&value) {
        Ok(response) => response,
        Err(e) => {
            return Err(ResponseFormatError::new(
                ResponseFormatErrorKind::MissingCompletion {
                    message: e.to_string(),
                    body: value,
                },
            ));
        }
    };

    match response.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content),
        None => Err(ResponseFormatError::new(
            ResponseFormatErrorKind::MissingCompletion {
                body: value,
                message: "no choices in response".to_string(),
            },
        )),
    }
}
