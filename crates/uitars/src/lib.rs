//! UI-TARS chat completion adapter.
//!
//! Sends a conversation to an OpenAI-compatible chat completions endpoint and
//! returns the generated text. Conversations arrive either as structured JSON
//! records (`{"role": .., "content": ..}`, with optional image parts) or as
//! legacy `(role, text)` pairs; both are normalized into one [`Conversation`]
//! before the request is built.
//!
//! # Example
//!
//! ```no_run
//! use uitars::{encode_image, inference_chat_structured};
//! use serde_json::json;
//!
//! # async fn run() -> uitars::UitarsResult<()> {
//! let screenshot = encode_image("screen.png")?;
//! let chat = vec![
//!     json!({"role": "system", "content": "You operate an Android phone."}),
//!     json!({"role": "user", "content": [
//!         {"type": "text", "text": "Open the settings app."},
//!         {"type": "image_url", "image_url": {"url": format!("data:image/png;base64,{screenshot}")}}
//!     ]}),
//! ];
//!
//! let action = inference_chat_structured(
//!     &chat,
//!     "qwen3-vl-flash",
//!     "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions",
//!     "sk-...",
//! )
//! .await?;
//! println!("{action}");
//! # Ok(())
//! # }
//! ```

pub mod cli;

pub use uitars_core::{
    Content, ContentPart, Conversation, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    GenerationParams, GenerationParamsBuilder, GenerationRequest, GenerationRequestBuilder,
    ImageFormat, ImageUrl, Message, MessageBuilder, Role, data_uri, encode_image, image_data_uri,
    normalize_legacy, normalize_legacy_values, normalize_structured,
};
pub use uitars_error::{
    ConfigError, MalformedInputError, ResponseFormatError, ResponseFormatErrorKind,
    TransportError, TransportErrorKind, UitarsError, UitarsErrorKind, UitarsResult,
};
pub use uitars_models::{
    ClientConfig, ClientConfigBuilder, CompletionClient, DEFAULT_TIMEOUT, Endpoint, complete,
    inference_chat, inference_chat_structured,
};
