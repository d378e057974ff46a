//! Core data types for the UI-TARS chat completion adapter.
//!
//! This crate holds the canonical conversation model, the two chat-shape
//! normalizers, and the image encoder used to build data-URI content parts.

mod content;
mod media;
mod message;
mod normalize;
mod request;
mod role;

pub use content::{Content, ContentPart, ImageUrl};
pub use media::{ImageFormat, data_uri, encode_image, image_data_uri};
pub use message::{Conversation, Message, MessageBuilder};
pub use normalize::{normalize_legacy, normalize_legacy_values, normalize_structured};
pub use request::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationParams, GenerationParamsBuilder,
    GenerationRequest, GenerationRequestBuilder,
};
pub use role::Role;
