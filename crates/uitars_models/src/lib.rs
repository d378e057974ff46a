//! Chat completion providers for the UI-TARS adapter.
//!
//! The only provider is the OpenAI-compatible one in [`openai_compat`]; its
//! client and one-shot functions are re-exported at the crate root.

mod config;
pub mod openai_compat;

pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_TIMEOUT};
pub use openai_compat::{
    CompletionClient, Endpoint, complete, inference_chat, inference_chat_structured,
};
