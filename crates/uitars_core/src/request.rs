//! Generation parameters and per-call request bundle.

use crate::Conversation;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
/// Default sampling temperature (greedy).
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Sampling parameters sent with every request.
///
/// # Examples
///
/// ```
/// use uitars_core::GenerationParams;
///
/// let defaults = GenerationParams::default();
/// assert_eq!(*defaults.max_tokens(), 2048);
/// assert_eq!(*defaults.temperature(), 0.0);
///
/// let tuned = GenerationParams::builder().max_tokens(512u32).build().unwrap();
/// assert_eq!(*tuned.max_tokens(), 512);
/// assert_eq!(*tuned.temperature(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationParams {
    /// Maximum tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl GenerationParams {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// One completion call: model, canonical conversation and parameters.
///
/// Built per call and dropped once the response is handled.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Model identifier, e.g. `qwen3-vl-flash`
    model: String,
    /// Conversation in canonical form
    conversation: Conversation,
    /// Sampling parameters
    #[builder(default)]
    params: GenerationParams,
}

impl GenerationRequest {
    /// Creates a request with default parameters.
    pub fn new(model: impl Into<String>, conversation: Conversation) -> Self {
        Self {
            model: model.into(),
            conversation,
            params: GenerationParams::default(),
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Replaces the sampling parameters.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    #[test]
    fn builder_defaults_params() {
        let request = GenerationRequest::builder()
            .model("qwen3-vl-flash")
            .conversation(Conversation::new(vec![Message::user("hi")]))
            .build()
            .unwrap();
        assert_eq!(*request.params(), GenerationParams::default());
        assert_eq!(request.model(), "qwen3-vl-flash");
    }

    #[test]
    fn params_override() {
        let params = GenerationParams::builder()
            .temperature(0.7f32)
            .build()
            .unwrap();
        let request = GenerationRequest::new("m", Conversation::default()).with_params(params);
        assert_eq!(*request.params().max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(*request.params().temperature(), 0.7);
    }
}
