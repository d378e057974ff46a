//! Chat completion client for OpenAI-compatible endpoints.

use crate::ClientConfig;
use crate::openai_compat::conversions;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, instrument};
use uitars_core::{
    Conversation, GenerationParams, GenerationRequest, normalize_legacy, normalize_structured,
};
use uitars_error::{ConfigError, TransportError, TransportErrorKind, UitarsResult};

/// Where to send a request and the bearer token to send with it.
///
/// `Debug` output never includes the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    api_url: String,
    token: String,
}

impl Endpoint {
    /// Creates an endpoint from a full chat completions URL and a bearer token.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// The chat completions URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Client for OpenAI-compatible chat completion endpoints (DashScope/Qwen,
/// vLLM, OpenAI, ...).
///
/// Every call is one POST and one response. Nothing is retried; any failure
/// is returned to the caller. The client keeps no per-call state, so a clone
/// can be shared across tasks.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    config: ClientConfig,
}

impl CompletionClient {
    /// Creates a client with the default 60 second timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new() -> UitarsResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(timeout = ?config.timeout()))]
    pub fn with_config(config: ClientConfig) -> UitarsResult<Self> {
        let mut builder = Client::builder()
            .timeout(*config.timeout())
            .user_agent(config.user_agent().as_str());
        if !config.reuse_connections() {
            builder = builder.pool_max_idle_per_host(0);
        }

        let client = builder.build().map_err(|e| {
            error!(error = ?e, "Failed to build HTTP client");
            ConfigError::new(format!("Failed to build HTTP client: {}", e))
        })?;

        debug!("Created completion client");
        Ok(Self { client, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a canonical conversation with default parameters and returns the
    /// first completion's text.
    ///
    /// # Errors
    ///
    /// A malformed-input error if a message has an empty role (nothing is
    /// sent), transport errors for network failures, timeouts and non-success
    /// statuses, and response-format errors when the body lacks
    /// `choices[0].message.content`.
    pub async fn complete(
        &self,
        conversation: &Conversation,
        model: &str,
        api_url: &str,
        token: &str,
    ) -> UitarsResult<String> {
        self.post(
            model,
            conversation,
            &GenerationParams::default(),
            &Endpoint::new(api_url, token),
        )
        .await
    }

    /// Sends a fully specified request, honouring its parameter overrides.
    ///
    /// # Errors
    ///
    /// Same as [`CompletionClient::complete`].
    pub async fn complete_with(
        &self,
        request: &GenerationRequest,
        endpoint: &Endpoint,
    ) -> UitarsResult<String> {
        self.post(
            request.model(),
            request.conversation(),
            request.params(),
            endpoint,
        )
        .await
    }

    /// Entry point for structured chats: JSON records with `role` and
    /// `content`, where content may hold text and image parts.
    ///
    /// # Errors
    ///
    /// A malformed-input error if normalization fails (no request is sent),
    /// otherwise the errors of [`CompletionClient::complete`].
    pub async fn inference_chat_structured(
        &self,
        chat: &[Value],
        model: &str,
        api_url: &str,
        token: &str,
    ) -> UitarsResult<String> {
        let conversation = normalize_structured(chat)?;
        self.complete(&conversation, model, api_url, token).await
    }

    /// Entry point for legacy text chats of `(role, content)` pairs.
    ///
    /// # Errors
    ///
    /// A malformed-input error if normalization fails (no request is sent),
    /// otherwise the errors of [`CompletionClient::complete`].
    pub async fn inference_chat<R, C>(
        &self,
        chat: &[(R, C)],
        model: &str,
        api_url: &str,
        token: &str,
    ) -> UitarsResult<String>
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let conversation = normalize_legacy(chat)?;
        self.complete(&conversation, model, api_url, token).await
    }

    #[instrument(
        skip(self, conversation, params, endpoint),
        fields(model = %model, message_count = conversation.len())
    )]
    async fn post(
        &self,
        model: &str,
        conversation: &Conversation,
        params: &GenerationParams,
        endpoint: &Endpoint,
    ) -> UitarsResult<String> {
        conversions::check_roles(conversation).map_err(|e| {
            error!(index = e.index, "Conversation has a message without a role");
            e
        })?;

        let url = endpoint.api_url();
        let chat_request = conversions::to_chat_request(model, conversation, params);
        let body = serde_json::to_vec(&chat_request).map_err(|e| {
            error!(error = ?e, "Failed to encode request body");
            TransportError::new(url, TransportErrorKind::Request(e.to_string()))
        })?;

        debug!(
            message_count = chat_request.message_count(),
            bytes = body.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .bearer_auth(endpoint.token())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                TransportError::new(url, transport_kind(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => format!("<unreadable: {}>", e),
            };
            error!(status = %status, error = %error_text, "API error");
            return Err(TransportError::new(
                url,
                TransportErrorKind::Status {
                    status_code: status.as_u16(),
                    body: error_text,
                },
            )
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            TransportError::new(url, transport_kind(&e))
        })?;

        let text = conversions::completion_text(&bytes).map_err(|e| {
            error!(error = %e, "Unexpected response format");
            e
        })?;

        debug!(chars = text.len(), "Received completion");
        Ok(text)
    }
}

fn transport_kind(e: &reqwest::Error) -> TransportErrorKind {
    if e.is_timeout() {
        TransportErrorKind::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportErrorKind::Connect(e.to_string())
    } else {
        TransportErrorKind::Request(e.to_string())
    }
}

/// One-shot completion with a fresh default client.
///
/// # Errors
///
/// Same as [`CompletionClient::complete`], plus a configuration error if the
/// HTTP client cannot be built.
pub async fn complete(
    conversation: &Conversation,
    model: &str,
    api_url: &str,
    token: &str,
) -> UitarsResult<String> {
    CompletionClient::new()?
        .complete(conversation, model, api_url, token)
        .await
}

/// One-shot structured-chat completion with a fresh default client.
///
/// # Errors
///
/// Same as [`CompletionClient::inference_chat_structured`].
pub async fn inference_chat_structured(
    chat: &[Value],
    model: &str,
    api_url: &str,
    token: &str,
) -> UitarsResult<String> {
    CompletionClient::new()?
        .inference_chat_structured(chat, model, api_url, token)
        .await
}

/// One-shot legacy-chat completion with a fresh default client.
///
/// # Errors
///
/// Same as [`CompletionClient::inference_chat`].
pub async fn inference_chat<R, C>(
    chat: &[(R, C)],
    model: &str,
    api_url: &str,
    token: &str,
) -> UitarsResult<String>
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    CompletionClient::new()?
        .inference_chat(chat, model, api_url, token)
        .await
}
