//! Command-line surface for the `uitars-chat` binary.
//!
//! Argument parsing, conversation assembly and endpoint resolution live here
//! so the binary itself only wires up logging and prints the result.

use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};
use uitars_core::{
    ContentPart, Conversation, GenerationParams, GenerationRequest, Message, image_data_uri,
    normalize_legacy_values, normalize_structured,
};
use uitars_error::{ConfigError, UitarsResult};
use uitars_models::{CompletionClient, Endpoint};

/// Model used when neither `--model` nor `UITARS_MODEL` is given.
pub const DEFAULT_MODEL: &str = "qwen3-vl-flash";

/// Shape of a conversation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChatFormat {
    /// Array of `{"role": .., "content": ..}` records
    Structured,
    /// Array of `["role", "content"]` pairs
    Legacy,
}

/// Command-line arguments for `uitars-chat`.
#[derive(Parser, Debug)]
#[command(name = "uitars-chat")]
#[command(about = "Send a chat to an OpenAI-compatible completion endpoint")]
#[command(version)]
pub struct Cli {
    /// Prompt to send as a single user message
    #[arg(required_unless_present = "conversation")]
    pub prompt: Option<String>,

    /// Load the conversation from a JSON file instead of a prompt
    #[arg(short, long, conflicts_with_all = ["prompt", "system", "image"])]
    pub conversation: Option<PathBuf>,

    /// Shape of the conversation file
    #[arg(short, long, value_enum, default_value_t = ChatFormat::Structured)]
    pub format: ChatFormat,

    /// Image to attach to the prompt (repeatable)
    #[arg(short, long)]
    pub image: Vec<PathBuf>,

    /// System prompt placed before the user message
    #[arg(short, long)]
    pub system: Option<String>,

    /// Chat completions URL
    #[arg(long, env = "UITARS_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token
    #[arg(long, env = "UITARS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Model identifier
    #[arg(short, long, env = "UITARS_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Override the maximum number of generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Override the sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,
}

/// Builds the conversation, sends it, and returns the completion text.
///
/// # Errors
///
/// Configuration errors for missing settings, I/O errors for unreadable
/// files, and any error from normalization or the completion call.
#[instrument(skip_all, fields(model = %cli.model))]
pub async fn run(cli: Cli) -> UitarsResult<String> {
    let endpoint = resolve_endpoint(cli.api_url.clone(), cli.api_token.clone())?;

    let conversation = match (&cli.conversation, &cli.prompt) {
        (Some(path), _) => load_conversation(path, cli.format)?,
        (None, Some(prompt)) => prompt_conversation(cli.system.as_deref(), prompt, &cli.image)?,
        (None, None) => {
            error!("Neither a prompt nor a conversation file was given");
            return Err(ConfigError::new("provide a prompt or --conversation FILE").into());
        }
    };

    let params = generation_params(cli.max_tokens, cli.temperature)?;
    info!(
        messages = conversation.len(),
        max_tokens = *params.max_tokens(),
        temperature = *params.temperature(),
        "Sending conversation"
    );

    let request = GenerationRequest::new(cli.model, conversation).with_params(params);
    CompletionClient::new()?
        .complete_with(&request, &endpoint)
        .await
}

/// Builds an endpoint, failing if either setting is missing or blank.
///
/// # Errors
///
/// Returns [`ConfigError`] naming the missing environment variable.
pub fn resolve_endpoint(
    api_url: Option<String>,
    token: Option<String>,
) -> Result<Endpoint, ConfigError> {
    let api_url = api_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ConfigError::new("UITARS_API_URL not set (use --api-url or the environment)"))?;
    let token = token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            ConfigError::new("UITARS_API_TOKEN not set (use --api-token or the environment)")
        })?;
    Ok(Endpoint::new(api_url, token))
}

/// Reads a JSON array from `path` and normalizes it in the given format.
///
/// # Errors
///
/// I/O errors from reading the file, a [`ConfigError`] if it is not a JSON
/// array, and a malformed-input error for the first bad element.
#[instrument(skip_all, fields(path = %path.display(), format = ?format))]
pub fn load_conversation(path: &Path, format: ChatFormat) -> UitarsResult<Conversation> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, "Conversation file is not valid JSON");
        ConfigError::new(format!("{} is not valid JSON: {}", path.display(), e))
    })?;
    let Value::Array(elements) = value else {
        return Err(ConfigError::new(format!(
            "{} must contain a JSON array of messages",
            path.display()
        ))
        .into());
    };

    let conversation = match format {
        ChatFormat::Structured => normalize_structured(&elements)?,
        ChatFormat::Legacy => normalize_legacy_values(&elements)?,
    };
    debug!(messages = conversation.len(), "Loaded conversation");
    Ok(conversation)
}

/// Builds a conversation from an optional system prompt, a user prompt and
/// any number of images.
///
/// Without images the user message is plain text. With images it becomes a
/// text part followed by one data-URI part per image, in order.
///
/// # Errors
///
/// Returns the I/O error of the first image that cannot be read.
pub fn prompt_conversation(
    system: Option<&str>,
    prompt: &str,
    images: &[PathBuf],
) -> UitarsResult<Conversation> {
    let mut conversation = Conversation::default();
    if let Some(system) = system {
        conversation.push(Message::system(system));
    }

    if images.is_empty() {
        conversation.push(Message::user(prompt));
    } else {
        let mut parts = vec![ContentPart::text(prompt)];
        for image in images {
            parts.push(ContentPart::image_url(image_data_uri(image)?));
        }
        conversation.push(Message::user_parts(parts));
    }
    Ok(conversation)
}

/// Applies command-line overrides on top of the default parameters.
///
/// # Errors
///
/// Returns [`ConfigError`] if the parameters cannot be assembled.
pub fn generation_params(
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> Result<GenerationParams, ConfigError> {
    let mut builder = GenerationParams::builder();
    if let Some(max_tokens) = max_tokens {
        builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = temperature {
        builder.temperature(temperature);
    }
    builder
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid generation parameters: {}", e)))
}
