//! Error types for the UI-TARS chat completion adapter.
//!
//! Every failure class records the source location where it was created.
//! [`UitarsError`] wraps them all so callers can propagate with `?` and still
//! branch on the failure kind.

mod config;
mod malformed;
mod response_format;
mod transport;

pub use config::ConfigError;
pub use malformed::MalformedInputError;
pub use response_format::{ResponseFormatError, ResponseFormatErrorKind};
pub use transport::{TransportError, TransportErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum UitarsErrorKind {
    /// Local file could not be read
    Io(std::io::Error),
    /// Conversation did not match a supported shape
    MalformedInput(MalformedInputError),
    /// Network failure, timeout or non-success HTTP status
    Transport(TransportError),
    /// Success response with an unusable body
    ResponseFormat(ResponseFormatError),
    /// Missing or invalid configuration
    Config(ConfigError),
}

impl std::fmt::Display for UitarsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UitarsErrorKind::Io(e) => write!(f, "IO Error: {}", e),
            UitarsErrorKind::MalformedInput(e) => write!(f, "{}", e),
            UitarsErrorKind::Transport(e) => write!(f, "{}", e),
            UitarsErrorKind::ResponseFormat(e) => write!(f, "{}", e),
            UitarsErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// UI-TARS error with kind discrimination.
#[derive(Debug)]
pub struct UitarsError(Box<UitarsErrorKind>);

impl UitarsError {
    /// Create a new error from a kind.
    pub fn new(kind: UitarsErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &UitarsErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> UitarsErrorKind {
        *self.0
    }

    /// True for network, timeout and HTTP status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), UitarsErrorKind::Transport(_))
    }

    /// True when the server answered but the body was unusable.
    pub fn is_response_format(&self) -> bool {
        matches!(self.kind(), UitarsErrorKind::ResponseFormat(_))
    }

    /// True when the caller's conversation could not be normalized.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind(), UitarsErrorKind::MalformedInput(_))
    }
}

impl std::fmt::Display for UitarsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UI-TARS Error: {}", self.0)
    }
}

impl std::error::Error for UitarsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            UitarsErrorKind::Io(e) => Some(e),
            UitarsErrorKind::MalformedInput(e) => Some(e),
            UitarsErrorKind::Transport(e) => Some(e),
            UitarsErrorKind::ResponseFormat(e) => Some(e),
            UitarsErrorKind::Config(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to UitarsErrorKind
impl<T> From<T> for UitarsError
where
    T: Into<UitarsErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for UI-TARS operations.
pub type UitarsResult<T> = std::result::Result<T, UitarsError>;
