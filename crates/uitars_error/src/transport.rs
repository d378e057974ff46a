//! Transport error types.

/// Why a request never produced a usable HTTP success response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The server answered with a non-success status
    Status {
        /// HTTP status code
        status_code: u16,
        /// Response body, if it could be read
        body: String,
    },
    /// The fixed request timeout elapsed
    Timeout(String),
    /// The connection could not be established
    Connect(String),
    /// Any other failure while building or sending the request
    Request(String),
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::Status { status_code, body } if body.is_empty() => {
                write!(f, "HTTP status {}", status_code)
            }
            TransportErrorKind::Status { status_code, body } => {
                write!(f, "HTTP status {}: {}", status_code, body)
            }
            TransportErrorKind::Timeout(msg) => write!(f, "timed out: {}", msg),
            TransportErrorKind::Connect(msg) => write!(f, "connection failed: {}", msg),
            TransportErrorKind::Request(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl TransportErrorKind {
    /// Returns the HTTP status code when the server did answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportErrorKind::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// True when the failure came from a non-success HTTP status.
    pub fn is_status(&self) -> bool {
        self.status().is_some()
    }
}

/// Network or HTTP failure, tagged with the endpoint that was targeted.
///
/// # Examples
///
/// ```
/// use uitars_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(
///     "http://localhost:8000/v1/chat/completions",
///     TransportErrorKind::Status { status_code: 500, body: String::new() },
/// );
/// let text = format!("{}", err);
/// assert!(text.contains("http://localhost:8000/v1/chat/completions"));
/// assert!(text.contains("500"));
/// ```
#[derive(Debug, Clone)]
pub struct TransportError {
    /// Endpoint URL the request was sent to
    pub url: String,
    /// The underlying cause
    pub kind: TransportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(url: impl Into<String>, kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            url: url.into(),
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transport Error: request to {} failed: {} at line {} in {}",
            self.url, self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for TransportError {}
