//! Response format error types.

/// The HTTP call succeeded but the body was not what we expected.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormatErrorKind {
    /// The body could not be parsed as JSON at all
    InvalidJson {
        /// Raw response text (lossy UTF-8)
        raw: String,
        /// Parser message
        message: String,
    },
    /// The JSON parsed but `choices[0].message.content` was missing or not a string
    MissingCompletion {
        /// The parsed body, kept for diagnosis
        body: serde_json::Value,
        /// What was missing
        message: String,
    },
}

impl std::fmt::Display for ResponseFormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseFormatErrorKind::InvalidJson { raw, message } => {
                write!(f, "body is not valid JSON ({}): {}", message, raw)
            }
            ResponseFormatErrorKind::MissingCompletion { body, message } => {
                write!(f, "unexpected response format ({}): {}", message, body)
            }
        }
    }
}

/// Response body error with source location tracking.
///
/// # Examples
///
/// ```
/// use uitars_error::{ResponseFormatError, ResponseFormatErrorKind};
///
/// let err = ResponseFormatError::new(ResponseFormatErrorKind::MissingCompletion {
///     body: serde_json::json!({"id": "abc"}),
///     message: "missing field `choices`".to_string(),
/// });
/// assert!(format!("{}", err).contains("\"id\":\"abc\""));
/// ```
#[derive(Debug, Clone)]
pub struct ResponseFormatError {
    /// The kind of error that occurred
    pub kind: ResponseFormatErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ResponseFormatError {
    /// Create a new ResponseFormatError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResponseFormatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ResponseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Response Format Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ResponseFormatError {}
