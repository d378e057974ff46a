//! Malformed conversation input errors.

/// A caller-supplied conversation element did not match the expected shape.
///
/// Normalization is all-or-nothing, so this error always names the first
/// offending element and no partial conversation is produced.
///
/// # Examples
///
/// ```
/// use uitars_error::MalformedInputError;
///
/// let err = MalformedInputError::new(2, "missing `role` field");
/// assert_eq!(err.index, 2);
/// assert!(format!("{}", err).contains("element 2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedInputError {
    /// Zero-based position of the offending element
    pub index: usize,
    /// What was wrong with it
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MalformedInputError {
    /// Create a new MalformedInputError for the element at `index`.
    #[track_caller]
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            index,
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Malformed Input Error: element {}: {} at line {} in {}",
            self.index, self.reason, self.line, self.file
        )
    }
}

impl std::error::Error for MalformedInputError {}
