//! Formatting error types.

/// Errors arising from turning a field map into a byte record.
#[derive(Debug)]
pub enum FormatError {
    /// JSON serialization error.
    Json(serde_json::Error),
    /// Formatter-specific failure.
    Other(String),
}

impl FormatError {
    /// Creates a formatter-specific error from a description.
    pub fn other(message: impl Into<String>) -> Self {
        FormatError::Other(message.into())
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Json(e) => write!(f, "JSON error: {e}"),
            FormatError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Json(e) => Some(e),
            FormatError::Other(_) => None,
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(err)
    }
}
