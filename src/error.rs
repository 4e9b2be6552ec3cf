use std::fmt;

/// Custom error type for Vercel API operations
#[derive(Debug)]
pub enum VercelError {
    /// HTTP request failed (connection, DNS, timeout)
    Http(reqwest::Error),
    /// API returned a non-success response
    Api { status: u16, message: String },
    /// Response body did not match the expected shape
    Json(String),
    /// Failed to write the report
    Io(String),
    /// Configuration error (missing token, bad values)
    Config(String),
}

impl fmt::Display for VercelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VercelError::Http(e) => write!(f, "HTTP request failed: {}", e),
            VercelError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            VercelError::Json(msg) => write!(f, "JSON error: {}", msg),
            VercelError::Io(msg) => write!(f, "I/O error: {}", msg),
            VercelError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for VercelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VercelError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VercelError {
    fn from(err: reqwest::Error) -> Self {
        VercelError::Http(err)
    }
}

impl From<serde_json::Error> for VercelError {
    fn from(err: serde_json::Error) -> Self {
        VercelError::Json(err.to_string())
    }
}

impl From<std::io::Error> for VercelError {
    fn from(err: std::io::Error) -> Self {
        VercelError::Io(err.to_string())
    }
}

/// Result type alias for Vercel operations
pub type Result<T> = std::result::Result<T, VercelError>;
