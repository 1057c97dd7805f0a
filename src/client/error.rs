//! Error types for the Context7 API client.

/// Errors raised inside the Context7 API client.
///
/// These never leave the client's public operations: `search_libraries` and
/// `fetch_documentation` log them and return `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("API returned status {0}")]
    Status(u16),

    /// Request succeeded but the body carries no usable content.
    #[error("no content available for {0}")]
    NoContent(String),

    /// Library identifier is empty after normalization.
    #[error("library ID must not be empty")]
    InvalidLibraryId,

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this is an expected "nothing there" outcome rather than a fault.
    pub fn is_no_content(&self) -> bool {
        matches!(self, Error::NoContent(_))
    }
}
