//! Error types for pgrest

use thiserror::Error;

/// Result type alias for pgrest operations
pub type RestResult<T> = Result<T, RestError>;

/// Error types for request building and dispatch
#[derive(Debug, Error)]
pub enum RestError {
    /// The request carried a verb outside the four recognized ones.
    ///
    /// A [`crate::RequestState`] can only hold GET/POST/PATCH/DELETE, so this
    /// indicates builder misuse (e.g. parsing an arbitrary verb string), not a
    /// runtime condition.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Network/HTTP-level failure, passed through from the transport unchanged
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body serialization or response deserialization error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The accumulated path does not parse as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RestError {
    /// Create a transport error from any displayable failure
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    /// Create an unsupported-method error
    pub fn unsupported_method(verb: impl Into<String>) -> Self {
        Self::UnsupportedMethod(verb.into())
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is an encoding error
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Check if this is an unsupported-method error
    pub fn is_unsupported_method(&self) -> bool {
        matches!(self, Self::UnsupportedMethod(_))
    }
}
