//! Error types for the Starfish SDK

use thiserror::Error;

/// Result type for all SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Starfish client.
///
/// Construction problems are reported synchronously from the config
/// constructors; everything else comes back through the error channel of
/// the operation's `Result`.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid credentials/token combination at construction time
    #[error("{0}")]
    Config(String),

    /// Malformed cached token or a token-fetch response without a token
    #[error("Token Error: {0}")]
    Token(String),

    /// Transport failure or non-2xx token fetch, passed through unchanged
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Structurally valid but empty/missing result the API allows and
    /// this client treats as failure
    #[error("{0}")]
    Empty(&'static str),
}

impl Error {
    pub fn is_token_error(&self) -> bool {
        matches!(self, Error::Token(_))
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Error::Empty(_))
    }
}
