use thiserror::Error;

use crate::utils::jwt::JwtError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Application-level error; displays the server's message verbatim
    #[error("{0}")]
    Rejected(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("The server did not return a token")]
    MissingToken,

    #[error("You need to be signed in to do that")]
    MissingIdentity,

    #[error("Invalid token: {0}")]
    TokenDecode(#[from] JwtError),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
