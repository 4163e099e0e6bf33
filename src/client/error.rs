//! Client error types
//!
//! Everything that can go wrong while talking to the guestbook API.

use thiserror::Error;

/// Errors returned by [`GuestbookApi`](super::GuestbookApi) calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// Could not connect (server down or still starting up)
    #[error("Guestbook API unavailable: {0}")]
    Unavailable(String),

    /// The request did not finish within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The configured base URL cannot address the API
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// Classify a transport error the way the rest of the crate reports it
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unavailable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 404,
            message: "no such entry".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: no such entry");

        assert_eq!(ClientError::Timeout.to_string(), "Request timeout");
    }
}
