//! Error types for feed retrieval.
//!
//! The only failures this crate surfaces to callers are transport-level ones:
//! a non-2xx response, a failed request, or a response body that is not JSON
//! text at all. Payloads that parse but have an unexpected shape are treated
//! as empty feeds, not errors (see [`crate::client`]).

use thiserror::Error;

use crate::utils::truncate_for_log;

/// Errors surfaced by [`NhkClient`](crate::NhkClient) retrieval methods.
#[derive(Error, Debug)]
pub enum Error {
    /// The feed endpoint answered with a non-success HTTP status.
    #[error("could not fetch news: HTTP {status}: {}", truncate_for_log(.body, 200))]
    Fetch {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body, kept for diagnostics.
        body: String,
    },

    /// The HTTP transport itself failed (connection, DNS, TLS, ...).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON text.
    #[error("feed body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An endpoint URL could not be constructed.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_carries_status_and_body() {
        let err = Error::Fetch {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("Service Unavailable"));
    }

    #[test]
    fn test_fetch_error_message_truncates_long_body() {
        let err = Error::Fetch {
            status: 500,
            body: "x".repeat(5000),
        };
        let msg = err.to_string();
        assert!(msg.len() < 1000);
        assert!(msg.contains("…(+"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
