//! HTTP transport abstraction.
//!
//! Feed retrieval is parameterized over a small GET capability so the
//! client logic exists once instead of per HTTP backend, and so tests can
//! substitute canned responses. The default implementation wraps
//! [`reqwest::Client`].
//!
//! Timeouts and cancellation are the transport's concern; the client adds
//! no policy of its own and never retries.

use std::time::Instant;

use tracing::{instrument, warn};

use crate::error::Result;

/// A plain HTTP response: status code plus the body read to completion.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The full response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to issue one HTTP GET and read the body as text.
///
/// Implementors decide timeout, TLS, and connection reuse. Errors are
/// transport-level failures only; a non-2xx status is a valid response
/// and is classified by the caller.
pub trait HttpTransport {
    /// Issue a GET request to `url` and return the status and body.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client, keeping its pool and timeout settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let dt = t0.elapsed();

        if !(200..300).contains(&status) {
            warn!(status, elapsed_ms = dt.as_millis() as u64, "GET returned non-success status");
        }
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_success_range() {
        assert!(HttpResponse { status: 200, body: String::new() }.is_success());
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 404, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 500, body: String::new() }.is_success());
    }
}
