//! Transport abstraction for reaching the Graph API.
//!
//! Implement this trait over an HTTP client to plug the model into the real
//! platform. The implementation owns authentication (appending the page
//! access token), timeouts and retries; the [Client](crate::Client) only hands
//! it encoded JSON bodies and decodes what comes back.

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Async trait for a request/response transport (e.g. an HTTPS client).
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON `body` to `url` and return the response body.
    ///
    /// Error responses from the platform must still be returned as `Ok` with
    /// their body, so the `error` object can be decoded.
    async fn post(&self, url: &str, body: Bytes) -> Result<Bytes>;

    /// GET `url` and return the response body.
    async fn get(&self, url: &str) -> Result<Bytes>;
}
