//! Send API and user profile client.

use crate::codec;
use crate::error::ValidationError;
use crate::profile::{UserProfile, PROFILE_FIELDS};
use crate::send::{SendRequest, SendResponse};
use crate::transport::Transport;
use bytes::Bytes;
use std::sync::Arc;

/// Default Graph API host.
pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com";

/// Default Graph API version.
pub const DEFAULT_API_VERSION: &str = "v2.6";

/// Where the client points its requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

/// Client for the Messenger Send API and user profile lookups.
///
/// Holds no mutable state; share it behind an `Arc` for concurrent sends.
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    /// Create a client with the default Graph API endpoint.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn base(&self) -> String {
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.api_version
        )
    }

    /// Send API endpoint.
    pub fn messages_url(&self) -> String {
        format!("{}/me/messages", self.base())
    }

    /// User profile endpoint for `user_id`.
    pub fn profile_url(&self, user_id: &str) -> String {
        format!("{}/{}?fields={}", self.base(), user_id, PROFILE_FIELDS)
    }

    /// Validate, encode and post `request`.
    ///
    /// Errors returned by the platform come back as [Error::Remote](crate::Error::Remote), unchanged.
    pub async fn send(&self, request: &SendRequest) -> crate::Result<SendResponse> {
        let body = codec::encode_send_request(request)?;
        let url = self.messages_url();
        tracing::debug!(%url, "sending message");
        let resp = self.transport.post(&url, Bytes::from(body)).await?;
        codec::decode_send_response(&resp)
    }

    /// Look up the public profile of a user who messaged the page.
    pub async fn get_user_profile(&self, user_id: &str) -> crate::Result<UserProfile> {
        if user_id.is_empty() {
            return Err(ValidationError::missing("user_id").into());
        }
        let url = self.profile_url(user_id);
        tracing::debug!(%url, "fetching user profile");
        let resp = self.transport.get(&url).await?;
        codec::decode_user_profile(&resp)
    }
}
