//! JSON encoding and decoding at the wire boundary.
//!
//! Outbound requests are validated exactly once, here, before they are
//! serialized. Inbound bodies carrying an `error` object are surfaced as
//! [Error::Remote] without interpretation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::profile::UserProfile;
use crate::send::{SendError, SendRequest, SendResponse};
use crate::validate::Validate;
use crate::webhook::Callback;

/// Validate `request` and serialize it to a JSON body.
pub fn encode_send_request(request: &SendRequest) -> Result<Vec<u8>> {
    request.validate()?;
    let body = serde_json::to_vec(request).map_err(Error::Encode)?;
    tracing::debug!(
        len = body.len(),
        attachment = request.message.attachment().map(|a| a.kind()),
        "encoded send request"
    );
    Ok(body)
}

/// Decode a Send API response body.
///
/// A body with an `error` object becomes [Error::Remote]; in that case
/// `recipient_id` and `message_id` are not required.
pub fn decode_send_response(body: &[u8]) -> Result<SendResponse> {
    let response: SendResponse = decode_remote(body)?;
    tracing::debug!(message_id = %response.message_id, "decoded send response");
    Ok(response)
}

/// Decode a webhook callback body.
pub fn decode_callback(body: &[u8]) -> Result<Callback> {
    let callback: Callback = serde_json::from_slice(body).map_err(Error::Decode)?;
    tracing::debug!(
        object = %callback.object,
        entries = callback.entries.len(),
        "decoded callback"
    );
    Ok(callback)
}

/// Decode a user profile lookup body.
pub fn decode_user_profile(body: &[u8]) -> Result<UserProfile> {
    decode_remote(body)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<SendError>,
}

fn decode_remote<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).map_err(Error::Decode)?;
    if let Some(err) = envelope.error {
        tracing::warn!(
            code = err.code,
            kind = %err.kind,
            fbtrace_id = %err.fbtrace_id,
            "platform returned an error"
        );
        return Err(Error::Remote(err));
    }
    serde_json::from_slice(body).map_err(Error::Decode)
}
