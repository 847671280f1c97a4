//! Send API responses.

use serde::{Deserialize, Serialize};

/// Successful answer to a [SendRequest](super::SendRequest).
///
/// See <https://developers.facebook.com/docs/messenger-platform/send-api-reference#response>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub recipient_id: String,
    pub message_id: String,
}

/// Error object returned by the platform instead of a [SendResponse].
///
/// Keys the platform leaves out decode as empty, so a partial error object
/// still reaches the caller.
///
/// See <https://developers.facebook.com/docs/messenger-platform/send-api-reference#errors>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    /// Opaque; a string or object depending on the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_data: Option<serde_json::Value>,
    pub fbtrace_id: String,
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, code {}, fbtrace_id {})",
            self.message, self.kind, self.code, self.fbtrace_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn send_error_decodes_and_displays() {
        let err: SendError = serde_json::from_value(json!({
            "message": "Invalid OAuth access token.",
            "type": "OAuthException",
            "code": 190,
            "error_data": "token expired",
            "fbtrace_id": "BLBz/WZt8dN"
        }))
        .unwrap();
        assert_eq!(err.code, 190);
        assert_eq!(err.kind, "OAuthException");
        assert_eq!(err.error_data, Some(json!("token expired")));
        assert_eq!(err.error_subcode, None);
        assert_eq!(
            err.to_string(),
            "Invalid OAuth access token. (OAuthException, code 190, fbtrace_id BLBz/WZt8dN)"
        );
    }

    #[test]
    fn send_error_data_is_optional() {
        let err: SendError = serde_json::from_value(json!({
            "message": "(#100) No matching user found",
            "type": "OAuthException",
            "code": 100,
            "error_subcode": 2018001,
            "fbtrace_id": "H3qnFWWW"
        }))
        .unwrap();
        assert!(err.error_data.is_none());
        assert_eq!(err.error_subcode, Some(2018001));
    }

    #[test]
    fn send_error_missing_keys_are_empty() {
        let err: SendError = serde_json::from_value(json!({"code": 2})).unwrap();
        assert_eq!(err.code, 2);
        assert_eq!(err.message, "");
        assert_eq!(err.kind, "");
        assert_eq!(err.fbtrace_id, "");
    }
}
