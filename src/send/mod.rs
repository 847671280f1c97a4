//! Send API model: outgoing messages and the platform's answer.
//!
//! See <https://developers.facebook.com/docs/messenger-platform/send-api-reference>.

mod builder;
mod response;

use serde::{Deserialize, Serialize};

pub use builder::SendRequestBuilder;
pub use response::{SendError, SendResponse};

/// The platform renders at most this many buttons in a button template.
pub const MAX_TEMPLATE_BUTTONS: usize = 3;

/// Top level structure for any message sent through the Send API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub recipient: Recipient,
    pub message: MessageBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
}

impl SendRequest {
    /// Request with every field given up front and the default notification type.
    pub fn new(recipient: Recipient, message: MessageBody) -> Self {
        Self {
            recipient,
            message,
            notification_type: None,
        }
    }

    /// Start a draft; see [SendRequestBuilder].
    pub fn builder() -> SendRequestBuilder {
        SendRequestBuilder::default()
    }
}

/// Who a message goes to.
///
/// Serialized as `{"id": ...}` or `{"phone_number": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Page-scoped user id.
    #[serde(rename = "id")]
    Id(String),
    /// Phone number in `+1(212)555-2368` form; requires the pages_messaging_phone_number permission.
    #[serde(rename = "phone_number")]
    PhoneNumber(String),
}

/// Content of a message: plain text or an attachment, never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageBody {
    Text(String),
    Attachment(Attachment),
}

impl MessageBody {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Attachment(_) => None,
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            Self::Text(_) => None,
            Self::Attachment(a) => Some(a),
        }
    }
}

/// Attached media or structured message, keyed on the wire by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Attachment {
    Image(MediaPayload),
    Audio(MediaPayload),
    Video(MediaPayload),
    File(MediaPayload),
    Template(TemplatePayload),
}

impl Attachment {
    /// The wire `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Audio(_) => "audio",
            Self::Video(_) => "video",
            Self::File(_) => "file",
            Self::Template(_) => "template",
        }
    }

    pub fn media(&self) -> Option<&MediaPayload> {
        match self {
            Self::Image(m) | Self::Audio(m) | Self::Video(m) | Self::File(m) => Some(m),
            Self::Template(_) => None,
        }
    }

    pub fn template(&self) -> Option<&TemplatePayload> {
        match self {
            Self::Template(t) => Some(t),
            _ => None,
        }
    }
}

/// URL of media attached to a message.
///
/// See <https://developers.facebook.com/docs/messenger-platform/send-api-reference/image-attachment>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    pub url: String,
}

/// Structured template payload, keyed on the wire by `template_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum TemplatePayload {
    /// See <https://developers.facebook.com/docs/messenger-platform/send-api-reference/button-template>.
    Button(ButtonTemplate),
}

/// Text with a row of buttons asking the user for input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTemplate {
    pub text: String,
    /// Presentation order.
    pub buttons: Vec<Button>,
}

/// A single button in a button template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    /// Opens `url` in the in-app browser.
    WebUrl { title: String, url: String },
    /// Sends `payload` back to the webhook as a postback.
    Postback { title: String, payload: String },
    /// Dials the number held in `payload`.
    PhoneNumber { title: String, payload: String },
}

impl Button {
    pub fn web_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::WebUrl {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Postback {
            title: title.into(),
            payload: payload.into(),
        }
    }

    pub fn phone_number(title: impl Into<String>, number: impl Into<String>) -> Self {
        Self::PhoneNumber {
            title: title.into(),
            payload: number.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::WebUrl { title, .. }
            | Self::Postback { title, .. }
            | Self::PhoneNumber { title, .. } => title,
        }
    }

    /// The wire `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WebUrl { .. } => "web_url",
            Self::Postback { .. } => "postback",
            Self::PhoneNumber { .. } => "phone_number",
        }
    }
}

/// Push notification behaviour on the recipient's device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Sound and vibration.
    Regular,
    /// On-screen notification only.
    SilentPush,
    /// No notification.
    NoPush,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::SilentPush => "SILENT_PUSH",
            Self::NoPush => "NO_PUSH",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
