//! Required-field checks run before an outbound value goes on the wire.

use crate::error::ValidationError;
use crate::send::{
    Attachment, Button, ButtonTemplate, MediaPayload, MessageBody, Recipient, SendRequest,
    TemplatePayload,
};

/// Checks that every required field of a value is present (non-empty).
pub trait Validate {
    /// Validate with field paths reported under `path`.
    fn validate_at(&self, path: &str) -> Result<(), ValidationError>;

    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at("")
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

fn require(value: &str, path: String) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::missing(path));
    }
    Ok(())
}

impl Validate for SendRequest {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        self.recipient.validate_at(&join(path, "recipient"))?;
        self.message.validate_at(&join(path, "message"))
    }
}

impl Validate for Recipient {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        // An empty identifier means no recipient at all.
        match self {
            Self::Id(v) | Self::PhoneNumber(v) => require(v, path.to_string()),
        }
    }
}

impl Validate for MessageBody {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        match self {
            Self::Text(t) => require(t, join(path, "text")),
            Self::Attachment(a) => a.validate_at(&join(path, "attachment")),
        }
    }
}

impl Validate for Attachment {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        let payload = join(path, "payload");
        match self {
            Self::Image(m) | Self::Audio(m) | Self::Video(m) | Self::File(m) => {
                m.validate_at(&payload)
            }
            Self::Template(t) => t.validate_at(&payload),
        }
    }
}

impl Validate for MediaPayload {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        require(&self.url, join(path, "url"))
    }
}

impl Validate for TemplatePayload {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        match self {
            Self::Button(b) => b.validate_at(path),
        }
    }
}

impl Validate for ButtonTemplate {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        require(&self.text, join(path, "text"))?;
        for (i, button) in self.buttons.iter().enumerate() {
            button.validate_at(&join(path, &format!("buttons[{i}]")))?;
        }
        Ok(())
    }
}

impl Validate for Button {
    fn validate_at(&self, path: &str) -> Result<(), ValidationError> {
        require(self.title(), join(path, "title"))?;
        match self {
            Self::WebUrl { url, .. } => require(url, join(path, "url")),
            Self::Postback { payload, .. } | Self::PhoneNumber { payload, .. } => {
                require(payload, join(path, "payload"))
            }
        }
    }
}
