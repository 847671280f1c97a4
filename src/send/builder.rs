//! Draft of a [SendRequest], finalized once with [SendRequestBuilder::build].

use super::{
    Attachment, Button, ButtonTemplate, MediaPayload, MessageBody, NotificationType, Recipient,
    SendRequest, TemplatePayload, MAX_TEMPLATE_BUTTONS,
};
use crate::error::ValidationError;

/// Accumulates the parts of a [SendRequest].
///
/// Recipient and notification setters overwrite earlier values, so calling
/// `to` after `to_phone_number` leaves only the id set.
///
/// ```
/// use fbmessenger::{Button, SendRequestBuilder};
///
/// let request = SendRequestBuilder::button_template(
///     "What do you want to do next?",
///     [Button::postback("Start chatting", "START")],
/// )
/// .to("1254459154682919")
/// .no_push()
/// .build()
/// .unwrap();
/// assert!(request.message.attachment().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendRequestBuilder {
    recipient: Option<Recipient>,
    message: Option<MessageBody>,
    notification_type: Option<NotificationType>,
}

impl SendRequestBuilder {
    /// Draft carrying a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::default().message(MessageBody::Text(text.into()))
    }

    /// Draft carrying an image attachment.
    pub fn image(url: impl Into<String>) -> Self {
        Self::attachment(Attachment::Image(media(url)))
    }

    pub fn audio(url: impl Into<String>) -> Self {
        Self::attachment(Attachment::Audio(media(url)))
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self::attachment(Attachment::Video(media(url)))
    }

    pub fn file(url: impl Into<String>) -> Self {
        Self::attachment(Attachment::File(media(url)))
    }

    /// Draft carrying a button template. Buttons keep the given order.
    pub fn button_template(
        text: impl Into<String>,
        buttons: impl IntoIterator<Item = Button>,
    ) -> Self {
        let buttons: Vec<Button> = buttons.into_iter().collect();
        if buttons.len() > MAX_TEMPLATE_BUTTONS {
            tracing::debug!(
                count = buttons.len(),
                max = MAX_TEMPLATE_BUTTONS,
                "button template exceeds platform limit"
            );
        }
        Self::attachment(Attachment::Template(TemplatePayload::Button(
            ButtonTemplate {
                text: text.into(),
                buttons,
            },
        )))
    }

    pub fn attachment(attachment: Attachment) -> Self {
        Self::default().message(MessageBody::Attachment(attachment))
    }

    /// Replace the message body.
    pub fn message(mut self, message: MessageBody) -> Self {
        self.message = Some(message);
        self
    }

    /// Address the message to a page-scoped user id.
    pub fn to(mut self, user_id: impl Into<String>) -> Self {
        self.recipient = Some(Recipient::Id(user_id.into()));
        self
    }

    /// Address the message to a phone number.
    pub fn to_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.recipient = Some(Recipient::PhoneNumber(phone_number.into()));
        self
    }

    pub fn regular(self) -> Self {
        self.with_notification_type(NotificationType::Regular)
    }

    pub fn silent_push(self) -> Self {
        self.with_notification_type(NotificationType::SilentPush)
    }

    pub fn no_push(self) -> Self {
        self.with_notification_type(NotificationType::NoPush)
    }

    pub fn with_notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = Some(notification_type);
        self
    }

    pub fn recipient(&self) -> Option<&Recipient> {
        self.recipient.as_ref()
    }

    pub fn message_body(&self) -> Option<&MessageBody> {
        self.message.as_ref()
    }

    pub fn notification_type(&self) -> Option<NotificationType> {
        self.notification_type
    }

    /// Finish the draft. Fails naming `recipient` or `message` if either was never set.
    pub fn build(self) -> Result<SendRequest, ValidationError> {
        let recipient = self
            .recipient
            .ok_or_else(|| ValidationError::missing("recipient"))?;
        let message = self
            .message
            .ok_or_else(|| ValidationError::missing("message"))?;
        Ok(SendRequest {
            recipient,
            message,
            notification_type: self.notification_type,
        })
    }
}

fn media(url: impl Into<String>) -> MediaPayload {
    MediaPayload { url: url.into() }
}
