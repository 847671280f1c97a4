//! Webhook callback payloads posted by the platform to a page's endpoint.
//!
//! See <https://developers.facebook.com/docs/messenger-platform/webhook-reference#format>.

use serde::{Deserialize, Deserializer, Serialize};

/// Top level body of a webhook callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callback {
    /// Always `page` for Messenger callbacks.
    pub object: String,
    #[serde(rename = "entry")]
    pub entries: Vec<Entry>,
}

impl Callback {
    /// All messaging entries, in delivery order.
    pub fn messaging(&self) -> impl Iterator<Item = &MessagingEntry> {
        self.entries.iter().flat_map(|e| e.messaging.iter())
    }
}

/// Batch of interactions for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "id")]
    pub page_id: String,
    pub time: i64,
    #[serde(default)]
    pub messaging: Vec<MessagingEntry>,
}

/// One interaction a user had with a page.
///
/// `sender`, `recipient` and `timestamp` are common to every callback; exactly
/// one of the remaining fields is expected to be set. Use [MessagingEntry::event]
/// to look at it as a [MessagingEvent].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingEntry {
    pub sender: Principal,
    pub recipient: Principal,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<CallbackMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postback: Option<Postback>,
    #[serde(rename = "optin", default, skip_serializing_if = "Option::is_none")]
    pub opt_in: Option<OptIn>,
}

impl MessagingEntry {
    /// The populated interaction, checked in message, delivery, postback, opt-in order.
    pub fn event(&self) -> Option<MessagingEvent<'_>> {
        let event = if let Some(m) = &self.message {
            MessagingEvent::Message(m)
        } else if let Some(d) = &self.delivery {
            MessagingEvent::Delivery(d)
        } else if let Some(p) = &self.postback {
            MessagingEvent::Postback(p)
        } else if let Some(o) = &self.opt_in {
            MessagingEvent::OptIn(o)
        } else {
            tracing::warn!(sender = %self.sender.id, "messaging entry without a known event");
            return None;
        };
        Some(event)
    }
}

/// Borrowed view of the interaction carried by a [MessagingEntry].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessagingEvent<'a> {
    /// User sent a message to the page.
    Message(&'a CallbackMessage),
    /// Messages sent by the page were delivered.
    Delivery(&'a Delivery),
    /// User tapped a postback button.
    Postback(&'a Postback),
    /// User came in through a Send-to-Messenger entry point.
    OptIn(&'a OptIn),
}

impl MessagingEvent<'_> {
    /// The wire key of the populated field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Delivery(_) => "delivery",
            Self::Postback(_) => "postback",
            Self::OptIn(_) => "optin",
        }
    }
}

/// Id of a sender or recipient.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
}

/// Message a user sent to the page. Either text or attachments is set.
///
/// See <https://developers.facebook.com/docs/messenger-platform/webhook-reference/message-received>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackMessage {
    #[serde(rename = "mid")]
    pub message_id: String,
    #[serde(rename = "seq")]
    pub sequence: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<CallbackAttachment>,
}

impl CallbackMessage {
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }
}

/// Attachment sent by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAttachment {
    /// `image`, `audio`, `video`, `file`, `location` or `fallback`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Empty for `fallback` and `location` attachments sent without one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: CallbackAttachmentPayload,
}

impl CallbackAttachment {
    pub fn url(&self) -> &str {
        &self.payload.url
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackAttachmentPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which messages sent by the page have been delivered.
///
/// See <https://developers.facebook.com/docs/messenger-platform/webhook-reference/message-delivered>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "mids", default)]
    pub message_ids: Vec<String>,
    /// Every message sent before this timestamp was delivered.
    pub watermark: i64,
    #[serde(rename = "seq")]
    pub sequence: i64,
}

impl Delivery {
    /// Whether a message sent at `timestamp` is covered by the watermark.
    pub fn covers(&self, timestamp: i64) -> bool {
        timestamp <= self.watermark
    }
}

/// Payload of the button a user tapped.
///
/// See <https://developers.facebook.com/docs/messenger-platform/webhook-reference/postback-received>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postback {
    pub payload: String,
}

/// Data-ref passed to the Send-to-Messenger plugin.
///
/// See <https://developers.facebook.com/docs/messenger-platform/webhook-reference/authentication>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptIn {
    #[serde(rename = "ref")]
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn principal(id: &str) -> Principal {
        Principal { id: id.into() }
    }

    fn bare_entry() -> MessagingEntry {
        MessagingEntry {
            sender: principal("USER_ID"),
            recipient: principal("PAGE_ID"),
            timestamp: 1458692752478,
            message: None,
            delivery: None,
            postback: None,
            opt_in: None,
        }
    }

    #[test]
    fn text_message_roundtrip() {
        let mut entry = bare_entry();
        entry.message = Some(CallbackMessage {
            message_id: "mid.1457764197618:41d102a3e1ae206a38".into(),
            sequence: 73,
            text: Some("hello, world!".into()),
            attachments: vec![],
        });
        let callback = Callback {
            object: "page".into(),
            entries: vec![Entry {
                page_id: "PAGE_ID".into(),
                time: 1458692752478,
                messaging: vec![entry.clone()],
            }],
        };

        let json = serde_json::to_value(&callback).unwrap();
        assert!(json["entry"][0]["messaging"][0].get("delivery").is_none());

        let back: Callback = serde_json::from_value(json).unwrap();
        let decoded = &back.entries[0].messaging[0];
        assert_eq!(decoded, &entry);
        assert!(decoded.delivery.is_none());
        assert!(decoded.postback.is_none());
        assert!(decoded.opt_in.is_none());
    }

    #[test]
    fn event_picks_populated_field() {
        let mut entry = bare_entry();
        entry.postback = Some(Postback {
            payload: "USER_DEFINED_PAYLOAD".into(),
        });
        let event = entry.event().unwrap();
        assert_eq!(event.kind(), "postback");
        assert!(matches!(event, MessagingEvent::Postback(p) if p.payload == "USER_DEFINED_PAYLOAD"));

        let mut entry = bare_entry();
        entry.opt_in = Some(OptIn {
            reference: "PASS_THROUGH_PARAM".into(),
        });
        assert_eq!(entry.event().unwrap().kind(), "optin");

        assert!(bare_entry().event().is_none());
    }

    #[test]
    fn delivery_decodes_and_covers_watermark() {
        let entry: MessagingEntry = serde_json::from_value(json!({
            "sender": {"id": "USER_ID"},
            "recipient": {"id": "PAGE_ID"},
            "delivery": {
                "mids": ["mid.1458668856218:ed81099e15d3f4f233"],
                "watermark": 1458668856253i64,
                "seq": 37
            }
        }))
        .unwrap();
        assert_eq!(entry.timestamp, 0);
        let Some(MessagingEvent::Delivery(d)) = entry.event() else {
            panic!("expected delivery");
        };
        assert_eq!(d.message_ids.len(), 1);
        assert_eq!(d.sequence, 37);
        assert!(d.covers(1458668856253));
        assert!(d.covers(1458668856000));
        assert!(!d.covers(1458668856254));
    }

    #[test]
    fn delivery_without_mids() {
        let d: Delivery = serde_json::from_value(json!({"watermark": 10, "seq": 1})).unwrap();
        assert!(d.message_ids.is_empty());
    }

    #[test]
    fn attachment_message_decodes() {
        let msg: CallbackMessage = serde_json::from_value(json!({
            "mid": "mid.1458696618141:b4ef9d19ec21086067",
            "seq": 51,
            "attachments": [
                {"type": "image", "payload": {"url": "https://scontent.example/img.jpg"}}
            ]
        }))
        .unwrap();
        assert!(!msg.is_text());
        assert_eq!(msg.attachments[0].kind, "image");
        assert_eq!(msg.attachments[0].url(), "https://scontent.example/img.jpg");
    }

    #[test]
    fn attachments_without_url_decode() {
        let msg: CallbackMessage = serde_json::from_value(json!({
            "mid": "mid.1458696618141:b4ef9d19ec21086067",
            "seq": 52,
            "attachments": [
                {"type": "location", "payload": {"coordinates": {"lat": 52.3, "long": 4.9}}},
                {"type": "fallback", "payload": null, "title": "Shared link"},
                {"type": "fallback", "payload": {"url": null}},
                {"type": "image", "payload": {"url": "https://scontent.example/img.jpg"}}
            ]
        }))
        .unwrap();
        let urls: Vec<&str> = msg.attachments.iter().map(CallbackAttachment::url).collect();
        assert_eq!(urls, ["", "", "", "https://scontent.example/img.jpg"]);
        assert_eq!(msg.attachments[0].kind, "location");
    }

    #[test]
    fn messaging_flattens_entries_in_order() {
        let callback: Callback = serde_json::from_value(json!({
            "object": "page",
            "entry": [
                {"id": "P", "time": 1, "messaging": [
                    {"sender": {"id": "a"}, "recipient": {"id": "P"}, "timestamp": 1,
                     "postback": {"payload": "one"}}
                ]},
                {"id": "P", "time": 2},
                {"id": "P", "time": 3, "messaging": [
                    {"sender": {"id": "b"}, "recipient": {"id": "P"}, "timestamp": 3,
                     "optin": {"ref": "two"}}
                ]}
            ]
        }))
        .unwrap();
        let senders: Vec<&str> = callback.messaging().map(|m| m.sender.id.as_str()).collect();
        assert_eq!(senders, ["a", "b"]);
        assert!(callback.entries[1].messaging.is_empty());
    }

    #[test]
    fn missing_required_key_fails() {
        let res = serde_json::from_value::<Postback>(json!({}));
        assert!(res.is_err());
        let res = serde_json::from_value::<CallbackMessage>(json!({"seq": 1, "text": "x"}));
        assert!(res.is_err());
    }
}
