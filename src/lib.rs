//! # fbmessenger
//!
//! Rust data model for the Facebook Messenger Platform.
//!
//! ## Features
//!
//! - Send API requests: text, media attachments and button templates
//! - Send API responses and platform error objects
//! - Webhook callbacks: messages, deliveries, postbacks and opt-ins
//! - User profile lookups
//! - A thin async [Client] over a pluggable [Transport]
//!
//! Transport, authentication, webhook signature checks and retries are left to
//! the caller.
//!
//! ## Example
//!
//! ```
//! use fbmessenger::{codec, SendRequestBuilder};
//!
//! let request = SendRequestBuilder::image("https://example.com/cat.png")
//!     .to("1254459154682919")
//!     .silent_push()
//!     .build()?;
//! let body = codec::encode_send_request(&request)?;
//! assert!(!body.is_empty());
//! # Ok::<(), fbmessenger::Error>(())
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod profile;
pub mod send;
pub mod transport;
pub mod validate;
pub mod webhook;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result, ValidationError};
pub use profile::UserProfile;
pub use send::{
    Attachment, Button, ButtonTemplate, MediaPayload, MessageBody, NotificationType, Recipient,
    SendError, SendRequest, SendRequestBuilder, SendResponse, TemplatePayload,
};
pub use transport::Transport;
pub use validate::Validate;
pub use webhook::{
    Callback, CallbackAttachment, CallbackMessage, Delivery, Entry, MessagingEntry,
    MessagingEvent, OptIn, Postback, Principal,
};
