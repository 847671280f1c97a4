//! Basic example: send a button template through a stub transport and decode a webhook callback.
//!
//! Run with: `cargo run --example basic`

use async_trait::async_trait;
use bytes::Bytes;
use fbmessenger::{codec, Button, Client, MessagingEvent, SendRequestBuilder, Transport};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Prints what would go over the wire and answers like the Send API.
struct PrintTransport;

#[async_trait]
impl Transport for PrintTransport {
    async fn post(&self, url: &str, body: Bytes) -> fbmessenger::Result<Bytes> {
        println!("POST {url}\n{}", String::from_utf8_lossy(&body));
        Ok(Bytes::from_static(
            br#"{"recipient_id":"1254459154682919","message_id":"mid.1456970487936:c34767dfe57ee6e339"}"#,
        ))
    }

    async fn get(&self, url: &str) -> fbmessenger::Result<Bytes> {
        println!("GET {url}");
        Ok(Bytes::from_static(br#"{"first_name":"Peter","last_name":"Chang"}"#))
    }
}

const CALLBACK: &str = r#"{
  "object": "page",
  "entry": [{
    "id": "PAGE_ID",
    "time": 1458692752478,
    "messaging": [
      {"sender": {"id": "USER_ID"}, "recipient": {"id": "PAGE_ID"}, "timestamp": 1458692752478,
       "message": {"mid": "mid.1457764197618:41d102a3e1ae206a38", "seq": 73, "text": "hello, world!"}},
      {"sender": {"id": "USER_ID"}, "recipient": {"id": "PAGE_ID"}, "timestamp": 1458692752479,
       "postback": {"payload": "START"}}
    ]
  }]
}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let client = Client::new(Arc::new(PrintTransport));

    let request = SendRequestBuilder::button_template(
        "What do you want to do next?",
        [
            Button::web_url("Show Website", "https://petersapparel.parseapp.com"),
            Button::postback("Start Chatting", "START"),
        ],
    )
    .to("1254459154682919")
    .regular()
    .build()?;

    let resp = client.send(&request).await?;
    println!("[Send] delivered as {}", resp.message_id);

    let profile = client.get_user_profile("1254459154682919").await?;
    println!("[Profile] {}", profile.full_name());

    let callback = codec::decode_callback(CALLBACK.as_bytes())?;
    for entry in callback.messaging() {
        match entry.event() {
            Some(MessagingEvent::Message(m)) => {
                println!("[Event] message from {}: {:?}", entry.sender.id, m.text);
            }
            Some(MessagingEvent::Postback(p)) => {
                println!("[Event] postback from {}: {}", entry.sender.id, p.payload);
            }
            Some(other) => println!("[Event] {}", other.kind()),
            None => {}
        }
    }

    Ok(())
}
