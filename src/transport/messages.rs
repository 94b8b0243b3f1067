use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use crate::domain::{MediaMessage, MessageId, Recipient, TextMessage};

/// Only individual recipients are supported; group sends go through a
/// different endpoint family.
const RECIPIENT_TYPE: &str = "individual";

#[derive(Debug, Clone, Deserialize)]
struct MessagesJsonResponse {
    #[serde(default)]
    messages: Vec<MessageJsonEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MessageJsonEntry {
    #[serde(default)]
    id: Option<String>,
}

pub fn encode_text_message_body(message: &TextMessage) -> String {
    json!({
        "recipient_type": RECIPIENT_TYPE,
        (Recipient::FIELD): message.to.as_str(),
        "type": "text",
        "text": { "body": message.text.as_str() },
    })
    .to_string()
}

pub fn encode_media_message_body(message: &MediaMessage) -> String {
    let kind = message.kind.as_str();
    let mut body = json!({
        "recipient_type": RECIPIENT_TYPE,
        (Recipient::FIELD): message.to.as_str(),
        "type": kind,
    });
    body[kind] = json!({ "id": message.media_id.as_str() });
    body.to_string()
}

pub fn decode_message_json_response(json: &str) -> Result<MessageId, TransportError> {
    let parsed: MessagesJsonResponse = serde_json::from_str(json)?;
    let entry = parsed.messages.into_iter().next().unwrap_or_default();

    MessageId::new(entry.id.unwrap_or_default()).map_err(|_| TransportError::MissingField {
        field: "messages[0].id",
    })
}
