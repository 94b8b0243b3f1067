use serde::Deserialize;

use super::TransportError;
use crate::domain::MediaId;

#[derive(Debug, Clone, Deserialize)]
struct MediaJsonResponse {
    #[serde(default)]
    media: Vec<MediaJsonEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MediaJsonEntry {
    #[serde(default)]
    id: Option<String>,
}

pub fn decode_media_upload_json_response(json: &str) -> Result<MediaId, TransportError> {
    let parsed: MediaJsonResponse = serde_json::from_str(json)?;
    let entry = parsed.media.into_iter().next().unwrap_or_default();

    MediaId::new(entry.id.unwrap_or_default()).map_err(|_| TransportError::MissingField {
        field: "media[0].id",
    })
}
