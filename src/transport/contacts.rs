use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use crate::domain::{ContactCheck, ContactResult, ContactStatus, RawPhoneNumber};

#[derive(Debug, Clone, Deserialize)]
struct ContactsJsonResponse {
    #[serde(default)]
    contacts: Vec<ContactJsonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactJsonEntry {
    #[serde(default)]
    input: Option<String>,
    status: String,
    #[serde(default)]
    wa_id: Option<String>,
}

pub fn encode_contact_check_body(check: &ContactCheck) -> String {
    json!({
        "blocking": check.blocking().as_str(),
        "contacts": check
            .contacts()
            .iter()
            .map(RawPhoneNumber::raw)
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// Decode the contact-check response. A missing `contacts` field decodes as
/// an empty list.
pub fn decode_contact_check_json_response(
    json: &str,
) -> Result<Vec<ContactResult>, TransportError> {
    let parsed: ContactsJsonResponse = serde_json::from_str(json)?;
    Ok(parsed
        .contacts
        .into_iter()
        .map(|entry| ContactResult {
            input: entry.input,
            status: ContactStatus::from_wire(entry.status),
            wa_id: entry.wa_id,
        })
        .collect())
}
