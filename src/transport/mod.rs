//! Transport layer: wire-format details (request addresses, auth headers,
//! JSON encoding/decoding).

mod contacts;
mod http;
mod login;
mod media;
mod messages;
mod registration;

pub use contacts::{decode_contact_check_json_response, encode_contact_check_body};
pub use http::{basic_auth_header, bearer_auth_header, request_address};
pub use login::{decode_login_json_response, encode_first_login_body, encode_standard_login_body};
pub use media::decode_media_upload_json_response;
pub use messages::{
    decode_message_json_response, encode_media_message_body, encode_text_message_body,
};
pub use registration::{
    encode_registration_code_body, encode_verification_body, registration_code_outcome,
    verification_outcome,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field {field} is missing or empty")]
    MissingField { field: &'static str },
}
