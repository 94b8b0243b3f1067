//! Typed Rust client for the WhatsApp Business on-premises HTTP API.
//!
//! The crate is a thin, stateless wrapper over the REST endpoints of an
//! on-premises deployment: login, phone-number registration, contact
//! validation, media upload, and message sending. The design is layered:
//! a domain layer of strong types with validation, a transport layer for
//! wire-format details, and a small client layer orchestrating requests.
//!
//! Every call is a single request/response round trip. The client holds no
//! cross-call state: the bearer token returned by login is handed back to
//! the caller, who passes it into subsequent operations.
//!
//! ```rust,no_run
//! use whatsapp_onprem::{Credentials, MessageText, Recipient, TextMessage, WhatsAppClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), whatsapp_onprem::WhatsAppError> {
//!     // On-premises deployments commonly sit behind a self-signed
//!     // certificate; TLS verification stays on unless disabled here.
//!     let client = WhatsAppClient::builder("https://192.0.2.10:9090")
//!         .verify_tls(false)
//!         .build()?;
//!
//!     let session = client.login(&Credentials::new("admin", "secret")?).await?;
//!
//!     let message = TextMessage {
//!         to: Recipient::new("79251234567")?,
//!         text: MessageText::new("hello")?,
//!     };
//!     let id = client.send_text_message(&session.token, &message).await?;
//!     println!("sent {}", id.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{CallDetails, RawResponse, WhatsAppClient, WhatsAppClientBuilder, WhatsAppError};
pub use domain::{
    AccessToken, BlockingMode, ContactCheck, ContactResult, ContactStatus, CountryCode,
    Credentials, LoginSession, MAX_ATTACHMENT_BYTES, MediaId, MediaKind, MediaMessage,
    MediaUpload, MessageId, MessageText, MimeType, NationalNumber, NewPassword, Password,
    PhoneNumber, Pin, RawPhoneNumber, Recipient, RegistrationOutcome, RegistrationRequest,
    TextMessage, Username, ValidationError, VerificationCode, VnameCert,
};
