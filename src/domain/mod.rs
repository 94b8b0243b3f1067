//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ContactCheck, Credentials, MAX_ATTACHMENT_BYTES, MediaMessage, MediaUpload,
    RegistrationRequest, TextMessage,
};
pub use response::{ContactResult, ContactStatus, LoginSession, RegistrationOutcome};
pub use validation::ValidationError;
pub use value::{
    AccessToken, BlockingMode, CountryCode, MediaId, MediaKind, MessageId, MessageText, MimeType,
    NationalNumber, NewPassword, Password, PhoneNumber, Pin, RawPhoneNumber, Recipient, Username,
    VerificationCode, VnameCert,
};
