use crate::domain::validation::ValidationError;
use crate::domain::value::{
    BlockingMode, CountryCode, MediaId, MediaKind, MessageText, MimeType, NationalNumber,
    Password, Pin, RawPhoneNumber, Recipient, Username, VnameCert,
};

/// Largest attachment accepted for media upload, in bytes.
pub const MAX_ATTACHMENT_BYTES: usize = 64_000_000;

#[derive(Debug, Clone)]
/// Username/password pair for the login endpoints (Basic auth).
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated [`Credentials`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone)]
/// Inputs for requesting a phone-number registration code.
pub struct RegistrationRequest {
    country_code: CountryCode,
    phone_number: NationalNumber,
    cert: VnameCert,
    pin: Option<Pin>,
}

impl RegistrationRequest {
    /// Create a registration request without a two-factor PIN.
    pub fn new(country_code: CountryCode, phone_number: NationalNumber, cert: VnameCert) -> Self {
        Self {
            country_code,
            phone_number,
            cert,
            pin: None,
        }
    }

    /// Attach a two-factor PIN.
    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    pub fn phone_number(&self) -> &NationalNumber {
        &self.phone_number
    }

    pub fn cert(&self) -> &VnameCert {
        &self.cert
    }

    pub fn pin(&self) -> Option<&Pin> {
        self.pin.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Phone numbers to validate against the platform, plus the blocking mode.
pub struct ContactCheck {
    contacts: Vec<RawPhoneNumber>,
    blocking: BlockingMode,
}

impl ContactCheck {
    /// Create a contact check with the default blocking mode
    /// ([`BlockingMode::Wait`]).
    ///
    /// Invariant: at least one contact.
    pub fn new(contacts: Vec<RawPhoneNumber>) -> Result<Self, ValidationError> {
        Self::with_blocking(contacts, BlockingMode::default())
    }

    /// Create a contact check with an explicit blocking mode.
    pub fn with_blocking(
        contacts: Vec<RawPhoneNumber>,
        blocking: BlockingMode,
    ) -> Result<Self, ValidationError> {
        if contacts.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self { contacts, blocking })
    }

    pub fn contacts(&self) -> &[RawPhoneNumber] {
        &self.contacts
    }

    pub fn blocking(&self) -> BlockingMode {
        self.blocking
    }
}

#[derive(Debug, Clone)]
/// A binary asset pending upload.
pub struct MediaUpload {
    mime_type: MimeType,
    bytes: Vec<u8>,
}

impl MediaUpload {
    /// Create a validated upload.
    ///
    /// Invariants: non-empty payload, at most [`MAX_ATTACHMENT_BYTES`]
    /// bytes. The MIME allow-list is enforced by [`MimeType`].
    pub fn new(mime_type: MimeType, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::Empty {
                field: "attachment",
            });
        }
        if bytes.len() > MAX_ATTACHMENT_BYTES {
            return Err(ValidationError::AttachmentTooLarge {
                max: MAX_ATTACHMENT_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the upload, returning the MIME type and the payload.
    pub fn into_parts(self) -> (MimeType, Vec<u8>) {
        (self.mime_type, self.bytes)
    }
}

#[derive(Debug, Clone)]
/// An outbound text message. Invariants live in the field types.
pub struct TextMessage {
    pub to: Recipient,
    pub text: MessageText,
}

#[derive(Debug, Clone)]
/// An outbound media message referencing an already-uploaded asset.
pub struct MediaMessage {
    pub to: Recipient,
    pub kind: MediaKind,
    pub media_id: MediaId,
}
