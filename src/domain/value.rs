use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WhatsApp Business account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name used in validation errors (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WhatsApp Business account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Field name used in validation errors (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Replacement password submitted with a first login (`new_password`).
///
/// Invariant: satisfies the account password complexity policy: length in
/// [`NewPassword::MIN_CHARS`]..=[`NewPassword::MAX_CHARS`] characters, at
/// least one ASCII digit, one uppercase letter, one lowercase letter, and
/// one character from [`NewPassword::SPECIAL_CHARS`].
pub struct NewPassword(String);

impl NewPassword {
    /// Wire field name used by the WhatsApp Business API (`new_password`).
    pub const FIELD: &'static str = "new_password";

    /// Minimum password length in characters.
    pub const MIN_CHARS: usize = 8;
    /// Maximum password length in characters.
    pub const MAX_CHARS: usize = 64;

    /// Special characters accepted by the complexity policy.
    pub const SPECIAL_CHARS: &'static str = "!\"#$%&\\'()*+,-./:;<=>?@[]^_`{|}~";

    /// Create a policy-checked [`NewPassword`].
    ///
    /// An empty input fails with [`ValidationError::Empty`]; a non-empty
    /// input that misses any policy requirement fails with
    /// [`ValidationError::PasswordPolicy`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !Self::meets_policy(&value) {
            return Err(ValidationError::PasswordPolicy);
        }
        Ok(Self(value))
    }

    /// Check a candidate password against the complexity policy.
    pub fn meets_policy(candidate: &str) -> bool {
        let length = candidate.chars().count();
        if !(Self::MIN_CHARS..=Self::MAX_CHARS).contains(&length) {
            return false;
        }
        if !candidate.chars().any(|ch| ch.is_ascii_digit()) {
            return false;
        }
        if !candidate.chars().any(|ch| ch.is_ascii_uppercase()) {
            return false;
        }
        if !candidate.chars().any(|ch| ch.is_ascii_lowercase()) {
            return false;
        }
        candidate.chars().any(|ch| Self::SPECIAL_CHARS.contains(ch))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bearer access token issued by a login call.
///
/// The token is opaque: this crate never parses or mutates it, and never
/// stores it; the caller owns persistence and reuse.
///
/// Invariant: non-empty after trimming.
pub struct AccessToken(String);

impl AccessToken {
    /// Wire field name used by the WhatsApp Business API (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Country calling code for phone-number registration (`country_code`).
///
/// Invariant: non-empty after trimming.
pub struct CountryCode(String);

impl CountryCode {
    /// Wire field name used by the WhatsApp Business API (`country_code`).
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated country code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number without its country code, as registered (`phone_number`).
///
/// Invariant: non-empty after trimming.
pub struct NationalNumber(String);

impl NationalNumber {
    /// Wire field name used by the WhatsApp Business API (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Create a validated [`NationalNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base64-encoded vname certificate downloaded from Business Manager (`cert`).
///
/// The certificate is opaque to this crate.
///
/// Invariant: non-empty after trimming.
pub struct VnameCert(String);

impl VnameCert {
    /// Wire field name used by the WhatsApp Business API (`cert`).
    pub const FIELD: &'static str = "cert";

    /// Create a validated [`VnameCert`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated certificate blob.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Six-digit two-factor PIN (`pin`).
///
/// Invariant: exactly six ASCII digits after trimming.
pub struct Pin(String);

impl Pin {
    /// Wire field name used by the WhatsApp Business API (`pin`).
    pub const FIELD: &'static str = "pin";

    /// Create a validated [`Pin`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 6 || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(ValidationError::InvalidPin {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated PIN.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Registration code received over SMS (`code`).
///
/// Invariant: non-empty after trimming.
pub struct VerificationCode(String);

impl VerificationCode {
    /// Wire field name used by the WhatsApp Business API (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`VerificationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WhatsApp id of a message recipient (`to`).
///
/// Invariant: non-empty after trimming.
pub struct Recipient(String);

impl Recipient {
    /// Wire field name used by the WhatsApp Business API (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated [`Recipient`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated recipient id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text body of an outbound message (`text.body`).
///
/// Invariant: non-empty after trimming and at most
/// [`MessageText::MAX_CHARS`] characters. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by the WhatsApp Business API (`text`).
    pub const FIELD: &'static str = "text";

    /// Maximum text length in characters.
    pub const MAX_CHARS: usize = 4096;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let length = value.chars().count();
        if length > Self::MAX_CHARS {
            return Err(ValidationError::MessageTooLong {
                max: Self::MAX_CHARS,
                actual: length,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MIME type of an uploadable asset, restricted to the platform allow-list.
pub struct MimeType(String);

impl MimeType {
    /// Field name used in validation errors (`mime_type`).
    pub const FIELD: &'static str = "mime_type";

    /// MIME types accepted for media upload.
    pub const SUPPORTED: [&'static str; 8] = [
        "application/pdf",
        "application/vnd.ms-powerpoint",
        "application/msword",
        "image/png",
        "image/jpeg",
        "audio/aac",
        "audio/mpeg",
        "audio/ogg",
    ];

    /// Create a validated [`MimeType`].
    ///
    /// An empty input fails with [`ValidationError::Empty`]; a non-empty
    /// input outside [`MimeType::SUPPORTED`] fails with
    /// [`ValidationError::UnsupportedMimeType`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !Self::is_supported(trimmed) {
            return Err(ValidationError::UnsupportedMimeType {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Check whether a MIME type string is in the upload allow-list.
    ///
    /// The match is exact; parameters (`; charset=...`) are not stripped.
    pub fn is_supported(candidate: &str) -> bool {
        Self::SUPPORTED.contains(&candidate)
    }

    /// Borrow the validated MIME type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned id of an uploaded media asset.
///
/// The id is opaque; it is returned by media upload and referenced by media
/// message sends.
///
/// Invariant: non-empty after trimming.
pub struct MediaId(String);

impl MediaId {
    /// Field name used in validation errors (`media_id`).
    pub const FIELD: &'static str = "media_id";

    /// Create a validated [`MediaId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated media id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Server-assigned id of a sent message. Opaque.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Field name used in validation errors (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number submitted to contact check (`contacts` entries).
///
/// Invariant: non-empty after trimming. This type does not normalize; if
/// you want E.164 normalization, parse into [`PhoneNumber`] and convert it
/// into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Field name used in validation errors (`contact`).
    pub const FIELD: &'static str = "contact";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent on the wire.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to its E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Field name used in validation errors (`contact`).
    pub const FIELD: &'static str = "contact";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of an outbound media message (`type`).
pub enum MediaKind {
    Audio,
    Image,
    Document,
}

impl MediaKind {
    /// Wire name of the kind, also used as the key of the media object in
    /// the message body (`audio`, `image`, `document`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Document => "document",
        }
    }

    /// Parse a wire name into a [`MediaKind`].
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "audio" => Ok(Self::Audio),
            "image" => Ok(Self::Image),
            "document" => Ok(Self::Document),
            other => Err(ValidationError::UnknownMediaKind {
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Contact-check blocking mode (`blocking`): whether the call waits for
/// full validation of all submitted numbers.
pub enum BlockingMode {
    #[default]
    Wait,
    NoWait,
}

impl BlockingMode {
    /// Wire value of the mode (`wait`, `no_wait`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wait => "wait",
            Self::NoWait => "no_wait",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  admin ").unwrap();
        assert_eq!(username.as_str(), "admin");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let token = AccessToken::new(" abc.def.ghi ").unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");
        assert!(AccessToken::new("  ").is_err());

        let cc = CountryCode::new(" 7 ").unwrap();
        assert_eq!(cc.as_str(), "7");
        assert!(CountryCode::new("").is_err());

        let phone = NationalNumber::new(" 9251234567 ").unwrap();
        assert_eq!(phone.as_str(), "9251234567");
        assert!(NationalNumber::new("  ").is_err());

        let cert = VnameCert::new(" Q2VydA== ").unwrap();
        assert_eq!(cert.as_str(), "Q2VydA==");
        assert!(VnameCert::new("").is_err());

        let code = VerificationCode::new(" 123-456 ").unwrap();
        assert_eq!(code.as_str(), "123-456");
        assert!(VerificationCode::new("  ").is_err());

        let recipient = Recipient::new(" 79251234567 ").unwrap();
        assert_eq!(recipient.as_str(), "79251234567");
        assert!(Recipient::new("").is_err());

        let media_id = MediaId::new(" f043afd0 ").unwrap();
        assert_eq!(media_id.as_str(), "f043afd0");
        assert!(MediaId::new("  ").is_err());

        let message_id = MessageId::new(" gBEGkYiEB1VXAglK ").unwrap();
        assert_eq!(message_id.as_str(), "gBEGkYiEB1VXAglK");
        assert!(MessageId::new("  ").is_err());
    }

    #[test]
    fn password_policy_accepts_compliant_passwords() {
        assert!(NewPassword::meets_policy("Abcdef1!"));
        assert!(NewPassword::meets_policy("Str0ng&Password"));
        // Backslash counts as a special character.
        assert!(NewPassword::meets_policy("Abcdef1\\"));
        // Boundary lengths.
        assert!(NewPassword::meets_policy("Aa1!Aa1!"));
        let longest = format!("Aa1!{}", "x".repeat(60));
        assert_eq!(longest.chars().count(), 64);
        assert!(NewPassword::meets_policy(&longest));
    }

    #[test]
    fn password_policy_rejects_each_missing_requirement() {
        // Too short / too long.
        assert!(!NewPassword::meets_policy("Ab1!"));
        let too_long = format!("Aa1!{}", "x".repeat(61));
        assert!(!NewPassword::meets_policy(&too_long));
        // No digit.
        assert!(!NewPassword::meets_policy("Abcdefg!"));
        // No uppercase, no special.
        assert!(!NewPassword::meets_policy("abcdefg1"));
        // No lowercase.
        assert!(!NewPassword::meets_policy("ABCDEFG1!"));
        // No special.
        assert!(!NewPassword::meets_policy("Abcdefg1"));
    }

    #[test]
    fn new_password_distinguishes_empty_from_weak() {
        assert!(matches!(
            NewPassword::new(""),
            Err(ValidationError::Empty {
                field: NewPassword::FIELD
            })
        ));
        assert!(matches!(
            NewPassword::new("weak"),
            Err(ValidationError::PasswordPolicy)
        ));
        let ok = NewPassword::new("Abcdef1!").unwrap();
        assert_eq!(ok.as_str(), "Abcdef1!");
    }

    #[test]
    fn pin_requires_six_digits() {
        let pin = Pin::new(" 123456 ").unwrap();
        assert_eq!(pin.as_str(), "123456");
        assert!(matches!(
            Pin::new("12345"),
            Err(ValidationError::InvalidPin { .. })
        ));
        assert!(matches!(
            Pin::new("12345a"),
            Err(ValidationError::InvalidPin { .. })
        ));
        assert!(matches!(
            Pin::new(""),
            Err(ValidationError::Empty { field: Pin::FIELD })
        ));
    }

    #[test]
    fn message_text_enforces_length_cap() {
        let text = MessageText::new("hello").unwrap();
        assert_eq!(text.as_str(), "hello");
        assert!(MessageText::new("").is_err());

        let at_cap = "x".repeat(MessageText::MAX_CHARS);
        assert!(MessageText::new(at_cap).is_ok());

        let over_cap = "x".repeat(MessageText::MAX_CHARS + 1);
        assert!(matches!(
            MessageText::new(over_cap),
            Err(ValidationError::MessageTooLong {
                max: MessageText::MAX_CHARS,
                actual: 4097
            })
        ));
    }

    #[test]
    fn message_text_counts_characters_not_bytes() {
        // 4096 multibyte characters are within the cap.
        let text = "ю".repeat(MessageText::MAX_CHARS);
        assert!(MessageText::new(text).is_ok());
    }

    #[test]
    fn mime_type_allow_list_is_exact() {
        for supported in MimeType::SUPPORTED {
            assert!(MimeType::is_supported(supported), "{supported}");
            assert!(MimeType::new(supported).is_ok());
        }
        assert!(!MimeType::is_supported("text/plain"));
        assert!(!MimeType::is_supported("image/jpeg; charset=utf-8"));
        assert!(matches!(
            MimeType::new("text/plain"),
            Err(ValidationError::UnsupportedMimeType { .. })
        ));
        assert!(matches!(
            MimeType::new(""),
            Err(ValidationError::Empty {
                field: MimeType::FIELD
            })
        ));
    }

    #[test]
    fn media_kind_round_trips_wire_names() {
        assert_eq!(MediaKind::from_name("audio").unwrap(), MediaKind::Audio);
        assert_eq!(MediaKind::from_name("image").unwrap(), MediaKind::Image);
        assert_eq!(
            MediaKind::from_name("document").unwrap(),
            MediaKind::Document
        );
        assert!(matches!(
            MediaKind::from_name("video"),
            Err(ValidationError::UnknownMediaKind { .. })
        ));
        assert_eq!(MediaKind::Audio.as_str(), "audio");
    }

    #[test]
    fn blocking_mode_wire_values() {
        assert_eq!(BlockingMode::default(), BlockingMode::Wait);
        assert_eq!(BlockingMode::Wait.as_str(), "wait");
        assert_eq!(BlockingMode::NoWait.as_str(), "no_wait");
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" +79251234567 ").unwrap();
        assert_eq!(raw.raw(), "+79251234567");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+79251234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+7 925 123-45-67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+79251234567");
        assert_eq!(p1.raw(), "+79251234567");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+79251234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }
}
