use crate::domain::value::AccessToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a login call: the bearer token plus its server-defined expiry.
///
/// `expires_after` is preserved verbatim (the server reports either a
/// number of seconds or a timestamp, depending on deployment). This crate
/// never stores the session; the caller owns persistence and reuse.
pub struct LoginSession {
    pub token: AccessToken,
    pub expires_after: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Outcome of a registration-code request or verification.
///
/// `Error` is a regular return value, not a failure: the remote call
/// completed with a success status, but the account was neither created
/// nor accepted for verification.
pub enum RegistrationOutcome {
    /// Account registered (HTTP 201).
    Created,
    /// Registration pending; verification must be completed (HTTP 202).
    Accepted,
    /// Success status outside the mapped set.
    Error,
}

impl RegistrationOutcome {
    /// Canonical lower-case name of the outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Accepted => "accepted",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Validation status of a single checked contact.
///
/// Unknown wire values are preserved in [`ContactStatus::Other`].
pub enum ContactStatus {
    Valid,
    Invalid,
    Processing,
    Other(String),
}

impl ContactStatus {
    /// Map a wire value to a status, preserving unknown values.
    pub fn from_wire(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.as_str() {
            "valid" => Self::Valid,
            "invalid" => Self::Invalid,
            "processing" => Self::Processing,
            _ => Self::Other(value),
        }
    }

    /// The wire value of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Processing => "processing",
            Self::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the contact-check response.
pub struct ContactResult {
    /// The phone number as submitted, if echoed back by the server.
    pub input: Option<String>,
    /// Validation status of the number.
    pub status: ContactStatus,
    /// Resolved WhatsApp id, present for valid contacts.
    pub wa_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_outcome_names() {
        assert_eq!(RegistrationOutcome::Created.as_str(), "created");
        assert_eq!(RegistrationOutcome::Accepted.as_str(), "accepted");
        assert_eq!(RegistrationOutcome::Error.as_str(), "error");
    }

    #[test]
    fn contact_status_preserves_unknown_values() {
        assert_eq!(ContactStatus::from_wire("valid"), ContactStatus::Valid);
        assert_eq!(ContactStatus::from_wire("invalid"), ContactStatus::Invalid);
        assert_eq!(
            ContactStatus::from_wire("processing"),
            ContactStatus::Processing
        );

        let other = ContactStatus::from_wire("deferred");
        assert_eq!(other, ContactStatus::Other("deferred".to_owned()));
        assert_eq!(other.as_str(), "deferred");
    }
}
