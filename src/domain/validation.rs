use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    PasswordPolicy,
    UnsupportedMimeType { input: String },
    UnknownMediaKind { input: String },
    InvalidPhoneNumber { input: String },
    InvalidPin { input: String },
    InvalidHostUrl { input: String },
    MessageTooLong { max: usize, actual: usize },
    AttachmentTooLarge { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::PasswordPolicy => {
                write!(f, "new password does not meet the complexity policy")
            }
            Self::UnsupportedMimeType { input } => {
                write!(f, "unsupported MIME type: {input}")
            }
            Self::UnknownMediaKind { input } => write!(f, "unknown media kind: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidPin { input } => write!(f, "pin must be six digits, got: {input}"),
            Self::InvalidHostUrl { input } => write!(f, "invalid host URL: {input}"),
            Self::MessageTooLong { max, actual } => {
                write!(f, "message too long: {actual} characters (max {max})")
            }
            Self::AttachmentTooLarge { max, actual } => {
                write!(f, "attachment too large: {actual} bytes (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "token" };
        assert_eq!(err.to_string(), "token must not be empty");

        let err = ValidationError::PasswordPolicy;
        assert_eq!(
            err.to_string(),
            "new password does not meet the complexity policy"
        );

        let err = ValidationError::UnsupportedMimeType {
            input: "text/plain".to_owned(),
        };
        assert_eq!(err.to_string(), "unsupported MIME type: text/plain");

        let err = ValidationError::UnknownMediaKind {
            input: "video".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown media kind: video");

        let err = ValidationError::MessageTooLong {
            max: 4096,
            actual: 4097,
        };
        assert_eq!(
            err.to_string(),
            "message too long: 4097 characters (max 4096)"
        );

        let err = ValidationError::AttachmentTooLarge {
            max: 64_000_000,
            actual: 64_000_001,
        };
        assert_eq!(
            err.to_string(),
            "attachment too large: 64000001 bytes (max 64000000)"
        );
    }
}
