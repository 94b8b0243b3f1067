use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use crate::domain::{AccessToken, LoginSession, NewPassword};

#[derive(Debug, Clone, Deserialize)]
struct LoginJsonResponse {
    #[serde(default)]
    users: Vec<LoginJsonUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LoginJsonUser {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    expires_after: Option<TransportExpiry>,
}

/// The server reports the token lifetime either as a JSON number or as a
/// formatted timestamp string, depending on deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportExpiry {
    String(String),
    Number(serde_json::Number),
}

impl TransportExpiry {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn encode_first_login_body(new_password: &NewPassword) -> String {
    json!({ (NewPassword::FIELD): new_password.as_str() }).to_string()
}

pub fn encode_standard_login_body() -> String {
    json!({}).to_string()
}

pub fn decode_login_json_response(json: &str) -> Result<LoginSession, TransportError> {
    let parsed: LoginJsonResponse = serde_json::from_str(json)?;
    let user = parsed.users.into_iter().next().unwrap_or_default();

    let token = AccessToken::new(user.token.unwrap_or_default()).map_err(|_| {
        TransportError::MissingField {
            field: "users[0].token",
        }
    })?;

    Ok(LoginSession {
        token,
        expires_after: user.expires_after.map(TransportExpiry::into_string),
    })
}
