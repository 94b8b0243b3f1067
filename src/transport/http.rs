use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::domain::{AccessToken, Password, Username, ValidationError};

/// Assemble the request address for an API method: `{host}/{version}/{method}`.
pub fn request_address(
    host: &str,
    version: &str,
    method: &str,
) -> Result<String, ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Empty { field: "api_host" });
    }
    if version.is_empty() {
        return Err(ValidationError::Empty {
            field: "api_version",
        });
    }
    if method.is_empty() {
        return Err(ValidationError::Empty { field: "api_method" });
    }
    Ok(format!("{host}/{version}/{method}"))
}

/// `Authorization` value for Basic auth: `Basic <base64(username:password)>`.
pub fn basic_auth_header(username: &Username, password: &Password) -> String {
    let auth = BASE64_STANDARD.encode(format!("{}:{}", username.as_str(), password.as_str()));
    format!("Basic {auth}")
}

/// `Authorization` value for Bearer auth: `Bearer <token>`.
pub fn bearer_auth_header(token: &AccessToken) -> String {
    format!("Bearer {}", token.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_address_joins_host_version_method() {
        let address = request_address("https://h", "v1", "m").unwrap();
        assert_eq!(address, "https://h/v1/m");

        let address = request_address("https://192.0.2.10:9090", "v1", "users/login").unwrap();
        assert_eq!(address, "https://192.0.2.10:9090/v1/users/login");
    }

    #[test]
    fn request_address_rejects_empty_parts() {
        assert!(matches!(
            request_address("", "v1", "m"),
            Err(ValidationError::Empty { field: "api_host" })
        ));
        assert!(matches!(
            request_address("https://h", "", "m"),
            Err(ValidationError::Empty {
                field: "api_version"
            })
        ));
        assert!(matches!(
            request_address("https://h", "v1", ""),
            Err(ValidationError::Empty {
                field: "api_method"
            })
        ));
    }

    #[test]
    fn basic_auth_header_encodes_colon_joined_pair() {
        let username = Username::new("u").unwrap();
        let password = Password::new("p").unwrap();
        assert_eq!(basic_auth_header(&username, &password), "Basic dTpw");
    }

    #[test]
    fn bearer_auth_header_prefixes_token() {
        let token = AccessToken::new("tok").unwrap();
        assert_eq!(bearer_auth_header(&token), "Bearer tok");
    }
}
