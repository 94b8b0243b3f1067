//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccessToken, ContactCheck, ContactResult, Credentials, LoginSession, MediaId, MediaMessage,
    MediaUpload, MessageId, NewPassword, RegistrationOutcome, RegistrationRequest, TextMessage,
    ValidationError, VerificationCode,
};
use crate::transport::{self, TransportError};

/// API version segment used when the builder is not told otherwise.
const DEFAULT_API_VERSION: &str = "v1";

/// HTTP statuses the API uses for successful calls.
const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

const LOGIN_METHOD: &str = "users/login";
const ACCOUNT_METHOD: &str = "account";
const VERIFY_METHOD: &str = "account/verify";
const CONTACTS_METHOD: &str = "contacts";
const MEDIA_METHOD: &str = "media";
const MESSAGES_METHOD: &str = "messages";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const AUTHORIZATION_HEADER: &str = "Authorization";
const JSON_CONTENT_TYPE: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;
        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in &headers {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request.body(body).send().await?;
            Self::read_response(response).await
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            for (name, value) in &headers {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request.send().await?;
            Self::read_response(response).await
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Full request/response context of a failed remote call.
///
/// This is the only failure-visibility channel the crate has (it never
/// logs), so everything needed to diagnose the call is captured here,
/// including the `Authorization` request header.
pub struct CallDetails {
    /// Request address.
    pub address: String,
    /// Request headers as sent.
    pub request_headers: Vec<(String, String)>,
    /// Request body (POST only). Binary bodies are summarized as
    /// `<N bytes, mime/type>`.
    pub request_body: Option<String>,
    /// Response status code.
    pub response_status: u16,
    /// Response body text.
    pub response_body: String,
    /// Response headers.
    pub response_headers: Vec<(String, String)>,
}

impl fmt::Display for CallDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "address: {}", self.address)?;
        writeln!(f, "request headers: {:?}", self.request_headers)?;
        if let Some(body) = &self.request_body {
            writeln!(f, "request body: {body}")?;
        }
        writeln!(f, "response body: {}", self.response_body)?;
        writeln!(f, "response headers: {:?}", self.response_headers)?;
        write!(f, "status code: {}", self.response_status)
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WhatsAppClient`].
pub enum WhatsAppError {
    /// A required input was missing or violated a precondition (password
    /// policy, size/length caps, unknown MIME type or media kind).
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// HTTP client / I/O failure (DNS, TLS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with a status outside {200, 201, 202}.
    #[error("remote call failed:\n{details}")]
    RemoteCallFailed { details: CallDetails },

    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The call succeeded at the transport level, but the expected field
    /// was absent from the decoded response.
    #[error("operation failed: {field} is missing from the response")]
    OperationFailed { field: &'static str },
}

fn transport_err(err: TransportError) -> WhatsAppError {
    match err {
        TransportError::Json(err) => WhatsAppError::Decode(err),
        TransportError::MissingField { field } => WhatsAppError::OperationFailed { field },
    }
}

/// Require that a success response body is valid JSON, discarding it.
///
/// Used by the registration operations, whose result is carried by the
/// HTTP status alone.
fn ensure_json(body: &str) -> Result<(), WhatsAppError> {
    serde_json::from_str::<serde_json::Value>(body).map_err(WhatsAppError::Decode)?;
    Ok(())
}

#[derive(Debug, Clone)]
/// Builder for [`WhatsAppClient`].
///
/// Use this to point the client at a deployment and to customize the API
/// version segment, TLS verification, timeout, or user-agent.
pub struct WhatsAppClientBuilder {
    host: String,
    api_version: String,
    verify_tls: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl WhatsAppClientBuilder {
    /// Create a builder for the given base host, e.g.
    /// `https://192.0.2.10:9090`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            verify_tls: true,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API version segment (default `v1`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Control TLS peer verification (default on).
    ///
    /// On-premises deployments commonly run behind a self-signed
    /// certificate; pass `false` to accept it. This disables certificate
    /// validation entirely, so only use it for hosts you trust by other
    /// means.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`WhatsAppClient`].
    pub fn build(self) -> Result<WhatsAppClient, WhatsAppError> {
        let host = self.host.trim_end_matches('/').to_owned();
        if host.is_empty() {
            return Err(ValidationError::Empty { field: "api_host" }.into());
        }
        url::Url::parse(&host)
            .map_err(|_| ValidationError::InvalidHostUrl { input: host.clone() })?;
        if self.api_version.is_empty() {
            return Err(ValidationError::Empty {
                field: "api_version",
            }
            .into());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if !self.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| WhatsAppError::Transport(Box::new(err)))?;

        Ok(WhatsAppClient {
            host,
            api_version: self.api_version,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

enum RequestBody {
    Json(String),
    Binary { mime: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw result of an untyped GET, see [`WhatsAppClient::get_raw`].
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
/// Client for the WhatsApp Business on-premises HTTP API.
///
/// The client holds no cross-call state: tokens, media ids, and message
/// ids are passed by value between the caller and the API, never cached.
/// Cloning is cheap and clones share the underlying HTTP client, so
/// concurrent callers need no coordination.
pub struct WhatsAppClient {
    host: String,
    api_version: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for WhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppClient")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl WhatsAppClient {
    /// Create a client for the given base host with default settings.
    ///
    /// For more customization, use [`WhatsAppClient::builder`].
    pub fn new(host: impl Into<String>) -> Result<Self, WhatsAppError> {
        Self::builder(host).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(host: impl Into<String>) -> WhatsAppClientBuilder {
        WhatsAppClientBuilder::new(host)
    }

    /// Perform a first login: authenticate with the initial credentials
    /// and replace the password in the same call.
    ///
    /// The new password must satisfy the account complexity policy, which
    /// [`NewPassword`] enforces at construction. The returned session is
    /// handed to the caller and never retained by the client.
    pub async fn first_login(
        &self,
        credentials: &Credentials,
        new_password: &NewPassword,
    ) -> Result<LoginSession, WhatsAppError> {
        let authorization =
            transport::basic_auth_header(credentials.username(), credentials.password());
        let body = transport::encode_first_login_body(new_password);
        let response = self
            .dispatch_post(LOGIN_METHOD, authorization, RequestBody::Json(body))
            .await?;
        transport::decode_login_json_response(&response.body).map_err(transport_err)
    }

    /// Perform a standard login, exchanging credentials for a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSession, WhatsAppError> {
        let authorization =
            transport::basic_auth_header(credentials.username(), credentials.password());
        let body = transport::encode_standard_login_body();
        let response = self
            .dispatch_post(LOGIN_METHOD, authorization, RequestBody::Json(body))
            .await?;
        transport::decode_login_json_response(&response.body).map_err(transport_err)
    }

    /// Request a registration code for a phone number.
    ///
    /// [`RegistrationOutcome::Error`] is a regular return value: the call
    /// reached the server and completed with a success status outside the
    /// created/accepted pair.
    pub async fn request_registration_code(
        &self,
        token: &AccessToken,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let body = transport::encode_registration_code_body(request);
        let response = self
            .dispatch_post(ACCOUNT_METHOD, authorization, RequestBody::Json(body))
            .await?;
        ensure_json(&response.body)?;
        Ok(transport::registration_code_outcome(response.status))
    }

    /// Complete a registration with the code received over SMS.
    pub async fn verify_registration(
        &self,
        token: &AccessToken,
        code: &VerificationCode,
    ) -> Result<RegistrationOutcome, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let body = transport::encode_verification_body(code);
        let response = self
            .dispatch_post(VERIFY_METHOD, authorization, RequestBody::Json(body))
            .await?;
        ensure_json(&response.body)?;
        Ok(transport::verification_outcome(response.status))
    }

    /// Validate phone numbers against the platform, resolving WhatsApp ids
    /// for the valid ones. The result may be empty.
    pub async fn check_contacts(
        &self,
        token: &AccessToken,
        check: &ContactCheck,
    ) -> Result<Vec<ContactResult>, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let body = transport::encode_contact_check_body(check);
        let response = self
            .dispatch_post(CONTACTS_METHOD, authorization, RequestBody::Json(body))
            .await?;
        transport::decode_contact_check_json_response(&response.body).map_err(transport_err)
    }

    /// Upload a binary asset, returning the media id the server assigned.
    ///
    /// The payload is sent as the raw request body with its MIME type as
    /// `Content-Type`.
    pub async fn upload_media(
        &self,
        token: &AccessToken,
        upload: MediaUpload,
    ) -> Result<MediaId, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let (mime_type, bytes) = upload.into_parts();
        let response = self
            .dispatch_post(
                MEDIA_METHOD,
                authorization,
                RequestBody::Binary {
                    mime: mime_type.as_str().to_owned(),
                    bytes,
                },
            )
            .await?;
        transport::decode_media_upload_json_response(&response.body).map_err(transport_err)
    }

    /// Send a text message to an individual recipient.
    pub async fn send_text_message(
        &self,
        token: &AccessToken,
        message: &TextMessage,
    ) -> Result<MessageId, WhatsAppError> {
        let body = transport::encode_text_message_body(message);
        self.post_message(token, body).await
    }

    /// Send a media message referencing an already-uploaded asset.
    pub async fn send_media_message(
        &self,
        token: &AccessToken,
        message: &MediaMessage,
    ) -> Result<MessageId, WhatsAppError> {
        let body = transport::encode_media_message_body(message);
        self.post_message(token, body).await
    }

    /// Perform a raw authenticated GET against an API method path.
    ///
    /// Escape hatch for endpoints without a typed wrapper (`health`,
    /// `stats`, ...). Returns the body text and status code; the usual
    /// success-status check applies.
    pub async fn get_raw(
        &self,
        token: &AccessToken,
        method: &str,
    ) -> Result<RawResponse, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let response = self.dispatch_get(method, authorization).await?;
        Ok(RawResponse {
            status: response.status,
            body: response.body,
        })
    }

    async fn post_message(
        &self,
        token: &AccessToken,
        body: String,
    ) -> Result<MessageId, WhatsAppError> {
        let authorization = transport::bearer_auth_header(token);
        let response = self
            .dispatch_post(MESSAGES_METHOD, authorization, RequestBody::Json(body))
            .await?;
        transport::decode_message_json_response(&response.body).map_err(transport_err)
    }

    async fn dispatch_post(
        &self,
        method: &str,
        authorization: String,
        body: RequestBody,
    ) -> Result<HttpResponse, WhatsAppError> {
        let address = transport::request_address(&self.host, &self.api_version, method)?;

        let (content_type, body_repr, bytes) = match body {
            RequestBody::Json(json) => {
                let repr = json.clone();
                (JSON_CONTENT_TYPE.to_owned(), repr, json.into_bytes())
            }
            RequestBody::Binary { mime, bytes } => {
                let repr = format!("<{} bytes, {mime}>", bytes.len());
                (mime, repr, bytes)
            }
        };
        let headers = vec![
            (CONTENT_TYPE_HEADER.to_owned(), content_type),
            (AUTHORIZATION_HEADER.to_owned(), authorization),
        ];

        let response = self
            .http
            .post(&address, headers.clone(), bytes)
            .await
            .map_err(WhatsAppError::Transport)?;

        self.check_status(address, headers, Some(body_repr), response)
    }

    async fn dispatch_get(
        &self,
        method: &str,
        authorization: String,
    ) -> Result<HttpResponse, WhatsAppError> {
        let address = transport::request_address(&self.host, &self.api_version, method)?;
        let headers = vec![(AUTHORIZATION_HEADER.to_owned(), authorization)];

        let response = self
            .http
            .get(&address, headers.clone())
            .await
            .map_err(WhatsAppError::Transport)?;

        self.check_status(address, headers, None, response)
    }

    fn check_status(
        &self,
        address: String,
        request_headers: Vec<(String, String)>,
        request_body: Option<String>,
        response: HttpResponse,
    ) -> Result<HttpResponse, WhatsAppError> {
        if SUCCESS_STATUSES.contains(&response.status) {
            return Ok(response);
        }
        Err(WhatsAppError::RemoteCallFailed {
            details: CallDetails {
                address,
                request_headers,
                request_body,
                response_status: response.status,
                response_body: response.body,
                response_headers: response.headers,
            },
        })
    }
}
