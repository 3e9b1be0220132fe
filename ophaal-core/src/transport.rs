//! Low-level request executor shared by the address and calendar lookups.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::ClientError;
use crate::profile::{BodyEncoding, ProviderProfile, ResponsePolicy};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

#[derive(Debug, Clone)]
/// Successful response body, decoded when the backend declared JSON.
pub enum Payload {
    /// JSON body, already decoded.
    Json(JsonValue),
    /// Non-JSON body, passed through by lenient profiles.
    Text {
        /// Content type the backend declared.
        content_type: String,
        /// Raw response body.
        body: String,
    },
}

impl Payload {
    /// Unwrap the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedResponse`] when the backend sent a
    /// text body where the client needs JSON.
    pub fn into_json(self) -> Result<JsonValue, ClientError> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text { content_type, body } => {
                Err(ClientError::UnexpectedResponse { content_type, body })
            }
        }
    }
}

#[derive(Debug, Clone)]
/// Executes one POST against the provider and classifies the response.
pub struct Transport {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) encoding: BodyEncoding,
    pub(crate) response_policy: ResponsePolicy,
}

impl Transport {
    /// Build a transport with the profile's defaults and an internally owned
    /// HTTP client.
    #[must_use]
    pub fn new(profile: &ProviderProfile) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("https://{host}:443/api", host = profile.host),
            user_agent: format!(
                "{product}/{version}",
                product = profile.user_agent_product,
                version = env!("CARGO_PKG_VERSION"),
            ),
            timeout: DEFAULT_TIMEOUT,
            encoding: profile.encoding,
            response_policy: profile.response_policy,
        }
    }

    /// POST `body` to the endpoint at `path` and classify the response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Timeout`] when the request exceeds the configured
    ///   timeout.
    /// - [`ClientError::Connection`] on DNS, connection, or TLS failures.
    /// - [`ClientError::Api`] for HTTP statuses in the 400..=599 range, with
    ///   the error body decoded (JSON) or wrapped as `{"message": <text>}`.
    /// - [`ClientError::UnexpectedResponse`] when a strict profile receives a
    ///   successful response without a JSON content type.
    /// - [`ClientError::Decode`] when a declared JSON body fails to decode.
    pub async fn execute<Body>(&self, path: &str, body: &Body) -> Result<Payload, ClientError>
    where
        Body: Serialize + Sync + ?Sized,
    {
        let url = format!("{base}/{path}", base = self.base_url);

        let mut request = self
            .http
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_VALUE)
            .timeout(self.timeout);

        request = match self.encoding {
            BodyEncoding::Json => request.json(body),
            BodyEncoding::Form => request.form(body),
        };

        let response = request.send().await.map_err(|source| {
            if source.is_timeout() {
                ClientError::Timeout(source)
            } else {
                ClientError::Connection(source)
            }
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let text = response.text().await.map_err(ClientError::Connection)?;

        if status.is_client_error() || status.is_server_error() {
            let detail = if content_type.contains("json") {
                serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::json!({ "message": text }))
            } else {
                serde_json::json!({ "message": text })
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        if content_type.contains("json") {
            return Ok(Payload::Json(serde_json::from_str(&text)?));
        }

        match self.response_policy {
            ResponsePolicy::Lenient => Ok(Payload::Text { content_type, body: text }),
            ResponsePolicy::JsonOnly => {
                Err(ClientError::UnexpectedResponse { content_type, body: text })
            }
        }
    }
}
