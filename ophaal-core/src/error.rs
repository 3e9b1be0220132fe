//! Error taxonomy shared by every provider profile.

use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;
use serde_json::Value as JsonValue;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to a waste calendar backend.
pub enum ClientError {
    /// The request did not complete within the configured timeout.
    ///
    /// Retryable by the caller; the client never retries on its own.
    #[error("timeout occurred while connecting to the waste API")]
    Timeout(#[source] ReqwestError),
    /// The transport failed below HTTP: DNS, connection refusal, TLS.
    ///
    /// Retryable by the caller; the client never retries on its own.
    #[error("error occurred while communicating with the waste API")]
    Connection(#[source] ReqwestError),
    /// The backend answered with an HTTP error status.
    ///
    /// `detail` holds the decoded JSON error body, or `{"message": <text>}`
    /// when the body was not JSON.
    #[error("waste API returned an error (HTTP {status})")]
    Api {
        /// HTTP status code in the 400..=599 range.
        status: u16,
        /// Decoded or wrapped error body.
        detail: JsonValue,
    },
    /// The backend answered successfully but not with the expected JSON.
    ///
    /// Only raised by profiles with the strict response policy; lenient
    /// profiles pass the text body through instead.
    #[error("unexpected response from the waste API ({content_type})")]
    UnexpectedResponse {
        /// Content type the backend declared.
        content_type: String,
        /// Raw response body.
        body: String,
    },
    /// The address lookup succeeded but matched nothing.
    ///
    /// A caller input problem rather than a service fault: the address lies
    /// outside the provider's service area.
    #[error("address not found in the provider service area")]
    AddressNotFound,
    /// The profile carries no fixed company code and none was configured.
    #[error("no company code configured for this provider")]
    MissingCompanyCode,
    /// A response body could not be decoded into the expected shape.
    #[error("unable to decode waste API response")]
    Decode(#[from] serde_json::Error),
    /// A pickup timestamp did not match the `YYYY-MM-DDTHH:MM:SS` format.
    #[error("unable to parse pickup date")]
    Parse(#[from] ChronoParseError),
}

impl ClientError {
    /// Whether the failure is transient and worth retrying by the caller.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::Connection(_))
    }
}
