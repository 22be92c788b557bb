/*
[INPUT]:  Error sources (transport, decoding, codec, URL, form encoding)
[OUTPUT]: Structured error types with transport/decode classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::codec::UnknownEnumToken;

/// Main error type for the TradeOgre adapter
///
/// A `success: false` payload is never an error; it decodes into the typed
/// result and the caller inspects the flag.
#[derive(Error, Debug)]
pub enum TradeOgreError {
    /// HTTP request failed in the reqwest transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport failed to deliver the request
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected schema
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A wire token was not part of an enum vocabulary
    #[error(transparent)]
    UnknownEnumToken(#[from] UnknownEnumToken),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Base URL parsed but cannot anchor API paths
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Header could not be built from the supplied values
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Request parameters could not be form-encoded
    #[error("Form encoding failed: {0}")]
    FormEncode(#[from] serde_urlencoded::ser::Error),
}

impl TradeOgreError {
    /// Connection, TLS, timeout or body-read failure
    pub fn is_transport(&self) -> bool {
        matches!(self, TradeOgreError::Http(_) | TradeOgreError::Transport(_))
    }

    /// Response arrived but did not match the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            TradeOgreError::Decode { .. } | TradeOgreError::UnknownEnumToken(_)
        )
    }

    pub(crate) fn decode(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        TradeOgreError::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }
}

/// Result type alias for TradeOgre operations
pub type Result<T> = std::result::Result<T, TradeOgreError>;
