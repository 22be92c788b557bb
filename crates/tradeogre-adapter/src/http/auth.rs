/*
[INPUT]:  API key and secret
[OUTPUT]: HTTP Basic Authorization header for private endpoints
[POS]:    HTTP layer - credentials for authenticated requests
[UPDATE]: When the exchange changes its authentication scheme
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::HeaderValue;

use crate::http::Result;

/// API key pair issued by the exchange
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// `Basic base64(key:secret)`, flagged sensitive so it never shows up in
    /// `Debug` output of requests
    pub fn authorization_header(&self) -> Result<HeaderValue> {
        let token = BASE64.encode(format!("{}:{}", self.api_key, self.api_secret));
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
