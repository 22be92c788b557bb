/*
[INPUT]:  HTTP configuration (base URL, timeouts), transport and credentials
[OUTPUT]: Public and authenticated clients sharing one transport
[POS]:    HTTP layer - client factory and request plumbing
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::http::auth::Credentials;
use crate::http::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::http::{Result, TradeOgreError};

/// Base URL for TradeOgre API v1
pub const DEFAULT_BASE_URL: &str = "https://tradeogre.com/api/v1/";

const USER_AGENT: &str = concat!("tradeogre-adapter/", env!("CARGO_PKG_VERSION"));
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const BODY_LOG_MAX_CHARS: usize = 512;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Client for the public market-data endpoints
///
/// Cheap to clone: clones share the same transport.
#[derive(Debug, Clone)]
pub struct TradeOgreClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl TradeOgreClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client pointed at another API root
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), base_url)
    }

    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            base_url,
            transport: Arc::new(ReqwestTransport::new(http_client)),
        })
    }

    /// Create a client on top of an existing transport
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Derive a client for the private endpoints
    ///
    /// No network activity; the new client reuses this client's base URL
    /// and transport.
    pub fn as_authenticated(
        &self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> AuthenticatedClient {
        AuthenticatedClient::new(self.clone(), Credentials::new(api_key, api_secret))
    }

    /// Base URL with `segments` appended, each one percent-encoded
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TradeOgreError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<HttpRequest> {
        Ok(HttpRequest::new(method, self.endpoint_url(segments)?))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let endpoint = request.url.path().to_string();
        debug!(
            method = %request.method,
            url = %request.url,
            authenticated = request.headers.contains_key(AUTHORIZATION),
            "sending request"
        );

        let body = self.transport.send(request).await?;
        serde_json::from_str(&body).map_err(|source| {
            warn!(
                endpoint = %endpoint,
                error = %source,
                body = excerpt(&body),
                "failed to decode response"
            );
            TradeOgreError::decode(endpoint, source)
        })
    }
}

/// Client for the private endpoints, authenticated with HTTP Basic
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    client: TradeOgreClient,
    credentials: Credentials,
}

impl AuthenticatedClient {
    pub fn new(client: TradeOgreClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The public client this one was derived from
    pub fn public(&self) -> &TradeOgreClient {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        self.client.transport()
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<HttpRequest> {
        let mut request = self.client.request(method, segments)?;
        request
            .headers
            .insert(AUTHORIZATION, self.credentials.authorization_header()?);
        Ok(request)
    }

    /// Authenticated request whose parameters travel as a form body
    pub(crate) fn form_request<F: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        form: &F,
    ) -> Result<HttpRequest> {
        let mut request = self.request(method, segments)?;
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        request.body = Some(serde_urlencoded::to_string(form)?);
        Ok(request)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        self.client.send_json(request).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(TradeOgreError::InvalidBaseUrl(raw.to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_LOG_MAX_CHARS) {
        Some((cut, _)) => &body[..cut],
        None => body,
    }
}
