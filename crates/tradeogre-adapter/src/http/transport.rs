/*
[INPUT]:  Fully built HTTP requests (method, URL, headers, optional body)
[OUTPUT]: Raw response body text or a transport error
[POS]:    HTTP layer - transport abstraction shared by public and private clients
[UPDATE]: When changing how requests hit the wire or adding transports
*/

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use crate::http::{Result, TradeOgreError};

/// A request ready to be dispatched
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Sends a request and returns the response body as text
///
/// Implementations are shared behind an `Arc` by every client derived from
/// the same factory call, so they must tolerate concurrent use.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest) -> Result<String>;
}

/// Default transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<String> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "received response");
        String::from_utf8(bytes.to_vec()).map_err(|err| {
            TradeOgreError::Transport(format!("response body is not valid UTF-8: {err}"))
        })
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Body(String),
    Fail(String),
}

/// Transport that answers every request with a canned reply
///
/// Records each request so tests can inspect headers and bodies without a
/// network round trip.
#[derive(Debug)]
pub struct MockTransport {
    reply: MockReply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Reply with `body` to every request
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Body(body.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Fail(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::Fail(message) => Err(TradeOgreError::Transport(message.clone())),
        }
    }
}
