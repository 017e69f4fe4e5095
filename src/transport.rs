//! HTTP transport: base URL resolution and the connection pool.
//!
//! [`Transport`] wraps a [`reqwest::Client`] configured with the default JSON
//! headers and a fixed per-request timeout. It implements [`HttpSend`], the
//! seam the retry dispatcher sends through, so tests can substitute a
//! scripted sender.

use std::future::Future;

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Request, StatusCode};
use url::Url;

use crate::config::ClientConfig;
use crate::error::Result;

/// A response as received off the wire, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    /// A response with no headers, mostly useful for scripted senders.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Sends one prepared request and returns the full response.
///
/// Implementations must not retry; a returned error means no status was
/// received.
pub trait HttpSend: Sync {
    fn send(&self, request: Request) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Base URL plus pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    /// Build the pool for `config`'s environment and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .default_headers(default_headers())
            .timeout(config.timeout());
        if let Some(agent) = config.user_agent() {
            builder = builder.user_agent(agent);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.environment().base_url()?,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL, attaching `query` if non-empty.
    ///
    /// Absolute paths (`/v2/...`) replace any path on the base URL.
    pub fn resolve(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        match query {
            Some(q) if !q.is_empty() => url.set_query(Some(q)),
            _ => url.set_query(None),
        }
        Ok(url)
    }
}

impl HttpSend for Transport {
    async fn send(&self, request: Request) -> Result<RawResponse> {
        let resp = self.http.execute(request).await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Default headers applied to every request.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
