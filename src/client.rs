//! Core HTTP client for the Alpaca Trading REST API v2.
//!
//! The [`AlpacaClient`] struct is the main entry point. It owns the
//! [`Transport`] (base URL plus connection pool), the active
//! [`Credentials`], and the [`RetryPolicy`], and runs every call through the
//! same pipeline: encode, sign, resolve, dispatch with 429 retry, verify,
//! decode.
//!
//! Resource façades ([`AccountService`], [`OrderService`]) borrow the client
//! and are added in the [`crate::api`] module.

use reqwest::header::HeaderMap;
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::account::AccountService;
use crate::api::orders::OrderService;
use crate::codec::Payload;
use crate::config::{ClientConfig, Environment, RetryPolicy};
use crate::credentials::{self, Credentials};
use crate::error::Result;
use crate::response;
use crate::retry;
use crate::transport::{RawResponse, Transport};

/// Core HTTP client for the Alpaca Trading REST API v2.
///
/// Cheap to clone; clones share the connection pool. Safe to use from many
/// tasks at once.
///
/// # Example
///
/// ```no_run
/// use alpaca_rs::{AlpacaClient, Credentials};
///
/// # #[tokio::main]
/// # async fn main() -> alpaca_rs::Result<()> {
/// let client = AlpacaClient::paper(Credentials::api_key("key-id", "secret"))?;
/// let account = client.get_account().await?;
/// println!("buying power: {:?}", account.buying_power);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlpacaClient {
    transport: Transport,
    credentials: Option<Credentials>,
    retry: RetryPolicy,
    log_bodies: bool,
}

impl AlpacaClient {
    /// Create a client for live trading.
    pub fn live(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_config(ClientConfig::new(Environment::Live))?.with_credentials(credentials))
    }

    /// Create a client for paper trading.
    pub fn paper(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_config(ClientConfig::new(Environment::Paper))?.with_credentials(credentials))
    }

    /// Create a client from a full configuration, with no credentials yet.
    ///
    /// Every request fails with
    /// [`AuthNotConfigured`](crate::AlpacaError::AuthNotConfigured) until
    /// credentials are set.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(&config)?,
            credentials: None,
            retry: config.retry(),
            log_bodies: config.log_bodies(),
        })
    }

    /// Builder-style [`set_credentials`](Self::set_credentials).
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the active credential scheme.
    ///
    /// Any previously selected scheme is dropped; there is no fallback
    /// between schemes.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Account endpoints.
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self)
    }

    /// Order endpoints.
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(self)
    }

    // -----------------------------------------------------------------------
    // Pipeline
    // -----------------------------------------------------------------------

    /// Run a request and decode the JSON response into `R`.
    ///
    /// `payload` is sent as a query string or JSON body depending on its
    /// variant. Use this for endpoints without a typed façade.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        cancel: &CancellationToken,
    ) -> Result<R> {
        let resp = self.round_trip(method, path, &payload, cancel).await?;
        response::into_result(resp)
    }

    /// Run a request whose success response carries no body (e.g. 204).
    pub async fn execute_no_content(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let resp = self.round_trip(method, path, &payload, cancel).await?;
        response::into_unit(resp)
    }

    /// Build the signed request for `method path` without sending it.
    pub fn prepare(&self, method: Method, path: &str, payload: &Payload) -> Result<Request> {
        let mut headers = HeaderMap::new();
        credentials::authorize(self.credentials.as_ref(), &mut headers)?;

        let url = self.transport.resolve(path, payload.query_str())?;
        let mut builder = self.transport.http().request(method, url).headers(headers);
        if let Some(body) = payload.body() {
            builder = builder.body(body.to_vec());
        }
        Ok(builder.build()?)
    }

    async fn round_trip(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        let request = self.prepare(method, path, payload)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "request");
        if self.log_bodies {
            if let Some(body) = payload.body() {
                tracing::debug!(body = %String::from_utf8_lossy(body), "request body");
            }
        }

        let resp = retry::dispatch(&self.transport, request, self.retry, cancel).await?;

        tracing::debug!(status = resp.status.as_u16(), "response");
        if self.log_bodies {
            tracing::debug!(body = %String::from_utf8_lossy(&resp.body), "response body");
        }
        Ok(resp)
    }
}
