//! Account endpoints.

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::client::AlpacaClient;
use crate::codec::Payload;
use crate::error::Result;
use crate::types::account::Account;

/// Account façade, obtained from [`AlpacaClient::accounts`].
#[derive(Debug, Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a AlpacaClient,
}

impl<'a> AccountService<'a> {
    pub(crate) fn new(client: &'a AlpacaClient) -> Self {
        Self { client }
    }

    /// **Endpoint:** `GET /v2/account`
    pub fn get_account(&self) -> GetAccountRequest<'a> {
        GetAccountRequest {
            client: self.client,
        }
    }
}

/// Fetch the account snapshot.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct GetAccountRequest<'a> {
    client: &'a AlpacaClient,
}

impl GetAccountRequest<'_> {
    pub async fn send(self) -> Result<Account> {
        self.send_with(&CancellationToken::new()).await
    }

    /// Send, aborting with [`Cancelled`](crate::AlpacaError::Cancelled) if
    /// `cancel` fires first.
    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Account> {
        self.client
            .execute(Method::GET, "/v2/account", Payload::Empty, cancel)
            .await
    }
}

impl AlpacaClient {
    /// Retrieve the account snapshot.
    ///
    /// **Endpoint:** `GET /v2/account`
    pub async fn get_account(&self) -> Result<Account> {
        self.accounts().get_account().send().await
    }
}
