//! Ledger service client.

use crate::config::ApiConfig;
use crate::error::Result;
use crate::state::{LeaderboardEntry, MarketEvent, Prediction};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::converter::{DataConverter, UserDto, WagerResponseDto, WagerSubmission};

/// The user's account record on the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Opaque external identity.
    pub user_id: u64,
    /// Authoritative point balance.
    pub balance: u64,
}

/// Receipt for an accepted wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WagerReceipt {
    /// The authoritative post-wager balance.
    pub new_balance: u64,
}

/// Boundary abstraction over the remote ledger service.
///
/// All operations are asynchronous and touch no local state. A transport
/// error, a non-success HTTP status, or an in-band rejection all collapse into
/// `Err`; callers only distinguish success from failure, never the error kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Probe the service root.
    async fn ping(&self) -> Result<()>;

    /// Fetch the account for an identity. The display-name hint lets the
    /// ledger create the record on first contact or refresh a changed name.
    async fn fetch_user(&self, user_id: u64, display_name: &str) -> Result<UserAccount>;

    /// Fetch the currently open events. An empty list is a valid result,
    /// distinct from a failure.
    async fn fetch_events(&self) -> Result<Vec<MarketEvent>>;

    /// Fetch the settlement history for an identity.
    async fn fetch_history(&self, user_id: u64) -> Result<Vec<Prediction>>;

    /// Fetch the leaderboard, in the service's own ranking order.
    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;

    /// Submit a wager. The sole mutating operation; a failure means the stake
    /// was not applied, never partially applied.
    async fn submit_wager(
        &self,
        user_id: u64,
        event_id: u32,
        option_id: u32,
    ) -> Result<WagerReceipt>;
}

/// Builder for creating a ledger client.
pub struct LedgerClientBuilder {
    config: ApiConfig,
}

impl LedgerClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the ledger client.
    pub fn build(self) -> Result<LedgerClient> {
        LedgerClient::new(self.config)
    }
}

impl Default for LedgerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP implementation of [`LedgerApi`].
pub struct LedgerClient {
    /// Service base URL, without trailing slash.
    base_url: String,
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl LedgerClient {
    /// Create a new ledger client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Create a builder.
    pub fn builder() -> LedgerClientBuilder {
        LedgerClientBuilder::new()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LedgerApi for LedgerClient {
    async fn ping(&self) -> Result<()> {
        self.http
            .get(format!("{}/", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_user(&self, user_id: u64, display_name: &str) -> Result<UserAccount> {
        let response = self
            .http
            .get(format!("{}/user/{}", self.base_url, user_id))
            .query(&[("username", display_name)])
            .send()
            .await?
            .error_for_status()?;

        let dto: UserDto = response.json().await?;
        Ok(DataConverter::convert_user(dto))
    }

    async fn fetch_events(&self) -> Result<Vec<MarketEvent>> {
        let events = self.get_json(format!("{}/events", self.base_url)).await?;
        Ok(DataConverter::convert_events(events))
    }

    async fn fetch_history(&self, user_id: u64) -> Result<Vec<Prediction>> {
        self.get_json(format!("{}/user/{}/history", self.base_url, user_id))
            .await
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_json(format!("{}/leaderboard", self.base_url))
            .await
    }

    async fn submit_wager(
        &self,
        user_id: u64,
        event_id: u32,
        option_id: u32,
    ) -> Result<WagerReceipt> {
        let submission = WagerSubmission {
            user_id,
            event_id,
            option_id,
        };

        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .json(&submission)
            .send()
            .await?
            .error_for_status()?;

        let dto: WagerResponseDto = response.json().await?;
        DataConverter::convert_wager_response(dto)
    }
}
