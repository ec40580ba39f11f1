//! High-level client — `FyersClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the bound credentials, and accessor
//! methods.

use crate::auth::client::Auth;
use crate::auth::Authorization;
use crate::domain::edis::client::Edis;
use crate::domain::market::client::MarketData;
use crate::domain::order::client::Orders;
use crate::domain::trade::client::Trades;
use crate::error::{HttpError, SdkError};
use crate::http::FyersHttp;
use crate::ws::WsConfig;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::edis::client::Edis as EdisClient;
pub use crate::domain::funds::client::FundsClient;
pub use crate::domain::holding::client::HoldingsClient;
pub use crate::domain::market::client::MarketData as MarketDataClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::PositionsClient;
pub use crate::domain::profile::client::ProfileClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the FYERS SDK.
///
/// Binds the `(app id, access token)` pair once so no call has to repeat
/// it. Cloning is cheap and clones share the pair, so a token installed
/// through one clone is seen by all of them.
pub struct FyersClient {
    pub(crate) http: FyersHttp,
    pub(crate) ws_config: WsConfig,
}

impl FyersClient {
    pub fn builder() -> FyersClientBuilder {
        FyersClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn profile(&self) -> ProfileClient<'_> {
        ProfileClient { client: self }
    }

    pub fn funds(&self) -> FundsClient<'_> {
        FundsClient { client: self }
    }

    pub fn holdings(&self) -> HoldingsClient<'_> {
        HoldingsClient { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn positions(&self) -> PositionsClient<'_> {
        PositionsClient { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn market_data(&self) -> MarketData<'_> {
        MarketData { client: self }
    }

    pub fn edis(&self) -> Edis<'_> {
        Edis { client: self }
    }

    // ── Credentials ──────────────────────────────────────────────────────

    /// Install an access token for the configured app id.
    pub async fn set_access_token(&self, access_token: &str) -> Result<(), SdkError> {
        if access_token.trim().is_empty() {
            return Err(SdkError::Validation("access token is empty".to_string()));
        }
        let current = self
            .http
            .authorization()
            .await
            .ok_or_else(|| SdkError::Validation("no app id configured".to_string()))?;
        self.http
            .set_authorization(Some(current.with_access_token(access_token)))
            .await;
        tracing::debug!(app_id = %current.app_id, "authorization updated");
        Ok(())
    }

    /// Replace the whole authorization pair, or clear it with `None`.
    pub async fn set_authorization(&self, authorization: Option<Authorization>) {
        self.http.set_authorization(authorization).await;
    }

    pub async fn authorization(&self) -> Option<Authorization> {
        self.http.authorization().await
    }

    // ── WebSocket ────────────────────────────────────────────────────────

    /// WS config without credentials; [`FyersClient::ws`] fills them in.
    pub fn ws_config(&self) -> &WsConfig {
        &self.ws_config
    }

    /// Create a new native WS client bound to the current credentials.
    ///
    /// The socket is not opened; call `connect` on the result. The WS
    /// client is not embedded in `FyersClient` because socket lifetimes are
    /// typically managed at the application layer.
    #[cfg(feature = "ws-native")]
    pub async fn ws(&self, kind: crate::ws::ChannelKind) -> crate::ws::native::WsClient {
        let config = WsConfig {
            authorization: self.http.authorization().await,
            ..self.ws_config.clone()
        };
        crate::ws::native::WsClient::new(kind, config)
    }
}

impl Clone for FyersClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            ws_config: self.ws_config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FyersClientBuilder {
    api_url: String,
    data_url: String,
    orders_ws_url: String,
    data_ws_url: String,
    authorization: Option<Authorization>,
    app_id: Option<String>,
    timeout: Duration,
    ping_interval: Duration,
}

impl Default for FyersClientBuilder {
    fn default() -> Self {
        Self {
            api_url: crate::network::DEFAULT_API_URL.to_string(),
            data_url: crate::network::DEFAULT_DATA_URL.to_string(),
            orders_ws_url: crate::network::DEFAULT_ORDERS_WS_URL.to_string(),
            data_ws_url: crate::network::DEFAULT_DATA_WS_URL.to_string(),
            authorization: None,
            app_id: None,
            timeout: Duration::from_secs(30),
            ping_interval: Duration::from_secs(10),
        }
    }
}

impl FyersClientBuilder {
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn data_url(mut self, url: &str) -> Self {
        self.data_url = url.to_string();
        self
    }

    pub fn orders_ws_url(mut self, url: &str) -> Self {
        self.orders_ws_url = url.to_string();
        self
    }

    pub fn data_ws_url(mut self, url: &str) -> Self {
        self.data_ws_url = url.to_string();
        self
    }

    /// Pre-set the full authorization pair.
    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// App id only, for clients that log in after construction.
    pub fn app_id(mut self, app_id: &str) -> Self {
        self.app_id = Some(app_id.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn ping_interval(mut self, interval: Duration) -> Self {
        self.ping_interval = interval;
        self
    }

    pub fn build(self) -> Result<FyersClient, SdkError> {
        for url in [&self.api_url, &self.data_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(HttpError::InvalidUrl(url.clone()).into());
            }
        }
        for url in [&self.orders_ws_url, &self.data_ws_url] {
            if !(url.starts_with("ws://") || url.starts_with("wss://")) {
                return Err(HttpError::InvalidUrl(url.clone()).into());
            }
        }

        let authorization = self
            .authorization
            .or_else(|| self.app_id.map(|app_id| Authorization::new(app_id, "")));
        let http = FyersHttp::new(&self.api_url, &self.data_url, self.timeout)?
            .with_authorization(authorization);

        Ok(FyersClient {
            http,
            ws_config: WsConfig {
                orders_url: self.orders_ws_url,
                data_url: self.data_ws_url,
                ping_interval_ms: u64::try_from(self.ping_interval.as_millis()).unwrap_or(u64::MAX),
                ..WsConfig::default()
            },
        })
    }
}
