//! # FYERS SDK
//!
//! A typed Rust SDK for the FYERS brokerage API: REST trading and market
//! data, plus the order-update and market-data WebSockets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Enum codecs, symbols, domain models, request builders (always available)
//! 2. **Auth** — Authorization pair and the two-step login request shapes
//! 3. **HTTP API** — `FyersHttp`, one `async fn` per verb
//! 4. **WebSocket** — Control frames, JSON/binary frame decoding, `tokio-tungstenite` client
//! 5. **High-Level Client** — `FyersClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fyers_sdk::prelude::*;
//!
//! let client = FyersClient::builder()
//!     .authorization(Authorization::new("APP-100", access_token))
//!     .build()?;
//!
//! let book = client.orders().book().await?;
//! println!("{} open of {}", book.overall.open, book.overall.count);
//!
//! let ack = client
//!     .orders()
//!     .place(&PlaceOrderRequest::limit("NSE:SBIN-EQ", OrderSide::Buy, 1, dec!(560.5)))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Wire code ↔ domain tag tables for every categorical field.
pub mod codes;

/// Error code descriptions and date-fragment codecs.
pub mod appendix;

/// Ticker parsing and derivative symbol construction.
pub mod symbol;

/// Shared newtypes, the response envelope, and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, requests.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authorization pair and login request shapes.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the trading and data REST APIs.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: WebSocket ───────────────────────────────────────────────────────

/// WebSocket client: subscriptions, frame decoding, events.
pub mod ws;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `FyersClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Envelope, Symbol};

    // Codes
    pub use crate::codes::{
        Exchange, FromDescription, HoldingType, InstrumentType, OptionType, OrderSide,
        OrderSource, OrderStatus, OrderType, OrderValidity, PositionSide, ProductType, Segment,
        WireCode,
    };

    // Symbols
    pub use crate::symbol::{monthly_symbol, parse_symbol, weekly_option_symbol, SymbolInfo, SymbolKind};

    // Domain types — account
    pub use crate::domain::funds::{FundLimit, FundLimitKind, Funds};
    pub use crate::domain::holding::{Holding, Holdings, HoldingsOverall};
    pub use crate::domain::profile::Profile;

    // Domain types — orders, positions, trades
    pub use crate::domain::order::{
        CancelOrderRequest, ModifyOrderRequest, Order, OrderAck, OrderBook, OrdersOverall,
        PlaceOrderRequest,
    };
    pub use crate::domain::position::{
        ConvertPositionRequest, ExitPositionRequest, Position, PositionAck, Positions,
        PositionsOverall,
    };
    pub use crate::domain::trade::{Trade, TradeBook, TradesOverall};

    // Domain types — market data
    pub use crate::domain::market::{
        Candle, DepthLevel, DepthRequest, HistoryOverall, HistoryRange, HistoryRequest,
        MarketDepth, MarketHistory, MarketStatus, Quote, QuoteError, Quotes, QuotesRequest,
        Resolution,
    };

    // Domain types — e-DIS
    pub use crate::domain::edis::{
        EdisHoldingsRequest, EdisInquiry, EdisOverall, EdisTransaction, EdisTransactions,
    };

    // Errors
    pub use crate::error::{ApiError, DecodeError, HttpError, SdkError, WsError};

    // Network
    pub use crate::network::{
        DEFAULT_API_URL, DEFAULT_DATA_URL, DEFAULT_DATA_WS_URL, DEFAULT_ORDERS_WS_URL,
    };

    // Auth
    pub use crate::auth::{AuthCodeRequest, Authorization, TokenRequest};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, EdisClient, FundsClient, FyersClient, FyersClientBuilder, HoldingsClient,
        MarketDataClient, OrdersClient, PositionsClient, ProfileClient, TradesClient,
    };

    // WebSocket types
    pub use crate::ws::{
        ChannelKind, ControlFrame, MarketTick, MinuteBar, Notification, ReadyState, Subscription,
        TickDepth, WsConfig, WsEvent,
    };
    #[cfg(feature = "ws-native")]
    pub use crate::ws::native::WsClient;
}
