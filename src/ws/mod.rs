//! WebSocket layer — channel kinds, control frames, frame decoding, events.
//!
//! The broker runs two sockets: one pushes order updates as JSON text, the
//! other pushes market data as packed binary records. Both share the same
//! client ([`native::WsClient`], `ws-native` feature) and the same event
//! stream; only the URL and the accepted subscriptions differ.

pub mod frame;
pub mod subscriptions;

#[cfg(feature = "ws-native")]
pub mod native;

use crate::auth::Authorization;
use crate::domain::order::Order;

pub use frame::{decode_binary, decode_text, MarketTick, MinuteBar, TickDepth};
pub use subscriptions::{socket_url, ControlFrame, Subscription};

// ─── Channel kind ────────────────────────────────────────────────────────────

/// Which of the two sockets a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Orders,
    Data,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Orders => "orders",
            ChannelKind::Data => "data",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Ready state ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closed = 2,
}

impl From<u16> for ReadyState {
    fn from(value: u16) -> Self {
        match value {
            0 => ReadyState::Connecting,
            1 => ReadyState::Open,
            _ => ReadyState::Closed,
        }
    }
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// A decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Order-update push, normalized like an order-book entry.
    Order(Order),
    /// One binary market record.
    Tick(MarketTick),
    /// Any other JSON the server sends.
    Message(serde_json::Value),
}

/// High-level events emitted by the WS client to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum WsEvent {
    /// Handshake done; subscriptions are accepted from now on.
    Connected,
    Notification(Notification),
    /// The connection is gone. There is no reconnect.
    Disconnected { code: Option<u16>, reason: String },
    /// A frame that could not be decoded. The connection stays up.
    Error(String),
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// Configuration for the WS client.
#[derive(Debug, Clone)]
pub struct WsConfig {
    pub orders_url: String,
    pub data_url: String,
    pub authorization: Option<Authorization>,
    /// Interval between text `"ping"` keep-alives.
    pub ping_interval_ms: u64,
    pub connect_timeout_ms: u64,
    /// Capacity of the event channel.
    pub channel_capacity: usize,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            orders_url: crate::network::DEFAULT_ORDERS_WS_URL.to_string(),
            data_url: crate::network::DEFAULT_DATA_WS_URL.to_string(),
            authorization: None,
            ping_interval_ms: 10_000,
            connect_timeout_ms: 30_000,
            channel_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_state_from_u16() {
        assert_eq!(ReadyState::from(ReadyState::Open as u16), ReadyState::Open);
        assert_eq!(ReadyState::from(0), ReadyState::Connecting);
        assert_eq!(ReadyState::from(9), ReadyState::Closed);
    }

    #[test]
    fn test_default_config() {
        let config = WsConfig::default();
        assert_eq!(config.channel_capacity, 256);
        assert!(config.authorization.is_none());
        assert!(config.orders_url.starts_with("wss://"));
    }
}
