//! Network URL constants for the FYERS API.

/// Default trading REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.fyers.in/api/v2";

/// Default market data REST API base URL.
pub const DEFAULT_DATA_URL: &str = "https://api.fyers.in/data-rest/v2";

/// Default order update WebSocket URL.
pub const DEFAULT_ORDERS_WS_URL: &str = "wss://api.fyers.in/socket/v2/orderSock";

/// Default market data WebSocket URL.
pub const DEFAULT_DATA_WS_URL: &str = "wss://api.fyers.in/socket/v2/dataSock";

/// User agent marker the socket endpoints expect in the query string.
pub const WS_USER_AGENT: &str = "fyers-api";
