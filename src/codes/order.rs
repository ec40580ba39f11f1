//! Order and position codes.

use super::rules::{Pattern, Rule};
use super::{wire_codec, FromDescription};

wire_codec! {
    /// Buy or sell.
    pub enum OrderSide: i32 {
        Buy = 1, "BUY", "Buy";
        Sell = -1, "SELL", "Sell";
    }
}

impl FromDescription for OrderSide {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            all_of: &[&[Pattern::Contains("sell"), Pattern::Contains("short")]],
            result: OrderSide::Sell,
        },
        Rule {
            all_of: &[&[Pattern::Contains("buy"), Pattern::Contains("long")]],
            result: OrderSide::Buy,
        },
    ];

    const DEFAULT: Self = OrderSide::Buy;
}

wire_codec! {
    /// Net direction of an open position.
    pub enum PositionSide: i32 {
        Long = 1, "LONG", "Long";
        Short = -1, "SHORT", "Short";
        Closed = 0, "CLOSED", "Closed";
    }
}

wire_codec! {
    /// Order type.
    pub enum OrderType: i32 {
        Limit = 1, "LIMIT", "Limit order";
        Market = 2, "MARKET", "Market order";
        /// Stop-loss market (SL-M).
        StopMarket = 3, "STOP_MARKET", "Stop order (SL-M)";
        /// Stop-loss limit (SL-L).
        StopLimit = 4, "STOP_LIMIT", "Stop limit order (SL-L)";
    }
}

impl FromDescription for OrderType {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            all_of: &[&[
                Pattern::Contains("stop limit"),
                Pattern::Contains("stop-limit"),
                Pattern::Contains("stoplimit"),
                Pattern::Word("sl-l"),
            ]],
            result: OrderType::StopLimit,
        },
        Rule {
            all_of: &[&[
                Pattern::Contains("stop"),
                Pattern::Word("sl-m"),
                Pattern::Word("slm"),
            ]],
            result: OrderType::StopMarket,
        },
        // A bare "SL" is a stop-loss limit order on the exchange.
        Rule {
            all_of: &[&[Pattern::Word("sl")]],
            result: OrderType::StopLimit,
        },
        Rule {
            all_of: &[&[Pattern::Contains("market")]],
            result: OrderType::Market,
        },
        Rule {
            all_of: &[&[Pattern::Contains("limit")]],
            result: OrderType::Limit,
        },
    ];

    const DEFAULT: Self = OrderType::Limit;
}

wire_codec! {
    /// Order lifecycle status.
    pub enum OrderStatus: i32 {
        Cancelled = 1, "CANCELLED", "Cancelled";
        Filled = 2, "FILLED", "Traded / Filled";
        /// Defined by the API but not sent at present.
        Reserved = 3, "RESERVED", "Reserved for future use";
        Transit = 4, "TRANSIT", "Transit";
        Rejected = 5, "REJECTED", "Rejected";
        Pending = 6, "PENDING", "Pending";
        Expired = 7, "EXPIRED", "Expired";
    }
}

impl OrderStatus {
    /// Still working on the exchange.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Transit)
    }
}

wire_codec! {
    /// Where the order was placed from.
    pub enum OrderSource: &'static str {
        Mobile = "M", "MOBILE", "Mobile";
        Web = "W", "WEB", "Web";
        FyersOne = "R", "FYERS_ONE", "Fyers One";
        Admin = "A", "ADMIN", "Admin";
        Api = "ITS", "API", "API";
    }
}

wire_codec! {
    /// Order validity. The wire code is the tag itself.
    pub enum OrderValidity: &'static str {
        Day = "DAY", "DAY", "Valid till end of day";
        Ioc = "IOC", "IOC", "Immediate or cancel";
    }
}
