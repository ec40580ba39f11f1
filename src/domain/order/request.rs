//! Order requests — domain requests and the bodies they serialize to.

use crate::codes::{OrderSide, OrderType, OrderValidity, ProductType, WireCode};
use crate::error::SdkError;
use crate::shared::{serde_util, Symbol};
use rust_decimal::Decimal;
use serde::Serialize;

// ─── Place ───────────────────────────────────────────────────────────────────

/// A new order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderRequest {
    pub symbol: Symbol,
    pub quantity: i64,
    pub order_type: OrderType,
    pub side: OrderSide,
    pub product_type: ProductType,
    pub limit_price: Decimal,
    pub stop_price: Decimal,
    pub validity: OrderValidity,
    pub disclosed_quantity: i64,
    /// After-market order.
    pub offline: bool,
    /// Bracket / cover order legs, in price points.
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
}

impl PlaceOrderRequest {
    pub fn market(symbol: impl Into<Symbol>, side: OrderSide, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            order_type: OrderType::Market,
            side,
            product_type: ProductType::Intraday,
            limit_price: Decimal::ZERO,
            stop_price: Decimal::ZERO,
            validity: OrderValidity::Day,
            disclosed_quantity: 0,
            offline: false,
            stop_loss: Decimal::ZERO,
            take_profit: Decimal::ZERO,
        }
    }

    pub fn limit(
        symbol: impl Into<Symbol>,
        side: OrderSide,
        quantity: i64,
        limit_price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            limit_price,
            ..Self::market(symbol, side, quantity)
        }
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_validity(mut self, validity: OrderValidity) -> Self {
        self.validity = validity;
        self
    }

    /// Turns a market order into stop-market, a limit order into stop-limit.
    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.order_type = match self.order_type {
            OrderType::Limit | OrderType::StopLimit => OrderType::StopLimit,
            OrderType::Market | OrderType::StopMarket => OrderType::StopMarket,
        };
        self.stop_price = stop_price;
        self
    }

    pub fn with_disclosed_quantity(mut self, disclosed_quantity: i64) -> Self {
        self.disclosed_quantity = disclosed_quantity;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_bracket(mut self, stop_loss: Decimal, take_profit: Decimal) -> Self {
        self.stop_loss = stop_loss;
        self.take_profit = take_profit;
        self
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.quantity <= 0 {
            return Err(SdkError::Validation(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.disclosed_quantity < 0 || self.disclosed_quantity > self.quantity {
            return Err(SdkError::Validation(format!(
                "disclosed quantity {} outside 0..={}",
                self.disclosed_quantity, self.quantity
            )));
        }
        let needs_limit = matches!(self.order_type, OrderType::Limit | OrderType::StopLimit);
        if needs_limit && self.limit_price <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "{} order needs a positive limit price",
                self.order_type
            )));
        }
        let needs_stop = matches!(self.order_type, OrderType::StopMarket | OrderType::StopLimit);
        if needs_stop && self.stop_price <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "{} order needs a positive stop price",
                self.order_type
            )));
        }
        Ok(())
    }

    pub fn to_body(&self) -> Result<PlaceOrderBody, SdkError> {
        self.validate()?;
        Ok(PlaceOrderBody {
            symbol: self.symbol.clone(),
            qty: self.quantity,
            order_type: self.order_type.to_wire(),
            side: self.side.to_wire(),
            product_type: self.product_type.to_wire(),
            limit_price: self.limit_price,
            stop_price: self.stop_price,
            validity: self.validity.to_wire(),
            disclosed_qty: self.disclosed_quantity,
            offline_order: self.offline,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
        })
    }
}

/// `POST /orders` body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderBody {
    pub symbol: Symbol,
    pub qty: i64,
    #[serde(rename = "type")]
    pub order_type: i32,
    pub side: i32,
    pub product_type: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub limit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub stop_price: Decimal,
    pub validity: &'static str,
    pub disclosed_qty: i64,
    #[serde(serialize_with = "serde_util::true_false::serialize")]
    pub offline_order: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub stop_loss: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub take_profit: Decimal,
}

// ─── Modify ──────────────────────────────────────────────────────────────────

/// Changes to a working order. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifyOrderRequest {
    pub id: String,
    pub order_type: Option<OrderType>,
    pub limit_price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl ModifyOrderRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    pub fn limit_price(mut self, price: Decimal) -> Self {
        self.limit_price = Some(price);
        self
    }

    pub fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn to_body(&self) -> Result<ModifyOrderBody, SdkError> {
        if self.id.trim().is_empty() {
            return Err(SdkError::Validation("order id is empty".to_string()));
        }
        if self.order_type.is_none()
            && self.limit_price.is_none()
            && self.stop_price.is_none()
            && self.quantity.is_none()
        {
            return Err(SdkError::Validation(format!(
                "modify for {} changes nothing",
                self.id
            )));
        }
        if let Some(q) = self.quantity.filter(|q| *q <= 0) {
            return Err(SdkError::Validation(format!(
                "quantity must be positive, got {}",
                q
            )));
        }
        Ok(ModifyOrderBody {
            id: self.id.clone(),
            order_type: self.order_type.map(WireCode::to_wire),
            limit_price: self.limit_price,
            stop_price: self.stop_price,
            qty: self.quantity,
        })
    }
}

/// `PUT /orders` body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderBody {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<i32>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_price: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,
}

// ─── Cancel ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct CancelOrderRequest {
    pub id: String,
}

impl CancelOrderRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn to_body(&self) -> Result<CancelOrderBody, SdkError> {
        if self.id.trim().is_empty() {
            return Err(SdkError::Validation("order id is empty".to_string()));
        }
        Ok(CancelOrderBody {
            id: self.id.clone(),
        })
    }
}

/// `DELETE /orders` body.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CancelOrderBody {
    pub id: String,
}
