//! Position requests.

use crate::codes::{PositionSide, ProductType, WireCode};
use crate::error::SdkError;
use crate::shared::Symbol;
use serde::Serialize;

/// Move quantity of an open position from one product to another
/// (e.g. intraday → delivery).
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertPositionRequest {
    pub symbol: Symbol,
    pub side: PositionSide,
    pub quantity: i64,
    pub from: ProductType,
    pub to: ProductType,
}

impl ConvertPositionRequest {
    pub fn to_body(&self) -> Result<ConvertPositionBody, SdkError> {
        if self.quantity <= 0 {
            return Err(SdkError::Validation(format!(
                "convert quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.side == PositionSide::Closed {
            return Err(SdkError::Validation(
                "cannot convert a closed position".to_string(),
            ));
        }
        if self.from == self.to {
            return Err(SdkError::Validation(format!(
                "position is already {}",
                self.to
            )));
        }
        Ok(ConvertPositionBody {
            symbol: self.symbol.clone(),
            position_side: self.side.to_wire(),
            convert_qty: self.quantity,
            convert_from: self.from.to_wire(),
            convert_to: self.to.to_wire(),
        })
    }
}

/// `PUT /positions` body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertPositionBody {
    pub symbol: Symbol,
    pub position_side: i32,
    pub convert_qty: i64,
    pub convert_from: &'static str,
    pub convert_to: &'static str,
}

/// Square off one position, or all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitPositionRequest {
    /// Position id, `SYMBOL-PRODUCT`.
    One(String),
    All,
}

impl ExitPositionRequest {
    pub fn to_body(&self) -> Result<ExitPositionBody, SdkError> {
        match self {
            ExitPositionRequest::One(id) if id.trim().is_empty() => {
                Err(SdkError::Validation("position id is empty".to_string()))
            }
            ExitPositionRequest::One(id) => Ok(ExitPositionBody::One { id: id.clone() }),
            ExitPositionRequest::All => Ok(ExitPositionBody::All { exit_all: 1 }),
        }
    }
}

/// `DELETE /positions` body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ExitPositionBody {
    One { id: String },
    All { exit_all: u8 },
}
