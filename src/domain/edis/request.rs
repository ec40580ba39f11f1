//! e-DIS requests.

use crate::error::SdkError;
use serde::Serialize;

/// One holding to authorise for sale.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EdisRecord {
    pub isin_code: String,
    pub qty: i64,
    pub symbol: String,
}

/// Form submitted to the depository's TPIN page. Built here, posted by the
/// caller's browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdisHoldingsRequest {
    pub records: Vec<EdisRecord>,
}

impl EdisHoldingsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, symbol: impl Into<String>, isin: impl Into<String>, quantity: i64) -> Self {
        self.records.push(EdisRecord {
            isin_code: isin.into(),
            qty: quantity,
            symbol: symbol.into(),
        });
        self
    }

    /// Form parameters; `recordLst` carries the records as JSON.
    pub fn to_form(&self) -> Result<Vec<(&'static str, String)>, SdkError> {
        if self.records.is_empty() {
            return Err(SdkError::Validation("e-DIS form has no records".to_string()));
        }
        if let Some(bad) = self.records.iter().find(|r| r.qty <= 0 || r.isin_code.is_empty()) {
            return Err(SdkError::Validation(format!(
                "e-DIS record for {} needs an ISIN and a positive quantity",
                bad.symbol
            )));
        }
        Ok(vec![("recordLst", serde_json::to_string(&self.records)?)])
    }
}
