//! e-DIS domain — TPIN generation, transaction details, inquiry, and the
//! holdings form for authorising sells of demat holdings.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub use request::{EdisHoldingsRequest, EdisRecord};

/// One e-DIS authorisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdisTransaction {
    pub transaction_id: String,
    pub internal_transaction_id: String,
    pub isin: String,
    pub quantity: i64,
    pub quantity_utilized: i64,
    pub status: String,
    pub reason: String,
    pub source: String,
    pub entry_date: Option<DateTime<FixedOffset>>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
}

impl EdisTransaction {
    pub fn is_successful(&self) -> bool {
        self.status.eq_ignore_ascii_case("SUCCESS")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdisOverall {
    pub count: usize,
    pub total_quantity: i64,
    pub total_utilized: i64,
    pub successful: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdisTransactions {
    pub items: Vec<EdisTransaction>,
    pub overall: EdisOverall,
}

/// Outcome counts of one authorisation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdisInquiry {
    pub succeeded: i64,
    pub failed: i64,
}
