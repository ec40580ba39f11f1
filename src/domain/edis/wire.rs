//! Wire types for the e-DIS endpoints.

use crate::shared::{serde_util, Envelope};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEdisTransaction {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub internal_txn_id: String,
    #[serde(default)]
    pub isin: String,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub qty: i64,
    /// Sic.
    #[serde(default, rename = "qtyUtlize", with = "serde_util::lenient_i64")]
    pub qty_utlize: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub entry_date: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// `GET /details`.
#[derive(Deserialize, Debug, Clone)]
pub struct EdisDetailsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<Vec<RawEdisTransaction>>,
}

/// Counts as the server spells them.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawEdisInquiry {
    #[serde(default, rename = "SUCEESS_CNT", with = "serde_util::lenient_i64")]
    pub success_cnt: i64,
    #[serde(default, rename = "FAILED_CNT", with = "serde_util::lenient_i64")]
    pub failed_cnt: i64,
}

/// `POST /inquiry`.
#[derive(Deserialize, Debug, Clone)]
pub struct EdisInquiryResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<RawEdisInquiry>,
}
