//! Funds domain — margin and balance lines, per market.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codes::{wire_codec, WireCode};
use crate::error::{DecodeError, SdkError};

wire_codec! {
    /// Which balance a `fund_limit` row reports.
    pub enum FundLimitKind: i32 {
        TotalBalance = 1, "TOTAL_BALANCE", "Total Balance";
        UtilizedAmount = 2, "UTILIZED_AMOUNT", "Utilized Amount";
        ClearBalance = 3, "CLEAR_BALANCE", "Clear Balance";
        RealizedPl = 4, "REALIZED_PL", "Realized Profit and Loss";
        Collaterals = 5, "COLLATERALS", "Collaterals";
        FundTransfer = 6, "FUND_TRANSFER", "Fund Transfer";
        Receivables = 7, "RECEIVABLES", "Receivables";
        AdhocLimits = 8, "ADHOC_LIMITS", "Adhoc Limits";
        LimitAtStartOfDay = 9, "LIMIT_AT_START_OF_DAY", "Limit at start of the day";
        AvailableBalance = 10, "AVAILABLE_BALANCE", "Available Balance";
    }
}

/// One balance line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundLimit {
    pub id: i32,
    /// `None` for rows this client does not know.
    pub kind: Option<FundLimitKind>,
    pub title: String,
    pub equity: Decimal,
    pub commodity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funds {
    pub limits: Vec<FundLimit>,
    /// Equity + commodity of the `Available Balance` row, zero if absent.
    pub available_balance: Decimal,
}

impl Funds {
    pub fn limit(&self, kind: FundLimitKind) -> Option<&FundLimit> {
        self.limits.iter().find(|l| l.kind == Some(kind))
    }
}

impl From<wire::RawFundLimit> for FundLimit {
    fn from(raw: wire::RawFundLimit) -> Self {
        FundLimit {
            kind: FundLimitKind::from_wire(raw.id),
            id: raw.id,
            title: raw.title,
            equity: raw.equity_amount,
            commodity: raw.commodity_amount,
        }
    }
}

impl TryFrom<wire::FundsResponse> for Funds {
    type Error = SdkError;

    fn try_from(resp: wire::FundsResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp
            .fund_limit
            .ok_or(DecodeError::MissingField("fund_limit"))?;
        let available_balance = raw
            .iter()
            .find(|r| r.id == FundLimitKind::AvailableBalance.to_wire())
            .map(|r| r.equity_amount + r.commodity_amount)
            .unwrap_or_default();
        Ok(Funds {
            limits: raw.into_iter().map(FundLimit::from).collect(),
            available_balance,
        })
    }
}
