//! Conversions: e-DIS wire types → e-DIS domain types.

use super::wire::{EdisDetailsResponse, EdisInquiryResponse, RawEdisTransaction};
use super::{EdisInquiry, EdisOverall, EdisTransaction, EdisTransactions};
use crate::error::{DecodeError, SdkError};
use crate::shared::serde_util;

impl TryFrom<RawEdisTransaction> for EdisTransaction {
    type Error = DecodeError;

    fn try_from(raw: RawEdisTransaction) -> Result<Self, Self::Error> {
        Ok(EdisTransaction {
            entry_date: serde_util::parse_optional_exchange_datetime(&raw.entry_date)?,
            start_date: serde_util::parse_optional_exchange_datetime(&raw.start_date)?,
            end_date: serde_util::parse_optional_exchange_datetime(&raw.end_date)?,
            transaction_id: raw.transaction_id,
            internal_transaction_id: raw.internal_txn_id,
            isin: raw.isin,
            quantity: raw.qty,
            quantity_utilized: raw.qty_utlize,
            status: raw.status,
            reason: raw.reason,
            source: raw.source,
        })
    }
}

impl EdisOverall {
    pub fn from_raw(raw: &[RawEdisTransaction]) -> Self {
        raw.iter().fold(EdisOverall::default(), |mut acc, t| {
            acc.count += 1;
            acc.total_quantity += t.qty;
            acc.total_utilized += t.qty_utlize;
            if t.status.eq_ignore_ascii_case("SUCCESS") {
                acc.successful += 1;
            }
            acc
        })
    }
}

impl TryFrom<EdisDetailsResponse> for EdisTransactions {
    type Error = SdkError;

    fn try_from(resp: EdisDetailsResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp.data.ok_or(DecodeError::MissingField("data"))?;
        let overall = EdisOverall::from_raw(&raw);
        let items = raw
            .into_iter()
            .map(EdisTransaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EdisTransactions { items, overall })
    }
}

impl TryFrom<EdisInquiryResponse> for EdisInquiry {
    type Error = SdkError;

    fn try_from(resp: EdisInquiryResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp.data.ok_or(DecodeError::MissingField("data"))?;
        Ok(EdisInquiry {
            succeeded: raw.success_cnt,
            failed: raw.failed_cnt,
        })
    }
}
