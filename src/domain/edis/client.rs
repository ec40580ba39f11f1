//! e-DIS sub-client.

use crate::client::FyersClient;
use crate::domain::edis::wire::{EdisDetailsResponse, EdisInquiryResponse};
use crate::domain::edis::{EdisInquiry, EdisTransactions};
use crate::error::SdkError;
use crate::shared::Envelope;
use serde::Serialize;

pub struct Edis<'a> {
    pub(crate) client: &'a FyersClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InquiryBody<'b> {
    transaction_id: &'b str,
}

impl<'a> Edis<'a> {
    /// Ask the depository to send a TPIN to the account holder.
    pub async fn generate_tpin(&self) -> Result<(), SdkError> {
        let url = format!("{}/tpin", self.client.http.api_url());
        let resp: Envelope = self.client.http.get(&url).await?;
        resp.ensure_ok()?;
        Ok(())
    }

    pub async fn details(&self) -> Result<EdisTransactions, SdkError> {
        let url = format!("{}/details", self.client.http.api_url());
        let resp: EdisDetailsResponse = self.client.http.get(&url).await?;
        EdisTransactions::try_from(resp)
    }

    pub async fn inquiry(&self, transaction_id: &str) -> Result<EdisInquiry, SdkError> {
        if transaction_id.trim().is_empty() {
            return Err(SdkError::Validation("transaction id is empty".to_string()));
        }
        let url = format!("{}/inquiry", self.client.http.api_url());
        let body = InquiryBody { transaction_id };
        let resp: EdisInquiryResponse = self.client.http.post(&url, &body).await?;
        EdisInquiry::try_from(resp)
    }
}
