//! Trades sub-client — the day's trade book.

use crate::client::FyersClient;
use crate::domain::trade::wire::TradeBookResponse;
use crate::domain::trade::TradeBook;
use crate::error::SdkError;

pub struct Trades<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> Trades<'a> {
    pub async fn book(&self) -> Result<TradeBook, SdkError> {
        let url = format!("{}/tradebook", self.client.http.api_url());
        let resp: TradeBookResponse = self.client.http.get(&url).await?;
        TradeBook::try_from(resp)
    }
}
