//! Market data sub-client — status, history, quotes, depth.

use crate::client::FyersClient;
use crate::domain::market::wire::{
    DepthResponse, HistoryResponse, MarketStatusResponse, QuotesResponse,
};
use crate::domain::market::{
    DepthRequest, HistoryRequest, MarketDepth, MarketHistory, MarketStatus, Quotes, QuotesRequest,
};
use crate::error::SdkError;
use crate::http::with_query;

pub struct MarketData<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> MarketData<'a> {
    /// Open/closed state of every exchange segment.
    pub async fn status(&self) -> Result<Vec<MarketStatus>, SdkError> {
        let url = format!("{}/market-status", self.client.http.api_url());
        let resp: MarketStatusResponse = self.client.http.get(&url).await?;
        MarketStatus::list_from(resp)
    }

    pub async fn history(&self, request: &HistoryRequest) -> Result<MarketHistory, SdkError> {
        let base = format!("{}/history", self.client.http.data_url());
        let url = with_query(&base, &request.to_query()?);
        let resp: HistoryResponse = self.client.http.get(&url).await?;
        MarketHistory::try_from(resp)
    }

    pub async fn quotes(&self, request: &QuotesRequest) -> Result<Quotes, SdkError> {
        let base = format!("{}/quotes", self.client.http.data_url());
        let url = with_query(&base, &request.to_query()?);
        let resp: QuotesResponse = self.client.http.get(&url).await?;
        Quotes::try_from(resp)
    }

    /// `Ok(None)` when the exchange has no book for the symbol.
    pub async fn depth(&self, request: &DepthRequest) -> Result<Option<MarketDepth>, SdkError> {
        let base = format!("{}/depth", self.client.http.data_url());
        let url = with_query(&base, &request.to_query()?);
        let resp: DepthResponse = self.client.http.get(&url).await?;
        MarketDepth::from_response(resp)
    }
}
