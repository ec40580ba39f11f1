//! Orders sub-client — order book, place, modify, cancel, batches.

use crate::client::FyersClient;
use crate::domain::order::wire::{BatchResponse, OrderAckResponse, OrderBookResponse};
use crate::domain::order::{
    fan_out_batch, CancelOrderRequest, ModifyOrderRequest, Order, OrderAck, OrderBook,
    PlaceOrderRequest,
};
use crate::error::{DecodeError, SdkError};
use crate::http::with_query;
use serde::Serialize;

pub struct Orders<'a> {
    pub(crate) client: &'a FyersClient,
}

/// Which verb a batch goes out with.
#[derive(Clone, Copy)]
enum BatchVerb {
    Place,
    Modify,
    Cancel,
}

impl<'a> Orders<'a> {
    fn url(&self) -> String {
        format!("{}/orders", self.client.http.api_url())
    }

    /// Today's order book with totals.
    pub async fn book(&self) -> Result<OrderBook, SdkError> {
        let resp: OrderBookResponse = self.client.http.get(&self.url()).await?;
        OrderBook::try_from(resp)
    }

    /// A single order by id.
    pub async fn get(&self, id: &str) -> Result<Order, SdkError> {
        let url = with_query(&self.url(), &[("id", id.to_string())]);
        let resp: OrderBookResponse = self.client.http.get(&url).await?;
        let book = OrderBook::try_from(resp)?;
        book.orders
            .into_iter()
            .next()
            .ok_or(SdkError::Decode(DecodeError::MissingField("orderBook[0]")))
    }

    pub async fn place(&self, request: &PlaceOrderRequest) -> Result<OrderAck, SdkError> {
        let body = request.to_body()?;
        let resp: OrderAckResponse = self.client.http.post(&self.url(), &body).await?;
        Ok(OrderAck::try_from(resp)?)
    }

    pub async fn modify(&self, request: &ModifyOrderRequest) -> Result<OrderAck, SdkError> {
        let body = request.to_body()?;
        let resp: OrderAckResponse = self.client.http.put(&self.url(), &body).await?;
        Ok(OrderAck::try_from(resp)?)
    }

    pub async fn cancel(&self, request: &CancelOrderRequest) -> Result<OrderAck, SdkError> {
        let body = request.to_body()?;
        let resp: OrderAckResponse = self.client.http.delete(&self.url(), &body).await?;
        Ok(OrderAck::try_from(resp)?)
    }

    /// Place several orders in one request. One result per input, in input
    /// order; a bad item never affects the others.
    pub async fn place_batch(
        &self,
        requests: &[PlaceOrderRequest],
    ) -> Result<Vec<Result<OrderAck, SdkError>>, SdkError> {
        let prepared = requests.iter().map(PlaceOrderRequest::to_body).collect::<Vec<_>>();
        self.batch(BatchVerb::Place, prepared).await
    }

    pub async fn modify_batch(
        &self,
        requests: &[ModifyOrderRequest],
    ) -> Result<Vec<Result<OrderAck, SdkError>>, SdkError> {
        let prepared = requests.iter().map(ModifyOrderRequest::to_body).collect::<Vec<_>>();
        self.batch(BatchVerb::Modify, prepared).await
    }

    pub async fn cancel_batch(
        &self,
        requests: &[CancelOrderRequest],
    ) -> Result<Vec<Result<OrderAck, SdkError>>, SdkError> {
        let prepared = requests.iter().map(CancelOrderRequest::to_body).collect::<Vec<_>>();
        self.batch(BatchVerb::Cancel, prepared).await
    }

    /// Items that fail local validation keep their slot with the validation
    /// error and are not sent. A missing response entry is reported against
    /// the caller's slot, not its position among the sent bodies.
    async fn batch<B: Serialize>(
        &self,
        verb: BatchVerb,
        prepared: Vec<Result<B, SdkError>>,
    ) -> Result<Vec<Result<OrderAck, SdkError>>, SdkError> {
        let mut bodies = Vec::with_capacity(prepared.len());
        let mut slots = Vec::with_capacity(prepared.len());
        for (index, item) in prepared.into_iter().enumerate() {
            match item {
                Ok(body) => {
                    slots.push(Ok(index));
                    bodies.push(body);
                }
                Err(e) => slots.push(Err(e)),
            }
        }

        let mut acks = if bodies.is_empty() {
            Vec::new().into_iter()
        } else {
            let url = format!("{}/orders-multi", self.client.http.api_url());
            let resp: BatchResponse = match verb {
                BatchVerb::Place => self.client.http.post(&url, &bodies).await?,
                BatchVerb::Modify => self.client.http.put(&url, &bodies).await?,
                BatchVerb::Cancel => self.client.http.delete(&url, &bodies).await?,
            };
            fan_out_batch(resp, bodies.len())?.into_iter()
        };

        Ok(slots
            .into_iter()
            .map(|slot| match slot {
                Ok(index) => match acks.next() {
                    Some(Err(SdkError::Decode(DecodeError::MissingBatchItem { .. }))) | None => {
                        Err(DecodeError::MissingBatchItem { index }.into())
                    }
                    Some(result) => result,
                },
                Err(e) => Err(e),
            })
            .collect())
    }
}
