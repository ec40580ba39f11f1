//! Positions sub-client — net positions, convert, exit.

use crate::client::FyersClient;
use crate::domain::position::wire::{PositionAckResponse, PositionsResponse};
use crate::domain::position::{
    ConvertPositionRequest, ExitPositionRequest, PositionAck, Positions,
};
use crate::error::SdkError;

pub struct PositionsClient<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> PositionsClient<'a> {
    fn url(&self) -> String {
        format!("{}/positions", self.client.http.api_url())
    }

    /// Net positions with totals.
    pub async fn get(&self) -> Result<Positions, SdkError> {
        let resp: PositionsResponse = self.client.http.get(&self.url()).await?;
        Positions::try_from(resp)
    }

    pub async fn convert(&self, request: &ConvertPositionRequest) -> Result<PositionAck, SdkError> {
        let body = request.to_body()?;
        let resp: PositionAckResponse = self.client.http.put(&self.url(), &body).await?;
        Ok(PositionAck::try_from(resp)?)
    }

    pub async fn exit(&self, request: &ExitPositionRequest) -> Result<PositionAck, SdkError> {
        let body = request.to_body()?;
        let resp: PositionAckResponse = self.client.http.delete(&self.url(), &body).await?;
        Ok(PositionAck::try_from(resp)?)
    }
}
