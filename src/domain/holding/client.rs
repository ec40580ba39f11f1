//! Holdings sub-client.

use crate::client::FyersClient;
use crate::domain::holding::wire::HoldingsResponse;
use crate::domain::holding::Holdings;
use crate::error::SdkError;

pub struct HoldingsClient<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> HoldingsClient<'a> {
    pub async fn get(&self) -> Result<Holdings, SdkError> {
        let url = format!("{}/holdings", self.client.http.api_url());
        let resp: HoldingsResponse = self.client.http.get(&url).await?;
        Holdings::try_from(resp)
    }
}
