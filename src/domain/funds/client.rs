//! Funds sub-client.

use crate::client::FyersClient;
use crate::domain::funds::wire::FundsResponse;
use crate::domain::funds::Funds;
use crate::error::SdkError;

pub struct FundsClient<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> FundsClient<'a> {
    pub async fn get(&self) -> Result<Funds, SdkError> {
        let url = format!("{}/funds", self.client.http.api_url());
        let resp: FundsResponse = self.client.http.get(&url).await?;
        Funds::try_from(resp)
    }
}
