//! Profile sub-client.

use crate::client::FyersClient;
use crate::domain::profile::wire::ProfileResponse;
use crate::domain::profile::Profile;
use crate::error::SdkError;

pub struct ProfileClient<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> ProfileClient<'a> {
    pub async fn get(&self) -> Result<Profile, SdkError> {
        let url = format!("{}/profile", self.client.http.api_url());
        let resp: ProfileResponse = self.client.http.get(&url).await?;
        Profile::try_from(resp)
    }
}
