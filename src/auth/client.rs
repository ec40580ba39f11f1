//! Auth sub-client — login URL, auth code exchange, token installation.

use crate::auth::{AuthCodeRequest, TokenRequest, TokenResponse};
use crate::client::FyersClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FyersClient,
}

impl<'a> Auth<'a> {
    /// Login page URL for step 1 of the login flow.
    pub async fn auth_code_url(&self, redirect_uri: &str, state: &str) -> Result<String, SdkError> {
        let app_id = self.app_id().await?;
        Ok(AuthCodeRequest::new(&app_id, redirect_uri, state).url(self.client.http.api_url()))
    }

    /// Exchange an authorization code for an access token.
    ///
    /// On success the token is installed on the client, so every following
    /// REST call and new WS connection uses it.
    pub async fn validate_auth_code(
        &self,
        app_secret: &str,
        auth_code: &str,
    ) -> Result<String, SdkError> {
        let app_id = self.app_id().await?;
        let request = TokenRequest::new(&app_id, app_secret, auth_code);
        let url = format!("{}/validate-authcode", self.client.http.api_url());
        let resp: TokenResponse = self.client.http.post(&url, &request).await?;
        let token = resp.into_token()?;

        self.client.set_access_token(&token).await?;
        tracing::info!(app_id = %app_id, "access token installed");
        Ok(token)
    }

    /// Whether an access token is installed.
    pub async fn is_authenticated(&self) -> bool {
        self.client
            .http
            .authorization()
            .await
            .is_some_and(|auth| auth.has_access_token())
    }

    async fn app_id(&self) -> Result<String, SdkError> {
        self.client
            .http
            .authorization()
            .await
            .map(|auth| auth.app_id)
            .ok_or_else(|| SdkError::Validation("no app id configured".to_string()))
    }
}
