//! Authentication — authorization pair, two-step login request shapes.
//!
//! ## Flow
//!
//! 1. Build an [`AuthCodeRequest`] and send the user to [`AuthCodeRequest::url`].
//!    The broker redirects back to `redirect_uri` with `auth_code` in the query.
//! 2. Exchange the code with `client.auth().validate_auth_code(...)`, which
//!    posts a [`TokenRequest`] and installs the returned access token.
//!
//! Both steps are pure request shapes. No session state lives here besides
//! the [`Authorization`] the facade holds.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::shared::Envelope;

// ============================================================================
// Authorization
// ============================================================================

/// The `(app id, access token)` pair every request is signed with.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    pub app_id: String,
    access_token: String,
}

impl Authorization {
    pub fn new(app_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            access_token: access_token.into(),
        }
    }

    /// `Authorization` header value and WS `access_token` parameter:
    /// `"appId:accessToken"`.
    pub fn header_value(&self) -> String {
        format!("{}:{}", self.app_id, self.access_token)
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub(crate) fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self::new(self.app_id.clone(), access_token)
    }
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorization")
            .field("app_id", &self.app_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Step 1: authorization code
// ============================================================================

/// Query for the broker's login page.
#[derive(Debug, Clone, Serialize)]
pub struct AuthCodeRequest {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: String,
    pub state: String,
}

impl AuthCodeRequest {
    pub fn new(app_id: &str, redirect_uri: &str, state: &str) -> Self {
        Self {
            client_id: app_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            response_type: "code".to_string(),
            state: state.to_string(),
        }
    }

    /// Full `/generate-authcode` URL under `api_url`.
    pub fn url(&self, api_url: &str) -> String {
        format!(
            "{}/generate-authcode?client_id={}&redirect_uri={}&response_type={}&state={}",
            api_url.trim_end_matches('/'),
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(&self.response_type),
            urlencoding::encode(&self.state),
        )
    }
}

// ============================================================================
// Step 2: token exchange
// ============================================================================

/// `hex(sha256("appId:appSecret"))`.
pub fn app_id_hash(app_id: &str, app_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", app_id, app_secret).as_bytes());
    hex::encode(hasher.finalize())
}

/// Body of `POST /validate-authcode`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(rename = "grant_type")]
    pub grant_type: String,
    pub app_id_hash: String,
    pub code: String,
}

impl TokenRequest {
    pub fn new(app_id: &str, app_secret: &str, auth_code: &str) -> Self {
        Self {
            grant_type: "authorization_code".to_string(),
            app_id_hash: app_id_hash(app_id, app_secret),
            code: auth_code.to_string(),
        }
    }
}

/// Response of `POST /validate-authcode`.
#[derive(Deserialize, Debug, Clone)]
pub struct TokenResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TokenResponse {
    /// The access token, or an API error when the exchange failed.
    pub fn into_token(self) -> Result<String, crate::error::ApiError> {
        self.envelope.ensure_id(self.access_token.as_deref())
    }
}
