//! Profile domain — account holder details.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, SdkError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub fy_id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub email: String,
    pub pan: String,
    pub image: Option<String>,
    /// Days until the trading password expires.
    pub password_expires_in_days: Option<i64>,
}

impl TryFrom<wire::ProfileResponse> for Profile {
    type Error = SdkError;

    fn try_from(resp: wire::ProfileResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let data = resp.data.ok_or(DecodeError::MissingField("data"))?;
        Ok(Profile {
            fy_id: data.fy_id,
            name: data.name,
            display_name: data.display_name.filter(|s| !s.is_empty()),
            email: data.email_id,
            pan: data.pan,
            image: data.image.filter(|s| !s.is_empty()),
            password_expires_in_days: data.pwd_to_expire,
        })
    }
}
