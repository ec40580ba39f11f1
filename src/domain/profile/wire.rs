//! Wire types for `GET /profile`.

use crate::shared::Envelope;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawProfile {
    #[serde(default)]
    pub fy_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_id: String,
    #[serde(default, rename = "PAN")]
    pub pan: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pwd_to_expire: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<RawProfile>,
}
