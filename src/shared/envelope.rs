//! The `{ s, code, message }` status block every REST response carries.

use crate::error::ApiError;
use serde::Deserialize;

/// Status fields shared by every response body.
///
/// Flattened into each endpoint's wire struct. All fields default so a body
/// that omits them decodes as a failure with code 0 rather than a serde error.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    pub fn is_ok(&self) -> bool {
        self.s == "ok"
    }

    /// Fails with the body's own code and message unless `s == "ok"`.
    pub fn ensure_ok(&self) -> Result<(), ApiError> {
        if self.is_ok() {
            return Ok(());
        }
        tracing::warn!(code = self.code, message = %self.message, "API returned error status");
        Err(ApiError::new(self.code, self.message.clone()))
    }

    /// Status check for mutations: an `"ok"` body must also carry an id.
    pub fn ensure_id(&self, id: Option<&str>) -> Result<String, ApiError> {
        self.ensure_ok()?;
        match id {
            Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
            _ => {
                tracing::warn!(code = self.code, "API reported success without an id");
                Err(ApiError::new(self.code, self.message.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Envelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ok_status() {
        let env = envelope(r#"{"s":"ok","code":200,"message":""}"#);
        assert!(env.ensure_ok().is_ok());
    }

    #[test]
    fn test_error_status_carries_code_and_message() {
        let env = envelope(r#"{"s":"error","code":-16,"message":"Could not authenticate"}"#);
        let err = env.ensure_ok().unwrap_err();
        assert_eq!(err.code, -16);
        assert_eq!(err.message, "Could not authenticate");
    }

    #[test]
    fn test_missing_status_is_error() {
        let env = envelope("{}");
        assert_eq!(env.ensure_ok().unwrap_err().code, 0);
    }

    #[test]
    fn test_ok_without_id_is_error() {
        let env = envelope(r#"{"s":"ok","code":1101,"message":"Order submitted"}"#);
        let err = env.ensure_id(Some("")).unwrap_err();
        assert_eq!(err.code, 1101);
        assert_eq!(err.message, "Order submitted");
        assert!(env.ensure_id(None).is_err());
        assert_eq!(env.ensure_id(Some("52104097616")).unwrap(), "52104097616");
    }
}
