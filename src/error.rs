//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("WebSocket error: {0}")]
    Ws(#[from] WsError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// The remote error code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            SdkError::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

/// The remote service answered, but signaled failure.
///
/// Raised when the envelope status is not `"ok"`, or when a mutation reports
/// success without returning the identifier it was supposed to produce.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("code {code}: {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Human description of `code` from the published error table.
    pub fn description(&self) -> Option<&'static str> {
        crate::appendix::error_description(self.code)
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Payload shape errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    #[error("Invalid symbol {0:?}")]
    Symbol(String),

    #[error("Malformed frame: {0}")]
    Frame(String),

    #[error("Batch response has no entry for item {index}")]
    MissingBatchItem { index: usize },
}

/// WebSocket errors.
#[derive(Error, Debug)]
pub enum WsError {
    #[error("Not connected")]
    NotConnected,

    #[error("Subscription belongs to the {expected} channel, this socket is {actual}")]
    WrongChannel {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Connection closed: code={code:?} reason={reason}")]
    Closed { code: Option<u16>, reason: String },
}
