//! Low-level HTTP client — `FyersHttp`.
//!
//! Generic verbs returning wire types (conversion to domain types happens in
//! the sub-clients). Internal to the SDK — `FyersClient` wraps this.

use crate::auth::Authorization;
use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the trading and data REST APIs.
pub struct FyersHttp {
    api_url: String,
    data_url: String,
    client: Client,
    authorization: Arc<RwLock<Option<Authorization>>>,
}

impl FyersHttp {
    pub fn new(api_url: &str, data_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            data_url: data_url.trim_end_matches('/').to_string(),
            client,
            authorization: Arc::new(RwLock::new(None)),
        })
    }

    /// Start with `authorization` installed.
    pub(crate) fn with_authorization(mut self, authorization: Option<Authorization>) -> Self {
        self.authorization = Arc::new(RwLock::new(authorization));
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub(crate) async fn set_authorization(&self, authorization: Option<Authorization>) {
        *self.authorization.write().await = authorization;
    }

    pub(crate) async fn authorization(&self) -> Option<Authorization> {
        self.authorization.read().await.clone()
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(Method::GET, url, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(Method::POST, url, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(Method::PUT, url, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(Method::DELETE, url, Some(body)).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// Error statuses still carry the `{ s, code, message }` body, so the
    /// body is decoded whatever the status; only undecodable bodies on a
    /// non-2xx status become `HttpError::Status`.
    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, url, "HTTP request");
        let mut req = self.client.request(method, url);

        let authorization = self.authorization.read().await.clone();
        if let Some(auth) = authorization.filter(Authorization::has_access_token) {
            req = req.header("Authorization", auth.header_value());
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        match serde_json::from_str::<T>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => Err(HttpError::Json(e)),
            Err(_) => Err(HttpError::Status {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

impl Clone for FyersHttp {
    fn clone(&self) -> Self {
        Self {
            api_url: self.api_url.clone(),
            data_url: self.data_url.clone(),
            client: self.client.clone(),
            authorization: self.authorization.clone(),
        }
    }
}

/// Append URL-encoded query parameters. Empty values are kept.
pub fn with_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let url = with_query(
            "https://api.example/quotes",
            &[("symbols", "NSE:SBIN-EQ,NSE:TCS-EQ".to_string())],
        );
        assert_eq!(
            url,
            "https://api.example/quotes?symbols=NSE%3ASBIN-EQ%2CNSE%3ATCS-EQ"
        );
        assert_eq!(with_query("https://x/y", &[]), "https://x/y");
    }

    #[test]
    fn test_base_urls_trimmed() {
        let http = FyersHttp::new("https://a/api/", "https://a/data/", Duration::from_secs(5)).unwrap();
        assert_eq!(http.api_url(), "https://a/api");
        assert_eq!(http.data_url(), "https://a/data");
    }
}
