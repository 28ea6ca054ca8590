//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production HTTP client.
///
/// Clones share one connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client without a request timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose requests fail with [`HttpError::Timeout`] after `timeout`.
    /// `None` waits indefinitely.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let builder = match timeout {
            Some(timeout) => reqwest::Client::builder().timeout(timeout),
            None => reqwest::Client::builder(),
        };
        let client = builder.build().map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: reqwest::Error) -> HttpError {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::Connect(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else {
            HttpError::Other(message)
        }
    }

    /// Headers whose values are not visible ASCII are dropped.
    fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
        map.iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| request.header(name, value));

        let reply = request.send().await.map_err(Self::map_error)?;

        let status = reply.status();
        let reply_headers = Self::collect_headers(reply.headers());
        let body = reply.bytes().await.map_err(Self::map_error)?;
        tracing::trace!(url, status = status.as_u16(), bytes = body.len(), "GET complete");

        Ok(Response::with_parts(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default().to_string(),
            reply_headers,
            body,
        ))
    }
}
