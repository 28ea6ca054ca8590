//! The HTTP seam under [`RemoteListClient`](crate::remote::RemoteListClient).
//!
//! Only GET is needed: the remote collection is read-only.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Header name to value.
pub type Headers = HashMap<String, String>;

/// A reply that arrived, whatever its status.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Reason phrase ("Not Found"); empty when unknown
    pub status_text: String,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    /// Reply with no headers and the standard reason phrase for `status`.
    pub fn new(status: u16, body: Bytes) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default();
        Self::with_parts(status, status_text.to_string(), Headers::new(), body)
    }

    pub fn with_parts(status: u16, status_text: String, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            status_text,
            headers,
            body,
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(self.body.as_ref())
    }
}

/// The request never produced a reply.
///
/// A non-2xx reply is not an `HttpError`; it is a [`Response`] and the caller
/// decides what it means.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Other(String),
}

/// GET against the remote. Implemented over reqwest for real use and by
/// [`MockHttpClient`](crate::adapters::MockHttpClient) in tests.
///
/// ```ignore
/// use postdeck::traits::{Headers, HttpClient};
///
/// async fn status_of<C: HttpClient>(client: &C, url: &str) -> Option<u16> {
///     client.get(url, &Headers::new()).await.ok().map(|r| r.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// `Ok` for every reply that arrived, including 4xx/5xx.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
