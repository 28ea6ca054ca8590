//! Scripted [`HttpClient`] for tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One GET seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What the mock answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A reply with any status
    Success(Response),
    /// No reply at all
    Error(HttpError),
}

impl MockResponse {
    /// `200 OK` with `json` as the body.
    pub fn json(json: impl Into<String>) -> Self {
        MockResponse::Success(Response::new(200, Bytes::from(json.into())))
    }

    /// Empty reply with `status`.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

#[derive(Debug, Default)]
struct Script {
    by_url: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    seen: Vec<RecordedRequest>,
}

/// URL-keyed mock. Clones share the script and the request log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("http://mock/posts/1", MockResponse::json(r#"{"id":1}"#));
/// http.set_default_response(MockResponse::status(404));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer for exactly `url`, query string included.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.script.lock().unwrap().by_url.insert(url.to_string(), response);
    }

    /// Answer for every URL without its own entry.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script.lock().unwrap().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().seen.clone()
    }

    /// URLs requested so far, oldest first.
    pub fn requested_urls(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.url).collect()
    }

    pub fn clear_requests(&self) {
        self.script.lock().unwrap().seen.clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let answer = {
            let mut script = self.script.lock().unwrap();
            script.seen.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });
            script.by_url.get(url).or(script.fallback.as_ref()).cloned()
        };

        match answer {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("unscripted URL {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_reply_is_returned_and_logged() {
        let http = MockHttpClient::new();
        http.set_response("http://mock/posts", MockResponse::json("[]"));

        let reply = http.get("http://mock/posts", &Headers::new()).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, Bytes::from("[]"));
        assert_eq!(http.requested_urls(), vec!["http://mock/posts"]);
    }

    #[tokio::test]
    async fn test_query_string_must_match() {
        let http = MockHttpClient::new();
        http.set_response("http://mock/posts", MockResponse::json("[]"));

        let result = http.get("http://mock/posts?_start=0&_limit=10", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_scripted_transport_error() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://mock/posts",
            MockResponse::Error(HttpError::Connect("refused".to_string())),
        );

        let result = http.get("http://mock/posts", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Connect("refused".to_string()));
    }

    #[tokio::test]
    async fn test_fallback_and_shared_log() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(404));
        let other = http.clone();

        let reply = other.get("http://mock/users/9", &Headers::new()).await.unwrap();
        assert_eq!(reply.status_text, "Not Found");
        assert_eq!(http.get_requests().len(), 1);

        http.clear_requests();
        assert!(other.get_requests().is_empty());
    }
}
