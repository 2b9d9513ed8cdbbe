//! The pluggable transport contract and the values that cross it.
//!
//! The client never talks to the network directly. Every pending request is
//! handed to an [`Executor`], which performs one HTTP call and returns the
//! raw [`ResponseEnvelope`] or fails with [`Error::Status`] for responses
//! with a status of 400 or above. [`ReqwestExecutor`] is the reference
//! implementation; tests and callers with special needs (deadlines,
//! retries, recording) can supply their own.

mod blocking;
pub use self::blocking::ReqwestExecutor;

use reqwest::header::HeaderMap;

use crate::Error;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type tag of a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Text,
    Binary,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json; charset=utf-8",
            ContentType::Text => "text/plain; charset=utf-8",
            ContentType::Binary => "application/octet-stream",
        }
    }
}

/// A request body paired with its content type. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEntity {
    body: Vec<u8>,
    content_type: ContentType,
}

impl HttpEntity {
    /// Serializes `value` as a JSON body.
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let body = serde_json::to_vec(value).map_err(Error::Encode)?;
        Ok(Self {
            body,
            content_type: ContentType::Json,
        })
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into().into_bytes(),
            content_type: ContentType::Text,
        }
    }

    pub fn binary(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            content_type: ContentType::Binary,
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }
}

/// The raw result of one successful HTTP call.
#[derive(Debug, Clone, Default)]
pub struct ResponseEnvelope {
    pub body: Vec<u8>,
    /// Value of the `Content-Type` response header, including charset.
    pub content_type: Option<String>,
    /// Response headers. Lookup is case-insensitive and duplicates are kept
    /// in arrival order.
    pub headers: HeaderMap,
}

impl ResponseEnvelope {
    /// An envelope carrying only a body. Convenient for custom executors.
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// First value of the named header. When a header appears more than
    /// once the earliest occurrence wins; see [`Self::header_all`].
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Every value of the named header, in arrival order.
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Performs a single HTTP call.
///
/// Implementations must return [`Error::Status`] for any response with a
/// status of 400 or above and should report connection-level failures as
/// [`Error::Network`] or [`Error::Transport`]. No retries or caching are
/// expected at this layer.
pub trait Executor: Send + Sync {
    fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&HttpEntity>,
        headers: &HeaderMap,
    ) -> Result<ResponseEnvelope, Error>;
}

impl<F> Executor for F
where
    F: Fn(&str, HttpMethod, Option<&HttpEntity>, &HeaderMap) -> Result<ResponseEnvelope, Error>
        + Send
        + Sync,
{
    fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&HttpEntity>,
        headers: &HeaderMap,
    ) -> Result<ResponseEnvelope, Error> {
        self(url, method, body, headers)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};

    use super::*;

    #[test]
    fn json_entity_is_tagged_utf8() {
        let entity = HttpEntity::json(&serde_json::json!({"name": "Shirt"})).unwrap();
        assert_eq!(entity.content_type().as_str(), "application/json; charset=utf-8");
        assert_eq!(entity.body(), br#"{"name":"Shirt"}"#);
    }

    #[test]
    fn binary_entity_keeps_bytes() {
        let entity = HttpEntity::binary(vec![0u8, 159, 146, 150]);
        assert_eq!(entity.content_type(), ContentType::Binary);
        assert_eq!(entity.body(), &[0u8, 159, 146, 150]);
    }

    #[test]
    fn duplicate_headers_first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        let envelope = ResponseEnvelope {
            headers,
            ..ResponseEnvelope::default()
        };
        assert_eq!(envelope.header("Set-Cookie"), Some("a=1"));
        assert_eq!(envelope.header_all("set-cookie"), vec!["a=1", "b=2"]);
        assert_eq!(envelope.header("x-missing"), None);
    }

    #[test]
    fn closures_are_executors() {
        let executor = |url: &str,
                        method: HttpMethod,
                        _: Option<&HttpEntity>,
                        _: &HeaderMap|
         -> Result<ResponseEnvelope, Error> {
            assert_eq!(method, HttpMethod::Get);
            Ok(ResponseEnvelope::with_body(url.as_bytes().to_vec()))
        };
        let response = executor
            .execute("https://example.com", HttpMethod::Get, None, &HeaderMap::new())
            .unwrap();
        assert_eq!(response.body, b"https://example.com");
    }
}
