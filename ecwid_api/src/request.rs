//! Pending requests and the decoders that turn raw responses into results.

use std::{fmt, marker::PhantomData, sync::Arc};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::{
    endpoint::Endpoint,
    errors::truncate_body,
    transport::{Executor, HttpEntity, HttpMethod, ResponseEnvelope},
    Error,
};

/// Result shape an endpoint declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single JSON object.
    Object,
    /// A JSON array of objects.
    List,
    /// Raw bytes, passed through undecoded.
    Binary,
}

/// Maps a raw response body to a typed result.
pub trait Decode {
    const SHAPE: Shape;
    type Output;

    fn decode(response: ResponseEnvelope) -> Result<Self::Output, Error>;
}

/// Decodes a single JSON object into `T`.
pub struct Object<T>(PhantomData<fn() -> T>);

/// Decodes a JSON array into `Vec<T>`, keeping element order.
pub struct List<T>(PhantomData<fn() -> T>);

/// Returns the body bytes as they arrived.
pub struct Binary;

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

fn parse_json<T: DeserializeOwned>(body: &[u8], expected: &'static str) -> Result<T, Error> {
    if is_blank(body) {
        tracing::warn!("Empty response body, expected {}", expected);
        return Err(Error::EmptyBody(expected));
    }
    serde_json::from_slice(body).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(body));
        tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
        Error::Parse(e)
    })
}

impl<T: DeserializeOwned> Decode for Object<T> {
    const SHAPE: Shape = Shape::Object;
    type Output = T;

    fn decode(response: ResponseEnvelope) -> Result<T, Error> {
        parse_json(&response.body, "JSON object")
    }
}

impl<T: DeserializeOwned> Decode for List<T> {
    const SHAPE: Shape = Shape::List;
    type Output = Vec<T>;

    fn decode(response: ResponseEnvelope) -> Result<Vec<T>, Error> {
        parse_json(&response.body, "JSON array")
    }
}

impl Decode for Binary {
    const SHAPE: Shape = Shape::Binary;
    type Output = Vec<u8>;

    fn decode(response: ResponseEnvelope) -> Result<Vec<u8>, Error> {
        if response.body.is_empty() {
            tracing::warn!("Empty response body, expected binary output");
            return Err(Error::EmptyBody("binary output"));
        }
        Ok(response.body)
    }
}

/// One HTTP call, fully described but not yet sent.
///
/// Returned by every endpoint method on [`crate::Store`]. Nothing touches
/// the network until [`PendingRequest::execute`] is called. Executing again
/// issues a fresh call; no response is cached.
pub struct PendingRequest<D> {
    executor: Arc<dyn Executor>,
    endpoint: &'static Endpoint,
    url: String,
    body: Option<HttpEntity>,
    headers: HeaderMap,
    _decode: PhantomData<fn() -> D>,
}

impl<D: Decode> PendingRequest<D> {
    pub(crate) fn new(
        executor: Arc<dyn Executor>,
        endpoint: &'static Endpoint,
        url: String,
        body: Option<HttpEntity>,
    ) -> Self {
        Self {
            executor,
            endpoint,
            url,
            body,
            headers: HeaderMap::new(),
            _decode: PhantomData,
        }
    }

    /// Full request URL. Contains the access token when one was given.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.endpoint.method
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    pub fn body(&self) -> Option<&HttpEntity> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Adds an extra request header passed through to the executor.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Performs the call and decodes the response.
    pub fn execute(&self) -> Result<D::Output, Error> {
        tracing::debug!("Executing {} {}", self.endpoint.method, self.endpoint.name);
        let response = self
            .executor
            .execute(&self.url, self.endpoint.method, self.body.as_ref(), &self.headers)
            .map_err(|e| {
                tracing::error!("{} failed: {}", self.endpoint.name, e);
                e
            })?;
        D::decode(response)
    }
}

impl<D> fmt::Debug for PendingRequest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL is left out: it carries the token.
        f.debug_struct("PendingRequest")
            .field("endpoint", &self.endpoint.name)
            .field("method", &self.endpoint.method)
            .field("body", &self.body.as_ref().map(|b| b.body().len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    fn envelope(body: &str) -> ResponseEnvelope {
        ResponseEnvelope::with_body(body.as_bytes().to_vec())
    }

    #[test]
    fn object_decodes() {
        let item = Object::<Item>::decode(envelope(r#"{"id":42}"#)).unwrap();
        assert_eq!(item, Item { id: 42 });
    }

    #[test]
    fn list_keeps_order() {
        let items = List::<Item>::decode(envelope(r#"[{"id":3},{"id":1},{"id":2}]"#)).unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn blank_bodies_are_empty_body_errors() {
        let err = Object::<Item>::decode(envelope("")).unwrap_err();
        assert_eq!(err.to_string(), "No response. Expected JSON object.");

        let err = List::<Item>::decode(envelope(" \r\n")).unwrap_err();
        assert_eq!(err.to_string(), "No response. Expected JSON array.");

        let err = Binary::decode(ResponseEnvelope::default()).unwrap_err();
        assert_eq!(err.to_string(), "No response. Expected binary output.");
    }

    #[test]
    fn binary_passes_bytes_through() {
        let bytes = Binary::decode(ResponseEnvelope::with_body(vec![b' ', 0, 255])).unwrap();
        assert_eq!(bytes, vec![b' ', 0, 255]);
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = Object::<Item>::decode(envelope(r#"[{"id":1}]"#)).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
