//! Reference transport built on `reqwest`'s blocking client.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, EXPECT};

use super::{Executor, HttpEntity, HttpMethod, ResponseEnvelope};
use crate::{errors::truncate_body, Error};

/// Performs requests with a shared `reqwest::blocking::Client`.
///
/// Each call blocks the current thread until the response body has been
/// read. The underlying client pools connections, so one executor can be
/// shared across threads. No timeout is set beyond what the supplied
/// client is configured with.
pub struct ReqwestExecutor {
    client: reqwest::blocking::Client,
}

impl ReqwestExecutor {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ecwid_api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps a preconfigured client (timeouts, proxies, TLS roots).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Executor for ReqwestExecutor {
    fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&HttpEntity>,
        headers: &HeaderMap,
    ) -> Result<ResponseEnvelope, Error> {
        let method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut request_headers = headers.clone();
        // Empty Expect suppresses the 100-continue handshake.
        request_headers.insert(EXPECT, HeaderValue::from_static(""));
        if let Some(entity) = body {
            request_headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(entity.content_type().as_str()),
            );
        }

        let mut request = self.client.request(method.clone(), url).headers(request_headers);
        match body {
            Some(entity) => request = request.body(entity.body().to_vec()),
            None if method != reqwest::Method::GET => request = request.body(Vec::new()),
            None => {}
        }

        let resp = request.send().map_err(|e| {
            tracing::error!("Failed to send {} request: {}", method, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let reason = reason_phrase(&resp);
        let response_headers = resp.headers().clone();
        let content_type = response_headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let data = resp.bytes().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if status.as_u16() >= 400 {
            let snippet = truncate_body(&String::from_utf8_lossy(&data));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Status {
                status: status.as_u16(),
                message: reason,
                body: snippet,
            });
        }

        Ok(ResponseEnvelope {
            body: data.to_vec(),
            content_type,
            headers: response_headers,
        })
    }
}

/// Reason phrase from the status line. hyper only records it when it
/// differs from the canonical phrase for the code.
fn reason_phrase(resp: &reqwest::blocking::Response) -> String {
    match resp.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => resp
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}
