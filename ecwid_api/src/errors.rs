//! Error types for the API client.

use crate::types::ErrorMessage;

/// Errors that can occur when building or executing API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required parameter or request body was not set. Raised before any
    /// network I/O takes place.
    #[error("{}", describe_missing(.0))]
    IllegalArgument(String),

    /// The remote call completed with an HTTP status of 400 or above.
    #[error("Request failed with status {status}: {message}")]
    Status {
        status: u16,
        /// Reason phrase of the status line.
        message: String,
        /// Response body snippet, possibly empty.
        body: String,
    },

    /// The call succeeded but no body came back where one was expected.
    #[error("No response. Expected {0}.")]
    EmptyBody(&'static str),

    /// The reference transport failed (DNS, connection, TLS, timeout).
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    /// A custom executor failed to perform the call.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The response body did not match the declared result shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The request DTO could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured API base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// HTTP status code for [`Error::Status`], `None` for every other variant.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 4xx responses: the request itself was rejected.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(500..=599))
    }

    /// Decodes the `{"errorMessage": ...}` payload the API attaches to most
    /// error responses.
    pub fn api_message(&self) -> Option<ErrorMessage> {
        match self {
            Error::Status { body, .. } if !body.is_empty() => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

/// Name reported when an endpoint that takes a body was given none.
pub(crate) const BODY: &str = "body";

fn describe_missing(name: &str) -> String {
    if name == BODY {
        "No request body".to_string()
    } else {
        format!("No parameter {} is set", name)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
