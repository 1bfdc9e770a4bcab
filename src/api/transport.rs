//! JSON transport seam and its HTTP implementation.

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;

use crate::api::errors::ApiError;

/// HTTP method used by the backend contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    #[default]
    Get,

    /// `POST`
    Post,

    /// `PUT`
    Put,

    /// `DELETE`
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Caller-supplied request options, merged over the JSON defaults by the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Request method, `GET` unless overridden.
    pub method: Method,

    /// Extra headers. A header named here replaces the transport default of the same name.
    pub headers: Vec<(String, String)>,

    /// JSON request body.
    pub body: Option<Value>,
}

impl RequestOptions {
    /// A bodyless request with the given method.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// A request carrying a JSON body.
    #[must_use]
    pub fn json(method: Method, body: Value) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Add a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Sends one JSON request and hands back the decoded JSON body, if any.
#[automock]
#[async_trait(?Send)]
pub trait Transport {
    /// Send a request to `endpoint` (a path relative to the API base, e.g. `/produtos/`).
    ///
    /// Returns `Ok(None)` for a successful response without a body.
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: Client,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url`, e.g. `"http://localhost:8000/api"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Base URL all endpoints are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let headers = merge_headers(&options.headers)?;

        let mut request = self
            .http
            .request(options.method.into(), self.url(endpoint))
            .headers(headers);

        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Request {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        decode_body(&bytes)
    }
}

/// Build the outgoing header map: `Content-Type: application/json`, then the caller's headers.
///
/// # Errors
///
/// Returns [`ApiError::InvalidHeader`] when a caller header name or value is not valid HTTP.
pub fn merge_headers(extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|error| ApiError::InvalidHeader(format!("{name}: {error}")))?;

        let value = HeaderValue::from_str(value)
            .map_err(|error| ApiError::InvalidHeader(format!("{name}: {error}")))?;

        headers.insert(name, value);
    }

    Ok(headers)
}

/// Decode a successful response body. Empty bodies (`204 No Content`) decode to `None`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a non-empty body is not valid JSON.
pub fn decode_body(bytes: &[u8]) -> Result<Option<Value>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(bytes)?))
}
