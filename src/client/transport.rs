//! The fetch seam: a trait over the underlying HTTP primitive, plus the
//! production `reqwest` implementation and the pass-through options bag.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, Response};

use crate::error::DccError;

/// Options forwarded verbatim to the underlying fetch call.
///
/// Every field is optional; unset fields fall back to whatever the
/// transport's defaults are (method defaults to GET). The client never
/// inspects or rewrites these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Option<HeaderMap>,
    pub body: Option<Vec<u8>>,
    /// Per-request timeout, handed to `reqwest::RequestBuilder::timeout`.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Serialize `body` as JSON and set the `Content-Type` header.
    pub fn with_json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, DccError> {
        self.body = Some(serde_json::to_vec(body).map_err(DccError::SerdeError)?);
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }
}

/// The platform fetch primitive, abstracted so tests can stub it.
///
/// Implementations must be fully transparent: no retries, no status
/// inspection, no error translation beyond wrapping the transport's own
/// error type.
#[async_trait::async_trait]
pub trait FetchTransport: Send + Sync {
    /// Issue one HTTP request to `url` with `options` applied verbatim.
    async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Response, DccError>;
}

/// Production transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let http = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .expect("Failed to build reqwest client");

        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FetchTransport for ReqwestTransport {
    async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Response, DccError> {
        let method = options.method.unwrap_or(Method::GET);
        let mut req = self.http.request(method, url);

        if let Some(headers) = options.headers {
            req = req.headers(headers);
        }
        if let Some(body) = options.body {
            req = req.body(body);
        }
        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }

        req.send().await.map_err(DccError::ReqwestError)
    }
}
