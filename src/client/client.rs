//! DCC HTTP client.
//!
//! A stateless wrapper around the fetch transport: it decides whether an
//! endpoint needs the base address prefixed and delegates everything
//! else. Calls are fully independent; the only shared state is the
//! immutable base address.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use reqwest::Response;

use crate::client::transport::{FetchTransport, ReqwestTransport, RequestOptions};
use crate::error::DccError;
use crate::util::{build_url, BASE_URL};

/// Main client to interact with the DCC API.
#[derive(Clone)]
pub struct DccClient {
    pub base_url: String,
    transport: Arc<dyn FetchTransport>,
}

impl Debug for DccClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DccClient")
            .field("base_url", &self.base_url)
            .field("transport", &"Arc<dyn FetchTransport>")
            .finish()
    }
}

impl DccClient {
    /// Construct a client against the fixed [`BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Construct a client against an arbitrary base address
    /// (environment-specific overrides, test servers).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Construct a client with a custom fetch transport.
    pub fn with_transport(base_url: String, transport: Arc<dyn FetchTransport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Resolve `endpoint` against this client's base address.
    pub fn api_url(&self, endpoint: &str) -> String {
        build_url(&self.base_url, endpoint)
    }

    /// Fetch `endpoint` through the base address.
    ///
    /// An endpoint beginning with `http` is taken to already be an
    /// absolute address and is used as-is. Note this treats
    /// scheme-relative URLs (`//host/path`) as relative; downstream
    /// consumers rely on that, so it stays.
    ///
    /// The response comes back exactly as the transport produced it:
    /// non-2xx statuses are not errors, nothing is retried, nothing is
    /// logged. Dropping the returned future cancels the request.
    pub async fn api_fetch(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, DccError> {
        let url = if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            self.api_url(endpoint)
        };

        self.transport.fetch(&url, options.unwrap_or_default()).await
    }
}

impl Default for DccClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::header::HeaderMap;
    use reqwest::Method;

    use super::*;

    /// Records every `(url, options)` pair and answers with a sentinel
    /// response.
    struct StubTransport {
        seen: Mutex<Vec<(String, RequestOptions)>>,
    }

    impl StubTransport {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }

        fn sentinel() -> Response {
            http::Response::builder()
                .status(200)
                .header("x-stub", "sentinel")
                .body("stub-body")
                .unwrap()
                .into()
        }
    }

    #[async_trait::async_trait]
    impl FetchTransport for StubTransport {
        async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Response, DccError> {
            self.seen
                .lock()
                .unwrap()
                .push((url.to_string(), options));
            Ok(Self::sentinel())
        }
    }

    fn stub_client() -> (DccClient, Arc<StubTransport>) {
        let transport = Arc::new(StubTransport::new());
        let client = DccClient::with_transport(BASE_URL.to_string(), transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn relative_endpoint_gets_base_prefixed() {
        let (client, transport) = stub_client();
        client.api_fetch("users", None).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, format!("{BASE_URL}/users"));
    }

    #[tokio::test]
    async fn absolute_endpoint_is_used_unchanged() {
        let (client, transport) = stub_client();
        client
            .api_fetch("https://other.example/x", None)
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, "https://other.example/x");
    }

    #[tokio::test]
    async fn scheme_relative_endpoint_is_treated_as_relative() {
        let (client, transport) = stub_client();
        client.api_fetch("//other.example/x", None).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, format!("{BASE_URL}/other.example/x"));
    }

    #[tokio::test]
    async fn options_are_forwarded_unchanged() {
        let (client, transport) = stub_client();

        let mut headers = HeaderMap::new();
        headers.insert("x-test", "1".parse().unwrap());
        let options = RequestOptions::new()
            .with_method(Method::POST)
            .with_headers(headers)
            .with_body(b"hello".to_vec());

        client
            .api_fetch("users", Some(options.clone()))
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].1, options);
    }

    #[tokio::test]
    async fn missing_options_default_to_empty_bag() {
        let (client, transport) = stub_client();
        client.api_fetch("users", None).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].1, RequestOptions::default());
    }

    #[tokio::test]
    async fn sentinel_response_comes_back_untouched() {
        let (client, _transport) = stub_client();
        let resp = client.api_fetch("users", None).await.unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("x-stub").unwrap(), "sentinel");
        assert_eq!(resp.text().await.unwrap(), "stub-body");
    }

    #[tokio::test]
    async fn injected_base_url_is_respected() {
        let transport = Arc::new(StubTransport::new());
        let client =
            DccClient::with_transport("https://staging.example/dcc".to_string(), transport.clone());
        client.api_fetch("/ping", None).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, "https://staging.example/dcc/ping");
    }

    #[test]
    fn api_url_matches_free_function() {
        let client = DccClient::with_transport(BASE_URL.to_string(), Arc::new(StubTransport::new()));
        assert_eq!(client.api_url("/foo"), crate::util::api_url("/foo"));
    }
}
