//! Authenticated request gateway.
//!
//! ARCHITECTURE
//! ============
//! Every API call is described as an [`ApiRequest`], turned into an
//! [`OutboundRequest`] by [`RequestGateway::prepare`] (the single interception
//! point) and handed to a [`Transport`]. `prepare` reads the token from the
//! shared [`TokenStore`] at that moment; `send` calls the transport right after
//! with no suspension point in between, so a token cleared by logout is never
//! attached to a request prepared afterwards.
//!
//! The gateway is stateless with respect to the session: it does not retry,
//! does not interpret 401/403 and never clears the token. Failures flow back to
//! the caller unchanged.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::storage::TokenStore;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
const JSON_MIME: &str = "application/json";

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A transport-neutral description of one API call, relative to the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter. Values are URL-encoded when the request is prepared.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl OutboundRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The bearer credential attached to this request, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.header(AUTHORIZATION)
            .and_then(|v| v.strip_prefix("Bearer "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Pass success responses through; turn anything else into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] carrying the backend's message for non-2xx statuses.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Wire-level executor. Enables mocking in tests and a browser fetch
/// implementation in the WASM client.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Transport: Send + Sync {
    /// Execute one request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the request cannot complete.
    /// Non-success statuses are NOT errors at this layer.
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use super::{ApiError, ApiResponse, Method, OutboundRequest, Transport};
    use crate::config::Timeouts;

    /// `reqwest`-backed transport for native embedders and tooling.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        http: reqwest::Client,
    }

    impl ReqwestTransport {
        /// # Errors
        ///
        /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to initialize.
        pub fn new(timeouts: Timeouts) -> Result<Self, ApiError> {
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeouts.request_secs))
                .connect_timeout(Duration::from_secs(timeouts.connect_secs))
                .build()
                .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
            Ok(Self { http })
        }
    }

    #[async_trait::async_trait]
    impl Transport for ReqwestTransport {
        async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.http.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

/// The single outbound pipeline for API calls. Cheap to clone.
#[derive(Clone)]
pub struct RequestGateway {
    base_url: Arc<str>,
    tokens: Arc<dyn TokenStore>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for RequestGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RequestGateway {
    /// `base_url` is the API root (see [`crate::ClientConfig::api_base_url`]).
    /// `tokens` must be the same store the session store writes.
    #[must_use]
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), tokens, transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token the next prepared request would carry.
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.tokens.load()
    }

    /// Resolve `request` into a wire request, attaching the bearer token if one
    /// is persisted right now.
    #[must_use]
    pub fn prepare(&self, request: ApiRequest) -> OutboundRequest {
        let ApiRequest { method, path, query, body } = request;
        let url = resolve_url(&self.base_url, &path, &query);

        let mut headers = vec![(ACCEPT.to_owned(), JSON_MIME.to_owned())];
        if body.is_some() {
            headers.push((CONTENT_TYPE.to_owned(), JSON_MIME.to_owned()));
        }
        if let Some(token) = self.tokens.load().filter(|t| !t.is_empty()) {
            headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        }

        OutboundRequest { method, url, headers, body }
    }

    /// Prepare and execute a request, returning the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when the transport cannot complete the request.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let outbound = self.prepare(request);
        let method = outbound.method.as_str();
        let url = outbound.url.clone();
        let authenticated = outbound.bearer_token().is_some();

        let result = self.transport.execute(outbound).await;
        match &result {
            Ok(resp) if resp.is_success() => {
                tracing::debug!(method, %url, authenticated, status = resp.status, "api request ok");
            }
            Ok(resp) => {
                tracing::debug!(method, %url, authenticated, status = resp.status, "api request rejected");
            }
            Err(e) => tracing::warn!(method, %url, error = %e, "api request failed"),
        }
        result
    }

    /// Send and decode a success body as `T`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`], [`ApiError::Status`] for non-2xx, or
    /// [`ApiError::Decode`] for a body that does not match `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.error_for_status()?.json()
    }

    /// Send and discard the success body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] or [`ApiError::Status`] for non-2xx.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await?.error_for_status().map(|_| ())
    }

    /// `GET path` decoded as `T`.
    ///
    /// # Errors
    ///
    /// See [`RequestGateway::fetch_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch_json(ApiRequest::get(path)).await
    }

    /// `POST path` with a JSON body, decoded as `T`.
    ///
    /// # Errors
    ///
    /// See [`RequestGateway::fetch_json`]; also [`ApiError::InvalidInput`] if
    /// `body` cannot be serialized.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path).json(body)?;
        self.fetch_json(request).await
    }

    /// `PUT path` with a JSON body, decoded as `T`.
    ///
    /// # Errors
    ///
    /// See [`RequestGateway::post_json`].
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = ApiRequest::put(path).json(body)?;
        self.fetch_json(request).await
    }

    /// `DELETE path`, discarding the body.
    ///
    /// # Errors
    ///
    /// See [`RequestGateway::execute`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await
    }
}

fn resolve_url(base_url: &str, path: &str, query: &[(String, String)]) -> String {
    let mut url = String::with_capacity(base_url.len() + path.len() + 16);
    url.push_str(base_url);
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(path);

    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
