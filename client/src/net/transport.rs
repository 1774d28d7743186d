//! Browser HTTP transport for the request gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a network error, since the REST
//! backend is only reachable from the browser with the user's token.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use escenarte::ApiError;
use escenarte::gateway::{ApiResponse, OutboundRequest, Transport};

#[cfg(any(test, not(feature = "hydrate")))]
const SSR_UNAVAILABLE: &str = "unavailable during server rendering";

/// `Transport` used by the app. Stateless, so one instance serves every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for GlooTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network(SSR_UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: OutboundRequest) -> Result<ApiResponse, ApiError> {
    use escenarte::gateway::Method;
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match &request.body {
        Some(body) => builder.body(body.to_string()),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let resp = prepared.send().await.map_err(network_error)?;
    let status = resp.status();
    let body = resp.text().await.map_err(network_error)?;
    Ok(ApiResponse::new(status, body))
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("request failed: {e}");
    ApiError::Network(e.to_string())
}
