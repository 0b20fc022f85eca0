//! Same-origin `/api` proxy to the REST backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host. Requests are forwarded with
//! method, path, query, body and end-to-end headers intact; the backend's
//! status, headers and body come back unchanged. Only an unreachable backend
//! is answered locally, with the same `{"detail": ...}` shape the backend
//! uses for its own errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Largest request body forwarded (book gallery uploads included).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Headers that describe one connection and must not be forwarded.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    HeaderName::from_static("proxy-connection"),
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),

    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Body(_) => (StatusCode::BAD_REQUEST, "request body too large or unreadable"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "backend unavailable"),
        };
        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

/// Backend URL for an incoming `/api/...` request URI, query included.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Copy `headers` minus hop-by-hop ones, `Host` and `Content-Length`, and
/// minus anything the `Connection` header names.
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let connection_listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH
            || connection_listed.iter().any(|listed| listed == name.as_str())
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// `ANY /api/{*path}`
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let url = upstream_url(&state.backend_url, request.uri());
    match forward_inner(&state, request, &url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "proxy request failed");
            e.into_response()
        }
    }
}

async fn forward_inner(state: &AppState, request: Request, url: &str) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), url)
        .headers(end_to_end_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
