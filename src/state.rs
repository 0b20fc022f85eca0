//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; it only needs the backend origin and one
//! pooled HTTP client to reach it.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{HostConfig, StartupError};

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state from config.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientBuild` if the TLS backend cannot be initialised.
    pub fn new(config: &HostConfig) -> Result<Self, StartupError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| StartupError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
