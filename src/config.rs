//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Errors that stop the host before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// An environment variable is set but unusable.
    #[error("invalid {var}: {value:?} ({reason})")]
    InvalidEnv { var: &'static str, value: String, reason: &'static str },

    /// The backend HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// `[package.metadata.leptos]` or the `LEPTOS_*` overrides are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash; `/api/...` is appended.
    pub backend_url: String,
    pub backend_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:8000`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let backend_url = match lookup("BACKEND_URL") {
            Some(raw) => parse_backend_url(&raw)?,
            None => DEFAULT_BACKEND_URL.to_owned(),
        };
        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        };
        Ok(Self { port, backend_url, backend_timeout })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn invalid(var: &'static str, value: &str, reason: &'static str) -> StartupError {
    StartupError::InvalidEnv { var, value: value.to_owned(), reason }
}

fn parse_port(raw: &str) -> Result<u16, StartupError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid("PORT", raw, "expected 1-65535")),
        Ok(port) => Ok(port),
    }
}

fn parse_backend_url(raw: &str) -> Result<String, StartupError> {
    let url = raw.trim().trim_end_matches('/');
    let Some(rest) = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://")) else {
        return Err(invalid("BACKEND_URL", raw, "expected an http(s) URL"));
    };
    if rest.is_empty() {
        return Err(invalid("BACKEND_URL", raw, "missing host"));
    }
    Ok(url.to_owned())
}

fn parse_timeout(raw: &str) -> Result<Duration, StartupError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid("BACKEND_TIMEOUT_SECS", raw, "expected a positive number of seconds")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
