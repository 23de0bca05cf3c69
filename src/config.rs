//! Service configuration from environment variables.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct Config {
    /// `BIND_ADDR`, defaults to 0.0.0.0:8080
    pub bind_addr: SocketAddr,
    /// `CORS_ALLOW_ORIGIN`; no CORS layer when unset
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN").filter(|s| !s.trim().is_empty()) {
            Some(origin) => Some(HeaderValue::from_str(origin.trim()).with_context(|| {
                format!("CORS_ALLOW_ORIGIN is not a valid header value: {origin}")
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            cors_allow_origin,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow_origin: None,
        }
    }
}
