//! HTTP version-check client.
//!
//! Issues a single GET against the version-check API and reads
//! `offers[0].current` from the response. API 1.6 answers with a
//! PHP-serialized array and 1.7 with JSON; both are accepted.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::{CheckError, Result};

use super::VersionSource;

/// User agent sent with the version-check request.
const USER_AGENT: &str = concat!("wp-version-check/", env!("CARGO_PKG_VERSION"));

/// Body of a version-check response. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
struct VersionCheckResponse {
    #[serde(default)]
    offers: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
struct Offer {
    #[serde(default)]
    current: Option<String>,
}

/// Fetches the latest version over HTTP/HTTPS.
pub struct HttpVersionSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpVersionSource {
    /// Create a client for `url` with the given request timeout.
    ///
    /// Redirects are followed; any status of 400 or above is a failure.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CheckError::Network {
                url: url.to_string(),
                message: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            url: url.to_string(),
            timeout,
        })
    }

    /// Create a client from the run configuration.
    pub fn from_config(config: &CheckConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.timeout)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn network_error(&self, message: impl Into<String>) -> CheckError {
        CheckError::Network {
            url: self.url.clone(),
            message: message.into(),
        }
    }

    fn parse_error(&self, message: impl Into<String>) -> CheckError {
        CheckError::Parse {
            url: self.url.clone(),
            message: message.into(),
        }
    }
}

impl VersionSource for HttpVersionSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn latest_version(&self) -> Result<String> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.network_error(describe_request_error(&e)))?;

        let status = response.status();
        debug!("{} answered {}", response.url(), status);
        if status.as_u16() >= 400 {
            return Err(self.network_error(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| self.network_error(describe_request_error(&e)))?;

        parse_latest_version(&body).map_err(|message| self.parse_error(message))
    }
}

/// Pull `offers[0].current` out of a version-check response body.
fn parse_latest_version(body: &str) -> std::result::Result<String, String> {
    let response = decode_response(body.trim())?;

    let offer = response
        .offers
        .into_iter()
        .next()
        .ok_or_else(|| "no offers in response".to_string())?;

    match offer.current {
        Some(current) if !current.is_empty() => Ok(current),
        _ => Err("first offer has no current version".to_string()),
    }
}

fn decode_response(body: &str) -> std::result::Result<VersionCheckResponse, String> {
    if body.starts_with('{') {
        serde_json::from_str(body).map_err(|e| format!("invalid JSON: {}", e))
    } else {
        serde_php::from_bytes(body.as_bytes())
            .map_err(|e| format!("invalid serialized PHP: {}", e))
    }
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    }
}
