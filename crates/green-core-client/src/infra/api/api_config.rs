// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::time::Duration;

use url::Url;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {name}.")]
    MissingVariable { name: &'static str },
    #[error("Invalid URL in {name}: {error}")]
    InvalidUrl {
        name: &'static str,
        error: url::ParseError,
    },
    #[error("{url} can't be used as a base URL.")]
    UnsupportedUrl { url: String },
}

/// Where and how to reach the REST backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// The origin of the API. Endpoint paths like `api/v1/...` are appended to it.
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(30),
        })
    }

    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|error| ConfigError::InvalidUrl {
            name: API_BASE_URL_VAR,
            error,
        })?;
        Self::new(url)
    }

    /// Reads the configuration from the `API_BASE_URL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(API_BASE_URL_VAR).map_err(|_| ConfigError::MissingVariable {
            name: API_BASE_URL_VAR,
        })?;
        Self::parse(&base_url)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
