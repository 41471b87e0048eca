//! Types for the music microservice API.

use serde::Deserialize;
use std::time::Duration;

/// Default number of results requested per search
pub const DEFAULT_SEARCH_LIMIT: u32 = 15;

/// Configuration for connecting to the music microservice.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the service (e.g., "https://music-api.example.com")
    pub url: String,
    /// Whole-request timeout; downloads of long tracks need a generous one
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl ServiceConfig {
    /// Create a config with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON body of `/download` when the service hands out a streaming URL
/// instead of the audio itself.
#[derive(Debug, Deserialize)]
pub(crate) struct StreamUrlResponse {
    pub url: String,
}
