// Client configuration: where the backend lives

use std::env;

/// Base URL used when neither the environment nor the caller provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_URL_ENV_VAR: &str = "TRAVELOG_API_URL";

/// Configuration for [`TravelogClient`](crate::TravelogClient).
///
/// All request paths are resolved relative to `base_url`; a trailing slash
/// is tolerated and stripped when the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `TRAVELOG_API_URL`, falling back to the local
    /// development address when the variable is unset.
    pub fn from_env() -> Self {
        env::var(BASE_URL_ENV_VAR)
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
