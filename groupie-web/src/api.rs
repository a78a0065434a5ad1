//! API client wiring for the web app

use groupie_core::config::{self, ApiConfig, ConfigError};
use groupie_core::ApiClient;

/// Base URL baked in at build time, e.g. `GROUPIE_API_URL=https://api.example dx build`.
const API_URL_OVERRIDE: Option<&str> = option_env!("GROUPIE_API_URL");

/// Install the process-wide API configuration from the build-time override.
///
/// Leaves the default in place when the override is invalid.
pub fn install_config() -> Result<(), ConfigError> {
    config::install(ApiConfig::from_override(API_URL_OVERRIDE)?)
}

/// Client for the installed base URL. Provided to pages through context.
pub fn client() -> ApiClient {
    ApiClient::from_config(config::current())
}
