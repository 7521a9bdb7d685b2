//! HTTP client initialization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{Config, HEADER_RAPIDAPI_HOST, HEADER_RAPIDAPI_KEY};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for upstream weather calls.
///
/// Creates a `reqwest::Client` configured with:
/// - `x-rapidapi-host` and `x-rapidapi-key` sent on every request
/// - Request timeout from `upstream_timeout_seconds`
///
/// The client is built once and shared; reqwest pools connections internally.
///
/// # Errors
///
/// Returns `InitializationError::InvalidHeaderError` if a configured header value
/// contains characters not allowed in HTTP headers, or `HttpClientError` if the
/// client cannot be built.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    let host = HeaderValue::from_str(&config.open_weather_host)
        .map_err(|_| InitializationError::InvalidHeaderError(HEADER_RAPIDAPI_HOST))?;
    let mut key = HeaderValue::from_str(&config.open_weather_key)
        .map_err(|_| InitializationError::InvalidHeaderError(HEADER_RAPIDAPI_KEY))?;
    key.set_sensitive(true);
    headers.insert(HEADER_RAPIDAPI_HOST, host);
    headers.insert(HEADER_RAPIDAPI_KEY, key);

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.upstream_timeout_seconds))
        .build()?;
    Ok(client)
}
