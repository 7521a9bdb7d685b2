//! Configuration constants.
//!
//! Defaults for CLI options plus the fixed values of the forecast and proxy
//! contracts.

// Server and storage defaults
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_CONNECTION_STRING: &str = "sqlite://forecast_api.db";

// Upstream weather API
/// Base URL of the RapidAPI OpenWeatherMap gateway
pub const DEFAULT_OPEN_WEATHER_URL: &str = "https://community-open-weather-map.p.rapidapi.com";
/// Request timeout for the upstream call, matching the usual HTTP client default of 100s
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 100;
/// Path requested on the upstream; replaces any path on the configured base URL
pub const UPSTREAM_WEATHER_PATH: &str = "/weather";
/// Fixed query sent upstream: one city, metric units
pub const UPSTREAM_WEATHER_QUERY: &[(&str, &str)] = &[("q", "Gandia,es"), ("units", "metric")];
pub const HEADER_RAPIDAPI_HOST: &str = "x-rapidapi-host";
pub const HEADER_RAPIDAPI_KEY: &str = "x-rapidapi-key";

// Authentication
/// Claim read as the caller's display name
pub const DEFAULT_NAME_CLAIM: &str = "name";

// Forecast generation
pub const FORECAST_DAYS: u64 = 5;
/// Lower bound (inclusive) of generated temperatures in Celsius
pub const TEMPERATURE_MIN_C: i32 = -20;
/// Upper bound (exclusive) of generated temperatures in Celsius
pub const TEMPERATURE_MAX_C: i32 = 55;
