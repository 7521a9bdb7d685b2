//! Configuration types and CLI options.
//!
//! Every setting is a command-line flag with an environment-variable fallback.
//! Environment names follow the `Section__Key` convention so values such as
//! `ConnectionStrings:Sql` map to `CONNECTIONSTRINGS__SQL`.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CONNECTION_STRING, DEFAULT_NAME_CLAIM, DEFAULT_OPEN_WEATHER_URL,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Process-wide configuration, loaded once at startup and never mutated.
///
/// # Examples
///
/// ```no_run
/// use forecast_api::Config;
///
/// let config = Config {
///     connection_string: "sqlite://forecast.db".to_string(),
///     open_weather_host: "community-open-weather-map.p.rapidapi.com".to_string(),
///     open_weather_key: "secret".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "forecast_api", version, about)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "FORECAST_API_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: SocketAddr,

    /// SQLite connection string for the URL store
    #[arg(long, env = "CONNECTIONSTRINGS__SQL", default_value = DEFAULT_CONNECTION_STRING)]
    pub connection_string: String,

    /// Base URL of the upstream weather API
    #[arg(long, env = "OPENWEATHERAPI__URL", default_value = DEFAULT_OPEN_WEATHER_URL)]
    pub open_weather_url: String,

    /// Value sent in the `x-rapidapi-host` header
    #[arg(long, env = "OPENWEATHERAPI__HOST", default_value = "")]
    pub open_weather_host: String,

    /// Value sent in the `x-rapidapi-key` header
    #[arg(long, env = "OPENWEATHERAPI__KEY", default_value = "", hide_env_values = true)]
    pub open_weather_key: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "OPENWEATHERAPI__TIMEOUTSECONDS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    pub upstream_timeout_seconds: u64,

    /// HS256 secret used to validate bearer tokens (all tokens rejected when unset)
    #[arg(long, env = "JWT__SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Required `iss` claim
    #[arg(long, env = "JWT__ISSUER")]
    pub jwt_issuer: Option<String>,

    /// Required `aud` claim
    #[arg(long, env = "JWT__AUDIENCE")]
    pub jwt_audience: Option<String>,

    /// Claim holding the caller's name
    #[arg(long, env = "JWT__NAMECLAIM", default_value = DEFAULT_NAME_CLAIM)]
    pub name_claim: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pretty-print JSON responses
    #[arg(long, env = "FORECAST_API_INDENT_JSON")]
    pub indent_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
            open_weather_url: DEFAULT_OPEN_WEATHER_URL.to_string(),
            open_weather_host: String::new(),
            open_weather_key: String::new(),
            upstream_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            jwt_secret: None,
            jwt_issuer: None,
            jwt_audience: None,
            name_claim: DEFAULT_NAME_CLAIM.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            indent_json: false,
        }
    }
}
