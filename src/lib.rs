//! forecast_api library: a small weather HTTP API
//!
//! This library serves four endpoints: synthetic forecasts, the authenticated
//! caller's name, a SQLite-backed URL lookup, and a pass-through call to a
//! third-party weather API.
//!
//! # Example
//!
//! ```no_run
//! use forecast_api::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     connection_string: "sqlite://forecast.db".to_string(),
//!     jwt_secret: Some("change-me".to_string()),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod api;
#[allow(missing_docs)]
pub mod config;
pub mod error_handling;
#[allow(missing_docs)]
pub mod forecast;
#[allow(missing_docs)]
pub mod identity;
pub mod initialization;
#[allow(missing_docs)]
pub mod proxy;
#[allow(missing_docs)]
pub mod storage;

// Re-export public API
pub use api::{build_router, start_server, AppState};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ApiError, DatabaseError};
pub use forecast::{generate_forecast, RandomSource, ThreadRandom, WeatherForecast};
pub use identity::{current_user_name, Authenticator, JwtAuthenticator, Principal};
pub use proxy::{HttpFetcher, ProxyClient};
pub use server::{build_state, run_server};
pub use storage::{clear_all, find_url, init_db_pool, insert_url, run_migrations, UrlRecord};

// Bootstrapping: wires configuration into every component and starts serving
mod server {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;

    use crate::api::{start_server, AppState};
    use crate::config::Config;
    use crate::forecast::ThreadRandom;
    use crate::identity::JwtAuthenticator;
    use crate::initialization::init_client;
    use crate::proxy::ProxyClient;
    use crate::storage::{init_db_pool, run_migrations};

    /// Builds the shared handler state from configuration.
    ///
    /// Opens the store and applies migrations, builds the upstream HTTP client,
    /// and sets up bearer-token validation.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The database cannot be opened or migrated
    /// - The upstream header values or base URL are invalid
    pub async fn build_state(config: &Config) -> Result<AppState> {
        let pool = init_db_pool(&config.connection_string)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let proxy = ProxyClient::new(Arc::new(client), &config.open_weather_url)
            .context("Failed to configure upstream weather API")?;
        info!("Proxying weather requests to {}", proxy.endpoint());

        Ok(AppState {
            pool,
            random: Arc::new(ThreadRandom),
            proxy: Arc::new(proxy),
            authenticator: Arc::new(JwtAuthenticator::from_config(config)),
            indent_json: config.indent_json,
        })
    }

    /// Runs the API server with the provided configuration until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if startup fails (see [`build_state`]) or the listen
    /// address cannot be bound.
    pub async fn run_server(config: Config) -> Result<()> {
        let state = build_state(&config).await?;
        start_server(config.bind, state).await
    }
}
