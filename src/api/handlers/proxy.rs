//! `GET /weatherforecast/proxy`

use axum::extract::State;

use crate::api::AppState;
use crate::error_handling::ApiError;

/// The upstream forecast body, unmodified.
pub async fn proxy_handler(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.proxy.fetch_external_forecast().await?)
}
