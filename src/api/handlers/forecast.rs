//! `GET /weatherforecast`

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::AppState;
use crate::forecast::{forecasts_to_json, generate_forecast};

/// Five synthetic forecasts starting tomorrow, as a JSON array.
pub async fn forecast_handler(State(state): State<AppState>) -> Response {
    let today = chrono::Local::now().date_naive();
    let forecasts = generate_forecast(today, state.random.as_ref());

    let json = match forecasts_to_json(&forecasts, state.indent_json) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize forecasts: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize forecasts: {}", e),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response()
}
