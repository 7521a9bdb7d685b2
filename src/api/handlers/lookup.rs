//! `GET /weatherforecast/url?id={id}`

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::api::AppState;
use crate::error_handling::ApiError;
use crate::storage::find_url;

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    /// Absent ids look up `0`; ids that are not a 32-bit integer are rejected
    /// with 400 by `Query`
    pub id: Option<i32>,
}

/// The stored address for `id` as plain text, or an empty 404.
pub async fn url_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<String, ApiError> {
    let id = i64::from(query.id.unwrap_or_default());
    match find_url(&state.pool, id).await? {
        Some(record) => Ok(record.address),
        None => {
            log::debug!("No url stored for id {}", id);
            Err(ApiError::NotFound)
        }
    }
}
