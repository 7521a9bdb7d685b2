//! `GET /weatherforecast/private`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::auth::Authenticated;
use crate::identity::current_user_name;

/// The caller's name claim as plain text; 204 when the token carries none.
pub async fn private_handler(Authenticated(principal): Authenticated) -> Response {
    match current_user_name(&principal) {
        Some(name) => name.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
