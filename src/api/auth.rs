//! Request extractor enforcing bearer authentication.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::AppState;
use crate::error_handling::{ApiError, AuthError};
use crate::identity::{bearer_token, Principal};

/// A request whose bearer token passed validation.
///
/// Taking this extractor makes a handler protected: requests without a valid
/// credential are rejected with 401 before the handler runs.
pub struct Authenticated(pub Principal);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;
        let token = bearer_token(header)?;
        let principal = state.authenticator.authenticate(token)?;
        Ok(Authenticated(principal))
    }
}
