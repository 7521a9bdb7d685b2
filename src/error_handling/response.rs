//! HTTP mapping for `ApiError`.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::types::ApiError;

impl ApiError {
    /// Status code returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::Unauthenticated(e) => {
                log::debug!("Rejected request: {}", e);
                (status, [(header::WWW_AUTHENTICATE, "Bearer")]).into_response()
            }
            ApiError::UpstreamFailure(e) => {
                log::error!("Proxy request failed: {}", e);
                (status, "Upstream weather service unavailable").into_response()
            }
            ApiError::Database(e) => {
                log::error!("Database error while serving request: {}", e);
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{AuthError, DatabaseError};

    #[test]
    fn test_not_found_maps_to_404_without_body_headers() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_unauthenticated_maps_to_401_with_challenge() {
        let response = ApiError::from(AuthError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_database_failure_maps_to_500() {
        let err = ApiError::from(DatabaseError::DuplicateKey(1));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_failure_is_server_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = ApiError::from(crate::error_handling::UpstreamError::from(parse_err));
        assert!(err.status_code().is_server_error());
    }
}
