//! Caller identity.
//!
//! This module provides:
//! - `Principal`, the validated caller as a map of claims
//! - The `Authenticator` seam plus a JWT bearer implementation
//! - `current_user_name`, the accessor behind the private endpoint

mod jwt;
mod principal;

use crate::error_handling::AuthError;

pub use jwt::JwtAuthenticator;
pub use principal::{current_user_name, Principal};

/// Turns a bearer credential into a validated principal.
pub trait Authenticator: Send + Sync {
    /// Validates `token` (the part after `Bearer `).
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Extracts the credential from an `Authorization` header value.
///
/// The scheme is matched case-insensitively; anything other than a non-empty
/// bearer credential yields `AuthError::MissingToken`.
pub fn bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header_value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingToken)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}
