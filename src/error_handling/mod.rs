//! Error handling.
//!
//! This module provides:
//! - Error type definitions per concern (initialization, database, auth, upstream)
//! - `ApiError`, the request-level taxonomy, and its HTTP status mapping
//!
//! Request errors map to statuses as follows:
//! - **NotFound**: 404, empty body
//! - **Unauthenticated**: 401 with a `WWW-Authenticate: Bearer` challenge
//! - **UpstreamFailure**: 502
//! - **Database**: 500

mod response;
mod types;

// Re-export public API
pub use types::{ApiError, AuthError, DatabaseError, InitializationError, UpstreamError};
