//! Error type definitions.
//!
//! This module defines the error types used throughout the application, one
//! enum per concern, plus the request-level `ApiError` the HTTP layer maps to
//! status codes.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured header value cannot be sent over HTTP.
    #[error("Invalid header value for {0}")]
    InvalidHeaderError(&'static str),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The connection string is not a usable SQLite URL.
    #[error("Invalid database connection string: {0}")]
    InvalidConnectionString(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Insert of an id that is already stored.
    #[error("Url with id {0} already exists")]
    DuplicateKey(i64),
}

/// Errors raised while authenticating a bearer credential.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or not a bearer credential.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token failed validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// No signing secret is configured, so no token can be trusted.
    #[error("Bearer authentication is not configured")]
    NotConfigured,
}

/// Errors raised by the upstream weather call.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The configured base URL cannot be combined with the request path.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection, timeout or body read failure.
    #[error("Upstream request failed: {0}")]
    Request(#[from] ReqwestError),
}

/// Request-level failures, each mapping to one HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested record does not exist (404).
    #[error("Not found")]
    NotFound,

    /// Missing or invalid credential on a protected route (401).
    #[error("Unauthenticated: {0}")]
    Unauthenticated(#[from] AuthError),

    /// The upstream call could not be completed (502).
    #[error("Upstream failure: {0}")]
    UpstreamFailure(#[from] UpstreamError),

    /// Unexpected store failure (500).
    #[error("Database failure: {0}")]
    Database(#[from] DatabaseError),
}
