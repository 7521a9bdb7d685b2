//! Shared state handed to every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::forecast::RandomSource;
use crate::identity::Authenticator;
use crate::proxy::ProxyClient;

/// Capabilities the API layer delegates to.
///
/// Built once at startup; cloning is cheap (pool and `Arc`s only).
#[derive(Clone)]
pub struct AppState {
    /// URL record store
    pub pool: SqlitePool,
    /// Source of forecast draws
    pub random: Arc<dyn RandomSource>,
    /// Upstream weather client
    pub proxy: Arc<ProxyClient>,
    /// Bearer-token validator for protected routes
    pub authenticator: Arc<dyn Authenticator>,
    /// Pretty-print JSON bodies
    pub indent_json: bool,
}
