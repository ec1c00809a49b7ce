//! Route handlers.

pub mod apps;
pub mod internal;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
