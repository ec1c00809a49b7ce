//! Application state.

use homedash_core::push::PushMessage;
use homedash_core::DashResult;
use homedash_db::DbPool;
use std::sync::Arc;

use crate::broadcast::Broadcaster;
use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub broadcaster: Broadcaster,
}

impl AppState {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            db,
            broadcaster: Broadcaster::new(),
        }
    }

    /// Broadcast a message to all WebSocket clients.
    pub fn broadcast(&self, msg: PushMessage) {
        self.broadcaster.send(msg);
    }

    /// Run a database operation on the blocking pool.
    pub async fn db_call<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&DbPool) -> DashResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| ApiError::Internal(format!("DB task panicked: {}", e)))?
            .map_err(ApiError::from)
    }
}
