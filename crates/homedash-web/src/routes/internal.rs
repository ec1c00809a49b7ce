//! Internal notification endpoints.

use axum::{extract::State, http::StatusCode, Json};
use homedash_core::push::PushMessage;
use tracing::{debug, info};

use crate::state::AppState;

/// Receive a notification and broadcast to all WebSocket clients.
pub async fn notify(State(state): State<AppState>, Json(msg): Json<PushMessage>) -> StatusCode {
    info!(?msg, "Received internal notification, broadcasting to WebSocket clients");
    debug!(
        clients = state.broadcaster.client_count(),
        "Active WebSocket receivers"
    );
    state.broadcast(msg);
    StatusCode::OK
}
