//! Push channel listener.
//!
//! Connects once and reports every decoded [`PushMessage`]. There is no
//! reconnection: when the socket closes, [`PushListener::listen`] returns and
//! the caller decides what to do next.

use futures::StreamExt;
use homedash_core::push::PushMessage;
use std::future::Future;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::actions::{Actions, Dispatch};
use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

pub struct PushListener {
    url: String,
}

impl PushListener {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Listen on the push endpoint of the server `api` talks to.
    pub fn for_api(api: &ApiClient) -> Self {
        Self::new(api.ws_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connect and hand each message to `on_message` until the server closes
    /// the socket. Frames that are not push messages are logged and skipped.
    pub async fn listen<F, Fut>(&self, mut on_message: F) -> ClientResult<()>
    where
        F: FnMut(PushMessage) -> Fut,
        Fut: Future<Output = ()>,
    {
        let (ws_stream, _response) = tokio_tungstenite::connect_async(self.url.as_str())
            .await
            .map_err(|e| ClientError::Network(format!("WebSocket connect failed: {}", e)))?;
        info!(url = %self.url, "Connected to push channel");

        let (_write, mut read) = ws_stream.split();

        while let Some(frame) = read.next().await {
            match frame {
                Ok(Message::Text(text)) => match PushMessage::from_json(&text) {
                    Ok(msg) => {
                        debug!(?msg, "Push message received");
                        on_message(msg).await;
                    }
                    Err(e) => warn!(payload = %text, error = %e, "Ignoring unknown push payload"),
                },
                Ok(Message::Close(_)) => {
                    debug!("Push channel closed by server");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(ClientError::Network(format!("WebSocket error: {}", e)));
                }
            }
        }

        info!(url = %self.url, "Disconnected from push channel");
        Ok(())
    }
}

/// Bring local state in line with a push message.
///
/// Deletions are applied directly; anything else triggers a full re-fetch,
/// since the message only names the affected id.
pub async fn apply_push<D: Dispatch>(msg: &PushMessage, actions: &Actions<D>) {
    match msg {
        PushMessage::AppDeleted { id } => actions.dispatcher().dispatch(Action::DeleteApp(*id)),
        PushMessage::AppCreated { .. } | PushMessage::AppUpdated { .. } | PushMessage::AppsRefresh => {
            actions.get_apps().await
        }
    }
}
