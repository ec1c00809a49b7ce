//! Fan-out of push messages to every connected WebSocket client.
//!
//! A client joins the set by subscribing and leaves it by dropping its
//! [`Subscription`]. Nothing is queued for clients that join later, so a
//! message only reaches the subscribers that exist when it is sent.

use homedash_core::push::PushMessage;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Per-client buffer before a slow client starts skipping messages.
const CHANNEL_CAPACITY: usize = 100;

/// Handle on the connected-client set. Cheap to clone.
#[derive(Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<PushMessage>,
    closed: Arc<watch::Sender<bool>>,
}

/// One client's view of the broadcaster.
pub struct Subscription {
    pub messages: broadcast::Receiver<PushMessage>,
    pub closed: watch::Receiver<bool>,
}

impl Broadcaster {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        let (closed, _) = watch::channel(false);
        Self {
            tx,
            closed: Arc::new(closed),
        }
    }

    /// Send a message to all currently connected clients.
    ///
    /// Returns how many clients it was queued for. Sending with nobody
    /// connected is a no-op.
    pub fn send(&self, msg: PushMessage) -> usize {
        match self.tx.send(msg) {
            Ok(count) => {
                tracing::debug!(clients = count, "Broadcast push message");
                count
            }
            Err(_) => 0,
        }
    }

    /// Join the client set.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            messages: self.tx.subscribe(),
            closed: self.closed.subscribe(),
        }
    }

    /// Number of clients currently subscribed.
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Tell every connected client task to close its socket and exit.
    pub fn close(&self) {
        tracing::info!(clients = self.client_count(), "Closing push channel");
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
