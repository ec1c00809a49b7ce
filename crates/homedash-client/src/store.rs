//! Reducers and the store that applies them.
//!
//! Reducers are pure: `(slice, &Action) -> slice`. Each slice has its own
//! reducer and never reads another slice.

use homedash_core::app::model::App;
use tokio::sync::{mpsc, watch};

use crate::action::{Action, Notification};
use crate::actions::Dispatch;

/// App list plus request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSlice {
    pub apps: Vec<App>,
    /// True between `GetApps` and the matching success or error.
    pub loading: bool,
    /// Message of the last failed fetch, cleared when a new fetch starts.
    pub error: Option<String>,
}

/// A notification waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedNotification {
    pub id: u64,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlice {
    pub notifications: Vec<QueuedNotification>,
    next_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalState {
    pub app: AppSlice,
    pub notification: NotificationSlice,
}

fn replace_by_id(apps: &mut [App], record: App) {
    if let Some(slot) = apps.iter_mut().find(|app| app.id == record.id) {
        *slot = record;
    }
}

pub fn app_reducer(mut state: AppSlice, action: &Action) -> AppSlice {
    match action {
        Action::GetApps => {
            state.loading = true;
            state.error = None;
        }
        Action::GetAppsSuccess(apps) => {
            state.apps = apps.clone();
            state.loading = false;
        }
        Action::GetAppsError(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }
        Action::PinApp(app) | Action::UpdateApp(app) => replace_by_id(&mut state.apps, app.clone()),
        // Appends even when the id is already present.
        Action::AddAppSuccess(app) => state.apps.push(app.clone()),
        Action::DeleteApp(id) => state.apps.retain(|app| app.id != *id),
        Action::CreateNotification(_) | Action::ClearNotification(_) => {}
    }
    state
}

pub fn notification_reducer(mut state: NotificationSlice, action: &Action) -> NotificationSlice {
    match action {
        Action::CreateNotification(Notification { title, message }) => {
            state.notifications.push(QueuedNotification {
                id: state.next_id,
                title: title.clone(),
                message: message.clone(),
            });
            state.next_id += 1;
        }
        Action::ClearNotification(id) => state.notifications.retain(|n| n.id != *id),
        _ => {}
    }
    state
}

pub fn reduce(state: GlobalState, action: &Action) -> GlobalState {
    GlobalState {
        app: app_reducer(state.app, action),
        notification: notification_reducer(state.notification, action),
    }
}

/// Owns the current [`GlobalState`] and publishes a snapshot after every action.
pub struct Store {
    state: watch::Sender<GlobalState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(GlobalState::default())
    }

    pub fn with_state(state: GlobalState) -> Self {
        let (state, _) = watch::channel(state);
        Self { state }
    }

    /// A copy of the current state.
    pub fn state(&self) -> GlobalState {
        self.state.borrow().clone()
    }

    /// Receive a new snapshot after each applied action.
    pub fn subscribe(&self) -> watch::Receiver<GlobalState> {
        self.state.subscribe()
    }

    pub fn apply(&self, action: &Action) {
        self.state
            .send_modify(|state| *state = reduce(std::mem::take(state), action));
    }

    /// Apply actions from `rx` in arrival order until every sender is dropped.
    pub async fn run(&self, mut rx: mpsc::UnboundedReceiver<Action>) -> GlobalState {
        while let Some(action) = rx.recv().await {
            self.apply(&action);
        }
        self.state()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        self.apply(&action);
    }
}
