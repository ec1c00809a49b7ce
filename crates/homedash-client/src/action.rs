//! Action records: what happened, as seen by the reducers.

use homedash_core::app::model::App;

/// A user-facing message shown once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }
}

/// One variant per lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A full app list request started.
    GetApps,
    /// The app list arrived.
    GetAppsSuccess(Vec<App>),
    /// The app list request failed.
    GetAppsError(String),
    /// An app's pin state changed on the server.
    PinApp(App),
    /// The server created an app.
    AddAppSuccess(App),
    /// The server deleted the app with this id.
    DeleteApp(i64),
    /// The server replaced an app's fields.
    UpdateApp(App),
    /// Show a notification.
    CreateNotification(Notification),
    /// Discard the notification with this id.
    ClearNotification(u64),
}

impl Action {
    /// Stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GetApps => "get_apps",
            Self::GetAppsSuccess(_) => "get_apps_success",
            Self::GetAppsError(_) => "get_apps_error",
            Self::PinApp(_) => "pin_app",
            Self::AddAppSuccess(_) => "add_app_success",
            Self::DeleteApp(_) => "delete_app",
            Self::UpdateApp(_) => "update_app",
            Self::CreateNotification(_) => "create_notification",
            Self::ClearNotification(_) => "clear_notification",
        }
    }
}
