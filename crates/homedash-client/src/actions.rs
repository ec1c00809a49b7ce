//! Action creators.
//!
//! Each creator issues exactly one request and then dispatches the records
//! describing its outcome. When a call dispatches a notification, it always
//! comes before the record that changes the app list.
//!
//! Only [`Actions::get_apps`] reports failure to the store. Failed pin, add,
//! delete and update calls are logged and dispatch nothing.

use homedash_core::app::model::{App, AppUpdate, NewApp};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::action::{Action, Notification};
use crate::api::ApiClient;

/// Something that accepts action records in order.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl Dispatch for mpsc::UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        if self.send(action).is_err() {
            debug!("Store is gone, action dropped");
        }
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

/// Action creators bound to an API client and a dispatcher.
#[derive(Clone)]
pub struct Actions<D> {
    api: ApiClient,
    dispatcher: D,
}

impl<D: Dispatch> Actions<D> {
    pub fn new(api: ApiClient, dispatcher: D) -> Self {
        Self { api, dispatcher }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    fn dispatch(&self, action: Action) {
        debug!(action = action.kind(), "Dispatching");
        self.dispatcher.dispatch(action);
    }

    fn notify(&self, message: String) {
        self.dispatch(Action::CreateNotification(Notification::success(message)));
    }

    /// Fetch the full app list.
    pub async fn get_apps(&self) {
        self.dispatch(Action::GetApps);

        match self.api.get_apps().await {
            Ok(apps) => self.dispatch(Action::GetAppsSuccess(apps)),
            Err(e) => {
                error!(error = %e, "Failed to fetch apps");
                self.dispatch(Action::GetAppsError(e.message()));
            }
        }
    }

    /// Flip an app's pin state. The notification uses the name and pin state
    /// the app had before the call.
    pub async fn pin_app(&self, app: &App) {
        match self.api.set_pinned(app.id, !app.is_pinned).await {
            Ok(updated) => {
                let message = if app.is_pinned {
                    format!("App {} unpinned from Homescreen", app.name)
                } else {
                    format!("App {} pinned to Homescreen", app.name)
                };
                self.notify(message);
                self.dispatch(Action::PinApp(updated));
            }
            Err(e) => error!(id = app.id, error = %e, "Failed to pin app"),
        }
    }

    /// Create an app.
    pub async fn add_app(&self, form: &NewApp) {
        match self.api.create_app(form).await {
            Ok(created) => {
                self.notify(format!("App {} created", created.name));
                self.dispatch(Action::AddAppSuccess(created));
            }
            Err(e) => error!(name = %form.name, error = %e, "Failed to add app"),
        }
    }

    /// Delete an app.
    pub async fn delete_app(&self, id: i64) {
        match self.api.delete_app(id).await {
            Ok(()) => {
                self.notify("App deleted".to_string());
                self.dispatch(Action::DeleteApp(id));
            }
            Err(e) => error!(id, error = %e, "Failed to delete app"),
        }
    }

    /// Replace an app's fields.
    pub async fn update_app(&self, id: i64, form: &NewApp) {
        let update = AppUpdate::from(form.clone());
        match self.api.update_app(id, &update).await {
            Ok(updated) => {
                self.notify(format!("App {} updated", updated.name));
                self.dispatch(Action::UpdateApp(updated));
            }
            Err(e) => error!(id, error = %e, "Failed to update app"),
        }
    }
}
