//! Homedash Client
//!
//! Talks to the dashboard API and keeps a local, reducer-driven copy of its
//! state. Action creators issue one request each and describe the outcome as
//! [`Action`] records; the [`Store`] folds those records into [`GlobalState`].

pub mod action;
pub mod actions;
pub mod api;
pub mod error;
pub mod push;
pub mod store;

pub use action::{Action, Notification};
pub use actions::{Actions, Dispatch};
pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
pub use push::{apply_push, PushListener};
pub use store::{AppSlice, GlobalState, NotificationSlice, Store};
