//! Homedash Core Library
//!
//! Domain models and operations for the dashboard's app shortcuts.

pub mod app;
pub mod envelope;
pub mod error;
pub mod push;

pub use error::{DashError, DashResult};
