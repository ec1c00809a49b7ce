//! Database query implementations.

pub mod apps;
