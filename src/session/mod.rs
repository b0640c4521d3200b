//! Session module: who is currently using the app.
//!
//! This module provides:
//! - `SessionStore`: persistence of the current session across restarts
//! - `SessionContext`: the in-memory holder the application reads and
//!   mutates, with write-through persistence
//!
//! The session lives under its own storage key, independent of the
//! credential collection.

pub mod context;
pub mod store;

pub use context::SessionContext;
pub use store::SessionStore;
