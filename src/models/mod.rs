//! Data models for accounts and sessions.
//!
//! - `Account`: a registered credential record, as persisted
//! - `Session`: the password-free projection of an account
//! - `SessionUpdate`: partial merge payload used by profile edits

pub mod account;
pub mod session;

pub use account::Account;
pub use session::{Session, SessionUpdate};
