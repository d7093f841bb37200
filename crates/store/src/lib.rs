//! Durable preference storage.
//!
//! One SQLite table, one row per (key, scope). Writes are validated
//! against the schema up front, persisted as single-row upserts, and
//! resolution walks user override → global value → schema default.

mod cache;
mod error;
mod scope;
mod store;

pub use error::*;
pub use scope::*;
pub use store::*;
