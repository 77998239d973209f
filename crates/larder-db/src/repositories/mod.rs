//! Storage implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod sqlite_key_value_store;

pub use sqlite_key_value_store::SqliteKeyValueStore;
