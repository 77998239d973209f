//! `SQLite` storage for larder.
//!
//! Implements the [`larder_core::KeyValueStore`] port over a single
//! `slots(key, value, updated_at)` table and provides the factory that
//! adapters use to compose an `AppCore` on top of it.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::SqliteKeyValueStore;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

