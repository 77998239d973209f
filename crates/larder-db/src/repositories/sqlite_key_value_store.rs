//! `SQLite` implementation of the `KeyValueStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use larder_core::{KeyValueStore, RepositoryError};

/// `SQLite` implementation of the `KeyValueStore` trait.
///
/// Each slot is one row; a write is a single `INSERT OR REPLACE`, so a
/// reader never observes a partially written value.
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Create a new `SQLite` slot store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure the slots table exists.
    ///
    /// `setup_database` already does this; call it when building a store
    /// over a pool from elsewhere.
    pub async fn ensure_table(&self) -> Result<(), RepositoryError> {
        crate::setup::create_schema(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query("INSERT OR REPLACE INTO slots (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(&updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM slots WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}
