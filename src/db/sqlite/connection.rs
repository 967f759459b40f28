//! SQLite database connection and schema management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::debug;

use crate::db::{Database, DbError, DbResult, UnitOfWork};

/// Table and index definitions, applied idempotently on startup.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS properties (
        id TEXT PRIMARY KEY NOT NULL,
        city TEXT NOT NULL,
        price REAL NOT NULL,
        rooms INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'available',
        description TEXT NOT NULL DEFAULT '',
        features TEXT NOT NULL DEFAULT ''
    )",
    "CREATE INDEX IF NOT EXISTS idx_properties_city ON properties (city)",
];

/// File-backed pools allow a few concurrent sessions; SQLite serializes writers.
const MAX_CONNECTIONS: u32 = 5;

/// SQLite database implementation.
///
/// Hands out one [`SqliteUnitOfWork`] per logical operation.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database from a connection URL such as `sqlite://data/real_estate.db`.
    ///
    /// The database file and its parent directory are created if missing.
    pub async fn open(url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .create_if_missing(true);

        if let Some(parent) = options.get_filename().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| DbError::Connection {
                message: format!("Failed to create {}: {}", parent.display(), e),
            })?;
        }

        debug!(url, "opening sqlite database");

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is pinned to a single connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type UnitOfWork = SqliteUnitOfWork;

    async fn init_schema(&self) -> DbResult<()> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn begin(&self) -> DbResult<SqliteUnitOfWork> {
        let tx = self.pool.begin().await.map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        Ok(SqliteUnitOfWork { tx })
    }
}

/// One SQLite transaction.
///
/// sqlx rolls the transaction back when it is dropped uncommitted, so the
/// connection always returns to the pool clean.
pub struct SqliteUnitOfWork {
    pub(crate) tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork for SqliteUnitOfWork {
    async fn commit(self) -> DbResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> DbResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
