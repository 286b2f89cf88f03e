//! # Database Handle
//!
//! Opens the SQLite pool the product store runs on.
//!
//! ## Connection Setup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbConfig ─────► Database::new ─────► SqlitePool ─────► migrations     │
//! │                                                                         │
//! │  File   : WAL journal, synchronous=NORMAL, busy_timeout,                │
//! │           up to max_connections                                         │
//! │  Memory : one connection that is never reaped (the database lives       │
//! │           and dies with it)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock adjustments are single statements, so concurrent requests only
//! ever wait on SQLite's write lock; `busy_timeout` bounds that wait.

use std::path::PathBuf;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Where the products table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    /// Private to one `Database`; gone when it is dropped.
    Memory,
}

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./data/inventory.db")
///     .max_connections(5)
///     .run_migrations(true);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub location: DbLocation,

    /// Pool size for file databases (default 5). Memory databases always
    /// use a single connection.
    pub max_connections: u32,

    /// How long a request waits for a free connection (default 10s).
    pub acquire_timeout: Duration,

    /// How long a writer waits on SQLite's lock (default 5s).
    pub busy_timeout: Duration,

    /// Apply embedded migrations on open (default true).
    pub run_migrations: bool,
}

impl DbConfig {
    /// A file database at `path`, created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            location: DbLocation::File(path.into()),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// A fresh in-memory database (tests, throwaway runs).
    pub fn in_memory() -> Self {
        DbConfig {
            location: DbLocation::Memory,
            max_connections: 1,
            ..DbConfig::new(PathBuf::new())
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        let options = SqliteConnectOptions::new().busy_timeout(self.busy_timeout);

        match &self.location {
            DbLocation::File(path) => options
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            DbLocation::Memory => options.in_memory(true),
        }
    }

    fn pool_options(&self) -> SqlitePoolOptions {
        let options = SqlitePoolOptions::new().acquire_timeout(self.acquire_timeout);

        match self.location {
            DbLocation::File(_) => options.max_connections(self.max_connections),
            // Dropping the only connection would drop the database with it
            DbLocation::Memory => options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Open connection pool. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and, unless disabled, applies pending migrations.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(location = ?config.location, "Opening database");

        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::Unavailable(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Database pool ready");

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Applies pending migrations. Safe to call repeatedly.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The SQLite-backed product store sharing this pool.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes every connection; later queries fail with `DbError::Unavailable`.
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }

    pub async fn health_check(&self) -> bool {
        self.products().ping().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(migrations::migration_status(db.pool()).await.unwrap(), (1, 1));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let a = Database::new(DbConfig::in_memory()).await.unwrap();
        let b = Database::new(DbConfig::in_memory()).await.unwrap();

        a.products()
            .insert(&sellhub_core::NewProduct::new("Product 1", 5))
            .await
            .unwrap();

        assert_eq!(a.products().count().await.unwrap(), 1);
        assert_eq!(b.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_pool_is_unhealthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        assert!(matches!(db.products().count().await, Err(DbError::Unavailable(_))));
    }

    #[test]
    fn test_config_defaults() {
        let config = DbConfig::new("./data/inventory.db").max_connections(8);

        assert_eq!(config.location, DbLocation::File(PathBuf::from("./data/inventory.db")));
        assert_eq!(config.max_connections, 8);
        assert!(config.run_migrations);

        let memory = DbConfig::in_memory().run_migrations(false);
        assert_eq!(memory.location, DbLocation::Memory);
        assert!(!memory.run_migrations);
    }
}
