//! # Storage Errors
//!
//! ```text
//! sqlx::Error ──► DbError ──► ApiError::Internal (detail logged, 500)
//!                    ▲
//! NewProduct rules ──┘ InvalidData (seeding only)
//! ```
//!
//! A refused stock adjustment is not an error at this level; stores report it
//! as [`StockAdjustment::Rejected`](crate::StockAdjustment::Rejected).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The schema refused a write: duplicate id or a negative count slipping
    /// past the adjustment guard.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Opening the database or using a closed pool.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    /// No connection became free within the acquire timeout.
    #[error("Timed out waiting for a database connection")]
    Busy,

    /// A product rejected before it reached the database.
    #[error("Invalid product: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // SQLite reports "UNIQUE constraint failed: ..." and
            // "CHECK constraint failed: ..."
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                if msg.contains("constraint failed") {
                    DbError::Constraint(msg.to_string())
                } else {
                    DbError::Query(msg.to_string())
                }
            }
            sqlx::Error::PoolTimedOut => DbError::Busy,
            sqlx::Error::PoolClosed => DbError::Unavailable("pool is closed".to_string()),
            sqlx::Error::Io(e) => DbError::Unavailable(e.to_string()),
            other => DbError::Query(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::Migration(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_classified() {
        assert!(matches!(DbError::from(sqlx::Error::PoolTimedOut), DbError::Busy));
        assert!(matches!(DbError::from(sqlx::Error::PoolClosed), DbError::Unavailable(_)));
        assert!(matches!(DbError::from(sqlx::Error::RowNotFound), DbError::Query(_)));
    }
}
