//! Database error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// True when the underlying cause is pool exhaustion or a dead
    /// connection rather than a bad statement.
    pub fn is_unavailable(&self) -> bool {
        match self {
            DbError::Query(sqlx::Error::PoolTimedOut) => true,
            DbError::Query(sqlx::Error::PoolClosed) => true,
            DbError::Query(sqlx::Error::Io(_)) => true,
            _ => false,
        }
    }
}
