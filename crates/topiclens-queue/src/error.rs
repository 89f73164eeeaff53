//! Queue error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("envelope serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
