//! Redis list publisher.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::debug;

use crate::error::Result;
use crate::tasks::TaskEnvelope;

/// Handle on the pipeline work queue. Cheap to clone; all clones share
/// one managed connection.
#[derive(Clone)]
pub struct TaskQueue {
    conn: ConnectionManager,
    queue_name: String,
}

impl TaskQueue {
    /// Connect and hold a managed connection that re-establishes itself
    /// after transport failures. Fails if the server is unreachable.
    pub async fn connect(redis_url: &str, queue_name: impl Into<String>) -> Result<Self> {
        let client = Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self {
            conn,
            queue_name: queue_name.into(),
        })
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Push one task envelope onto the queue. Any task string is
    /// accepted; workers skip names they do not know. A push that fails
    /// is the caller's problem, there is no retry here.
    pub async fn publish(&self, task: &str) -> Result<()> {
        let payload = TaskEnvelope::new(task).to_json()?;
        let mut conn = self.conn.clone();
        let queue_len: i64 = conn.lpush(&self.queue_name, payload).await?;
        debug!(task, queue = %self.queue_name, queue_len, "task enqueued");
        Ok(())
    }
}
