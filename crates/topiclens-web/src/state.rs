//! Shared application state for the web server.

use std::sync::Arc;

use sqlx::PgPool;

use topiclens_db::{DocumentRepository, TopicRepository};
use topiclens_queue::TaskQueue;

/// Shared state injected into every Axum handler. Built once in main;
/// the repositories share one bounded pool.
#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentRepository,
    pub topics: TopicRepository,
    pub queue: TaskQueue,
}

impl AppState {
    pub fn new(db: PgPool, queue: TaskQueue) -> Self {
        Self {
            documents: DocumentRepository::new(db.clone()),
            topics: TopicRepository::new(db),
            queue,
        }
    }
}

pub type SharedState = Arc<AppState>;
