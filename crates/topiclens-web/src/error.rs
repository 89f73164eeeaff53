//! Web-facing error type.
//!
//! Repository and queue errors reach handlers through `?` and convert
//! into a status code plus plain-text body here. Nothing renders a
//! partial page: any gathering failure fails the whole request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use topiclens_db::DbError;
use topiclens_queue::QueueError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("document {document_id} has no topic assignment")]
    MissingTopicAssignment { document_id: i32 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("render failed: {0}")]
    Render(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Db(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Queue(QueueError::Redis(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Queue(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingTopicAssignment { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = %status, "{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            ApiError::NotFound("document 9".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_missing_assignment_is_a_server_error() {
        let err = ApiError::MissingTopicAssignment { document_id: 3 };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "document 3 has no topic assignment");
    }

    #[test]
    fn test_pool_timeout_maps_to_503() {
        let err = ApiError::Db(DbError::Query(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_queue_redis_maps_to_503() {
        let cause = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
        let err = ApiError::Queue(QueueError::Redis(cause));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_queue_serialization_maps_to_500() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Queue(QueueError::Serialization(cause));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
