//! Pipeline trigger endpoints.
//!
//! Each GET fires one task onto the work queue and answers with plain
//! text once the push has landed. Fire and forget: no correlation id,
//! no completion tracking, and a failed push is an error response, not
//! an ack.

use axum::extract::State;
use tracing::info;

use topiclens_queue::PipelineTask;

use crate::error::ApiError;
use crate::state::SharedState;

async fn trigger(state: &SharedState, task: PipelineTask) -> Result<String, ApiError> {
    state.queue.publish(task.as_str()).await?;
    info!(task = task.as_str(), "pipeline task queued");
    Ok(format!("queued {}\n", task.as_str()))
}

pub async fn load_docs(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::ProcessPdfs).await
}

pub async fn embed_docs(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::EmbedPdfs).await
}

pub async fn umap(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::Umap).await
}

pub async fn topics(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::Topics).await
}

pub async fn terms(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::Terms).await
}

pub async fn tf_idf(State(state): State<SharedState>) -> Result<String, ApiError> {
    trigger(&state, PipelineTask::TfIdf).await
}
