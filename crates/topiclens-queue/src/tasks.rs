//! The task vocabulary understood by the pipeline workers.

use serde::Serialize;

/// A unit of pipeline work the dashboard can trigger. Workers match on
/// the envelope's task string, so these names are wire format, not
/// display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineTask {
    /// Parse PDFs from the data folder into `documents`.
    ProcessPdfs,
    /// Chunk and embed documents that lack an embedding.
    EmbedPdfs,
    /// Project embeddings down to the 2D coordinates in `doc_coords`.
    Umap,
    /// Cluster the projection into topics and assign documents.
    Topics,
    /// Extract candidate terms from document text.
    Terms,
    /// Score terms per topic into `topic_top_terms`.
    TfIdf,
}

impl PipelineTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineTask::ProcessPdfs => "process_pdfs",
            PipelineTask::EmbedPdfs   => "embed_pdfs",
            PipelineTask::Umap        => "umap",
            PipelineTask::Topics      => "topics",
            PipelineTask::Terms       => "terms",
            PipelineTask::TfIdf       => "tf_idf",
        }
    }
}

/// Wire envelope: `{"task":"<name>"}`.
#[derive(Debug, Serialize)]
pub struct TaskEnvelope<'a> {
    pub task: &'a str,
}

impl<'a> TaskEnvelope<'a> {
    pub fn new(task: &'a str) -> Self { Self { task } }

    /// UTF-8 JSON text pushed onto the queue.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_names() {
        assert_eq!(PipelineTask::ProcessPdfs.as_str(), "process_pdfs");
        assert_eq!(PipelineTask::EmbedPdfs.as_str(), "embed_pdfs");
        assert_eq!(PipelineTask::Umap.as_str(), "umap");
        assert_eq!(PipelineTask::Topics.as_str(), "topics");
        assert_eq!(PipelineTask::Terms.as_str(), "terms");
        assert_eq!(PipelineTask::TfIdf.as_str(), "tf_idf");
    }

    #[test]
    fn test_envelope_exact_wire_text() {
        let json = TaskEnvelope::new("umap").to_json().unwrap();
        assert_eq!(json, r#"{"task":"umap"}"#);
    }

    #[test]
    fn test_envelope_accepts_arbitrary_names() {
        // The publish contract does not validate task names.
        let json = TaskEnvelope::new("reindex_everything").to_json().unwrap();
        assert_eq!(json, r#"{"task":"reindex_everything"}"#);
    }
}
