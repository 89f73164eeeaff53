//! Typed rows for the read-only document/topic schema.

use sqlx::FromRow;

/// One point on the dashboard scatter plot: a document with its
/// projected 2D coordinate and raw text length.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentPoint {
    pub document_id: i32,
    /// Truncated to display length by the query; NULL for documents
    /// that have not been titled yet.
    pub title: Option<String>,
    pub x: f64,
    pub y: f64,
    /// LENGTH(raw_text); NULL until text extraction has run.
    pub size: Option<i32>,
}

/// One row of the topic table: derived label plus the comma-joined
/// titles of the documents assigned to it.
#[derive(Debug, Clone, FromRow)]
pub struct TopicRow {
    pub label: String,
    pub document_titles: Option<String>,
}

/// Raw document→topic assignment row.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TopicAssignment {
    pub document_id: i32,
    pub topic_id: i32,
}

/// Full detail for one document, as shown on the document page.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentDetail {
    pub id: i32,
    pub file_path: String,
    /// First 20 000 characters of the raw text.
    pub preview: Option<String>,
    pub len: Option<i32>,
    pub embedded: bool,
}
