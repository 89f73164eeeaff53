//! Read-only queries over documents and their projected coordinates.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{DocumentDetail, DocumentPoint};

/// Repository for the documents side of the schema.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self { Self { pool } }

    // ── Counts ───────────────────────────────────────────────────────────────

    /// Total number of documents, titled or not.
    pub async fn total_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ── Coordinates ──────────────────────────────────────────────────────────

    /// Every document that has a projected coordinate, in join order.
    pub async fn coords(&self) -> Result<Vec<DocumentPoint>> {
        let rows = sqlx::query_as::<_, DocumentPoint>(
            r#"
            SELECT d.id AS document_id,
                   SUBSTRING(d.title FROM 1 FOR 20) AS title,
                   x,
                   y,
                   LENGTH(d.raw_text) AS size
            FROM doc_coords dc
            JOIN documents d ON d.id = dc.document_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // ── Detail ───────────────────────────────────────────────────────────────

    /// Single-document lookup for the detail page. None for an id that
    /// does not exist.
    pub async fn detail(&self, id: i32) -> Result<Option<DocumentDetail>> {
        let row = sqlx::query_as::<_, DocumentDetail>(
            r#"
            SELECT id,
                   file_path,
                   LEFT(raw_text, 20000) AS preview,
                   LENGTH(raw_text) AS len,
                   embedding IS NOT NULL AS embedded
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
