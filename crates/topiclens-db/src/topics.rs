//! Read-only queries over topics, their derived labels, and the
//! document→topic assignment map.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::warn;

use crate::error::Result;
use crate::models::{TopicAssignment, TopicRow};

/// Repository for the topic side of the schema.
#[derive(Clone)]
pub struct TopicRepository {
    pool: PgPool,
}

impl TopicRepository {
    pub fn new(pool: PgPool) -> Self { Self { pool } }

    // ── Topic table ──────────────────────────────────────────────────────────

    /// One row per topic: label built from its top terms (rank
    /// descending, '-' separated) plus the titles of its documents,
    /// busiest topics first.
    pub async fn topic_table(&self) -> Result<Vec<TopicRow>> {
        let rows = sqlx::query_as::<_, TopicRow>(
            r#"
            WITH topic_titles AS (
                SELECT ttt.topic_id,
                       STRING_AGG(term_text, '-' ORDER BY rank DESC) AS label
                FROM topic_top_terms ttt
                GROUP BY ttt.topic_id
            )
            SELECT tt.label,
                   STRING_AGG(d.title, ', ') AS document_titles
            FROM topic_titles tt
            JOIN document_topics dt ON dt.topic_id = tt.topic_id
            JOIN documents d ON d.id = dt.document_id
            GROUP BY tt.label
            ORDER BY COUNT(d.title) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // ── Assignments ──────────────────────────────────────────────────────────

    /// Map of document id to its topic id. Rows are fetched in a fixed
    /// order so the reduction below is deterministic.
    pub async fn assignment_map(&self) -> Result<HashMap<i32, i32>> {
        let rows = sqlx::query_as::<_, TopicAssignment>(
            "SELECT document_id, topic_id FROM document_topics ORDER BY document_id, topic_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(reduce_assignments(&rows))
    }
}

/// Fold assignment rows into one topic per document. Assignments are
/// expected to be one-to-one; when a document carries several rows the
/// highest topic id wins (rows arrive sorted) and the collision is
/// logged.
pub fn reduce_assignments(rows: &[TopicAssignment]) -> HashMap<i32, i32> {
    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
        if let Some(prev) = map.insert(row.document_id, row.topic_id) {
            if prev != row.topic_id {
                warn!(
                    document_id = row.document_id,
                    kept = row.topic_id,
                    dropped = prev,
                    "document has multiple topic assignments"
                );
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(document_id: i32, topic_id: i32) -> TopicAssignment {
        TopicAssignment { document_id, topic_id }
    }

    #[test]
    fn test_reduce_one_to_one() {
        let map = reduce_assignments(&[row(1, 4), row(2, 7), row(3, -1)]);
        assert_eq!(map.len(), 3);
        assert_eq!(map[&1], 4);
        assert_eq!(map[&2], 7);
        assert_eq!(map[&3], -1);
    }

    #[test]
    fn test_reduce_duplicate_keeps_highest_topic() {
        // Sorted input means the last write for a document is its
        // highest topic id.
        let map = reduce_assignments(&[row(5, 2), row(5, 9), row(6, 1)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&5], 9);
        assert_eq!(map[&6], 1);
    }

    #[test]
    fn test_reduce_empty() {
        assert!(reduce_assignments(&[]).is_empty());
    }
}
