//! topiclens-db — Read-only data access for the topiclens dashboard.
//!
//! The schema is owned and populated by the external NLP pipeline; this
//! crate only reads it. Four tables are touched:
//!
//! - `documents` — source files, raw text, optional embedding
//! - `topic_top_terms` — ranked terms per topic, aggregated into labels
//! - `document_topics` — document→topic assignments
//! - `doc_coords` — projected 2D coordinate per document

pub mod documents;
pub mod error;
pub mod models;
pub mod pool;
pub mod topics;

pub use documents::DocumentRepository;
pub use error::{DbError, Result};
pub use models::{DocumentDetail, DocumentPoint, TopicAssignment, TopicRow};
pub use pool::connect_pool;
pub use topics::{reduce_assignments, TopicRepository};
