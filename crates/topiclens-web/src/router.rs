//! URL-to-handler wiring for the dashboard and the trigger endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    dashboard::dashboard,
    document::document_page,
    triggers::{embed_docs, load_docs, terms, tf_idf, topics, umap},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",              get(dashboard))
        .route("/document/{id}", get(document_page))

        // Pipeline triggers
        .route("/load_docs",  get(load_docs))
        .route("/embed_docs", get(embed_docs))
        .route("/umap",       get(umap))
        .route("/topics",     get(topics))
        .route("/terms",      get(terms))
        .route("/tf_idf",     get(tf_idf))

        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
