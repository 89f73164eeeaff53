//! Single-document detail page.

use axum::extract::{Path, State};
use axum::response::Html;

use topiclens_db::DocumentDetail;

use crate::error::ApiError;
use crate::handlers::dashboard::NAV_HTML;
use crate::handlers::escape;
use crate::state::SharedState;

pub async fn document_page(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let doc = state
        .documents
        .detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("document {id}")))?;

    Ok(Html(render_document(&doc)))
}

fn render_document(doc: &DocumentDetail) -> String {
    let badge = if doc.embedded {
        r#"<span class="badge yes">embedded</span>"#
    } else {
        r#"<span class="badge no">not embedded</span>"#
    };

    let len = doc.len.unwrap_or(0);
    let preview = doc.preview.as_deref().unwrap_or("");
    let body = if preview.is_empty() {
        r#"<p class="muted">No text extracted yet.</p>"#.to_string()
    } else {
        // The preview column is prefix-truncated by the query, so any
        // shortfall against the stored length means there is more text.
        let truncated = (len as usize) > preview.chars().count();
        let note = if truncated {
            r#"<p class="muted">Preview truncated.</p>"#
        } else {
            ""
        };
        format!("<pre>{}</pre>{}", escape(preview), note)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Document {id} - Topiclens</title>
    <style>
        :root {{ --ink: #1c2430; --muted: #68737f; --line: #d8dee5; --accent: #3a6ea5; }}
        body {{ margin: 0; font-family: Georgia, 'Times New Roman', serif; color: var(--ink); background: #f7f5f1; }}
        header {{ display: flex; align-items: baseline; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid var(--line); background: #fff; }}
        header h1 {{ margin: 0; font-size: 1.4rem; }}
        nav {{ margin-left: auto; display: flex; gap: 0.9rem; align-items: baseline; }}
        nav a {{ color: var(--accent); text-decoration: none; }}
        .nav-label {{ color: var(--muted); font-size: 0.85rem; }}
        main {{ max-width: 900px; margin: 1.5rem auto; padding: 0 2rem; }}
        .meta {{ color: var(--muted); }}
        .meta code {{ font-size: 0.95em; }}
        .badge {{ font-size: 0.8rem; padding: 0.1rem 0.5rem; border-radius: 9px; border: 1px solid var(--line); }}
        .badge.yes {{ background: #e3efe3; }}
        .badge.no {{ background: #f3e7e0; }}
        .muted {{ color: var(--muted); }}
        pre {{ background: #fff; border: 1px solid var(--line); border-radius: 6px; padding: 1rem; white-space: pre-wrap; word-break: break-word; font-size: 0.85rem; }}
    </style>
</head>
<body>
<header>
    <h1>Document {id}</h1>
    {nav}
</header>
<main>
    <p class="meta"><code>{file_path}</code> · {len} characters · {badge}</p>
    {body}
</main>
</body>
</html>"#,
        id = doc.id,
        nav = NAV_HTML,
        file_path = escape(&doc.file_path),
        len = len,
        badge = badge,
        body = body,
    )
}
