//! Landing page: the topic scatter map plus the per-topic document table.

use axum::{extract::State, response::Html};

use topiclens_db::TopicRow;

use crate::error::ApiError;
use crate::handlers::escape;
use crate::plot::{build_plot_data, PlotData};
use crate::state::SharedState;

/// Navigation HTML fragment shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let count = state.documents.total_count().await?;
    let topic_rows = state.topics.topic_table().await?;
    let points = state.documents.coords().await?;
    let assignments = state.topics.assignment_map().await?;

    let plot = build_plot_data(&points, &assignments)?;

    Ok(Html(render_dashboard(count, &topic_rows, &plot)?))
}

fn render_dashboard(
    count: i64,
    topic_rows: &[TopicRow],
    plot: &PlotData,
) -> Result<String, ApiError> {
    // A literal "</script>" inside a label would end the script element
    // early; < reads back as the same text when the JSON is parsed.
    let plot_json = serde_json::to_string(plot)?.replace('<', "\\u003c");

    let topic_html: String = if topic_rows.is_empty() {
        r#"<tr><td colspan="2" class="muted">No topics yet. Run the pipeline steps in the nav bar, left to right.</td></tr>"#.to_string()
    } else {
        topic_rows
            .iter()
            .map(|row| {
                format!(
                    r#"<tr><td class="topic-label">{}</td><td>{}</td></tr>"#,
                    escape(&row.label),
                    escape(row.document_titles.as_deref().unwrap_or("")),
                )
            })
            .collect()
    };

    let empty_note = if plot.is_empty() {
        r#"<p class="muted">No projected documents yet; the map fills in after the umap task has run.</p>"#
    } else {
        ""
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Topiclens</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        :root {{ --ink: #1c2430; --muted: #68737f; --line: #d8dee5; --accent: #3a6ea5; }}
        * {{ box-sizing: border-box; }}
        body {{ margin: 0; font-family: Georgia, 'Times New Roman', serif; color: var(--ink); background: #f7f5f1; }}
        header {{ display: flex; align-items: baseline; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid var(--line); background: #fff; }}
        header h1 {{ margin: 0; font-size: 1.4rem; letter-spacing: 0.02em; }}
        .count {{ color: var(--muted); }}
        nav {{ margin-left: auto; display: flex; gap: 0.9rem; align-items: baseline; }}
        nav a {{ color: var(--accent); text-decoration: none; }}
        nav a:hover {{ text-decoration: underline; }}
        .nav-label {{ color: var(--muted); font-size: 0.85rem; }}
        main {{ max-width: 1100px; margin: 1.5rem auto; padding: 0 2rem; }}
        #topic-map {{ background: #fff; border: 1px solid var(--line); border-radius: 6px; }}
        .muted {{ color: var(--muted); }}
        h2 {{ margin-top: 2rem; }}
        table {{ width: 100%; border-collapse: collapse; background: #fff; border: 1px solid var(--line); }}
        th, td {{ text-align: left; vertical-align: top; padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--line); }}
        th {{ font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.06em; color: var(--muted); }}
        .topic-label {{ white-space: nowrap; font-weight: 700; }}
    </style>
</head>
<body>
<header>
    <h1>Topiclens</h1>
    <span class="count">{count} documents</span>
    {nav}
</header>
<main>
    <div id="topic-map"></div>
    {empty_note}
    <h2>Topics</h2>
    <table>
        <thead><tr><th>Topic</th><th>Documents</th></tr></thead>
        <tbody>{topic_html}</tbody>
    </table>
</main>
<script>
    const plotData = {plot_json};
    const map = document.getElementById('topic-map');
    Plotly.newPlot(map, [{{
        x: plotData.x,
        y: plotData.y,
        text: plotData.labels,
        customdata: plotData.ids,
        mode: 'markers',
        type: 'scatter',
        hovertemplate: '%{{text}}<extra></extra>',
        marker: {{ size: plotData.sizes, color: plotData.colors, line: {{ width: 1, color: '#51606e' }} }}
    }}], {{
        height: 540,
        margin: {{ t: 24, r: 24, b: 36, l: 48 }},
        xaxis: {{ zeroline: false }},
        yaxis: {{ zeroline: false }}
    }}, {{ displayModeBar: false }});
    map.on('plotly_click', (ev) => {{
        const id = ev.points[0].customdata;
        if (id !== undefined) {{ window.location.href = '/document/' + id; }}
    }});
</script>
</body>
</html>"#,
        count = count,
        nav = NAV_HTML,
        empty_note = empty_note,
        topic_html = topic_html,
        plot_json = plot_json,
    ))
}
