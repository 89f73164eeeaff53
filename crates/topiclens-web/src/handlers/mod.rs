//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod document;
pub mod triggers;

/// Minimal HTML escaping for strings that end up inside markup.
/// Titles and previews come from parsed PDFs and can contain anything.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
