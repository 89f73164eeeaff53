//! Scatter-plot payload shaping.
//!
//! Joins the coordinate rows with the topic assignment map into the
//! parallel arrays Plotly wants: positions, labels, ids, raw sizes,
//! normalized marker sizes, and one palette color per topic.

use std::collections::HashMap;

use serde::Serialize;

use topiclens_db::DocumentPoint;

use crate::error::ApiError;

/// Named CSS colors cycled per topic id.
pub const PALETTE: [&str; 22] = [
    "AliceBlue", "Azure", "Bisque", "CadetBlue", "BurlyWood", "Coral",
    "DarkCyan", "DarkKhaki", "DarkOrange", "DarkSlateBlue", "Yellow",
    "Violet", "SteelBlue", "Tan", "Teal", "SpringGreen", "SlateGrey",
    "Thistle", "Tomato", "Salmon", "SandyBrown", "SeaGreen",
];

/// Marker-size normalization bounds.
const TARGET_MIN: f64 = 10.0;
const TARGET_MAX: f64 = 50.0;
const BASE_OFFSET: f64 = 5.0;
/// Marker size used when the input has fewer than two distinct sizes.
const FLAT_SIZE: f64 = 20.0;

/// Parallel arrays, index-aligned: entry i in every field describes the
/// same document, in coordinate-row order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub labels: Vec<String>,
    pub ids: Vec<i32>,
    pub original_sizes: Vec<i32>,
    pub sizes: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl PlotData {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Color for a topic id, cycling the palette. Floor modulo keeps the
/// index non-negative for outlier sentinels like -1.
pub fn topic_color(topic_id: i32) -> &'static str {
    let idx = topic_id.rem_euclid(PALETTE.len() as i32) as usize;
    PALETTE[idx]
}

/// Scale raw text lengths into marker sizes:
/// `scale = (max - min) / (TARGET_MAX - TARGET_MIN)`, size = offset +
/// raw / scale. The offset is additive rather than re-based, so outputs
/// are not clamped to [TARGET_MIN, TARGET_MAX].
pub fn normalize_sizes(raw: &[i32]) -> Vec<f64> {
    let (min, max) = raw
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
    if min >= max {
        // No spread to scale against: every marker gets the same size.
        return vec![FLAT_SIZE; raw.len()];
    }
    let scale = f64::from(max - min) / (TARGET_MAX - TARGET_MIN);
    raw.iter().map(|&s| BASE_OFFSET + f64::from(s) / scale).collect()
}

/// Join coordinate rows with the assignment map into plot arrays.
///
/// Every projected document must appear in the map; a gap means the
/// clustering output is stale or partial, and the render fails rather
/// than color a point arbitrarily.
pub fn build_plot_data(
    points: &[DocumentPoint],
    assignments: &HashMap<i32, i32>,
) -> Result<PlotData, ApiError> {
    let mut data = PlotData::default();

    for point in points {
        let topic_id = *assignments
            .get(&point.document_id)
            .ok_or(ApiError::MissingTopicAssignment {
                document_id: point.document_id,
            })?;

        data.x.push(point.x);
        data.y.push(point.y);
        data.labels
            .push(point.title.clone().unwrap_or_else(|| "(untitled)".to_string()));
        data.ids.push(point.document_id);
        data.original_sizes.push(point.size.unwrap_or(0));
        data.colors.push(topic_color(topic_id));
    }

    data.sizes = normalize_sizes(&data.original_sizes);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(document_id: i32, x: f64, y: f64, size: Option<i32>) -> DocumentPoint {
        DocumentPoint {
            document_id,
            title: Some(format!("doc {document_id}")),
            x,
            y,
            size,
        }
    }

    fn assignments(pairs: &[(i32, i32)]) -> HashMap<i32, i32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_sequences_are_index_aligned() {
        let points = vec![
            point(3, 0.1, 0.2, Some(10)),
            point(1, 0.3, 0.4, Some(20)),
            point(2, 0.5, 0.6, Some(30)),
        ];
        let map = assignments(&[(1, 0), (2, 5), (3, 9)]);

        let data = build_plot_data(&points, &map).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.x.len(), 3);
        assert_eq!(data.y.len(), 3);
        assert_eq!(data.labels.len(), 3);
        assert_eq!(data.ids.len(), 3);
        assert_eq!(data.original_sizes.len(), 3);
        assert_eq!(data.sizes.len(), 3);
        assert_eq!(data.colors.len(), 3);

        // Row order survives, no resorting by id.
        assert_eq!(data.ids, vec![3, 1, 2]);
        assert_eq!(data.labels[0], "doc 3");
        assert_eq!(data.colors[0], topic_color(9));
        assert_eq!(data.colors[1], topic_color(0));
    }

    #[test]
    fn test_palette_index_is_floor_modulo() {
        let c = PALETTE.len() as i32;
        for topic_id in -45..=45 {
            let expected = (((topic_id % c) + c) % c) as usize;
            assert_eq!(topic_color(topic_id), PALETTE[expected], "topic {topic_id}");
        }
    }

    #[test]
    fn test_outlier_sentinel_wraps_to_last_color() {
        assert_eq!(topic_color(-1), "SeaGreen");
        assert_eq!(topic_color(0), "AliceBlue");
        assert_eq!(topic_color(22), "AliceBlue");
    }

    #[test]
    fn test_normalize_reference_values() {
        // scale = (30 - 10) / 40 = 0.5
        let sizes = normalize_sizes(&[10, 20, 30]);
        assert!((sizes[0] - 25.0).abs() < 1e-6); // 5 + 10/0.5
        assert!((sizes[1] - 45.0).abs() < 1e-6); // 5 + 20/0.5
        assert!((sizes[2] - 65.0).abs() < 1e-6); // 5 + 30/0.5
    }

    #[test]
    fn test_equal_sizes_get_flat_constant() {
        let sizes = normalize_sizes(&[42, 42, 42, 42]);
        assert_eq!(sizes.len(), 4);
        for s in sizes {
            assert!((s - 20.0).abs() < 1e-6);
        }
        assert_eq!(normalize_sizes(&[7]), vec![20.0]);
    }

    #[test]
    fn test_zero_documents_is_an_empty_payload() {
        let data = build_plot_data(&[], &HashMap::new()).unwrap();
        assert!(data.is_empty());
        assert!(data.sizes.is_empty());
        assert!(data.colors.is_empty());
    }

    #[test]
    fn test_missing_assignment_fails_explicitly() {
        let points = vec![point(1, 0.0, 0.0, Some(5)), point(7, 1.0, 1.0, Some(6))];
        let map = assignments(&[(1, 2)]);

        let err = build_plot_data(&points, &map).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingTopicAssignment { document_id: 7 }
        ));
    }

    #[test]
    fn test_null_title_and_size_have_defaults() {
        let points = vec![DocumentPoint {
            document_id: 4,
            title: None,
            x: 0.0,
            y: 0.0,
            size: None,
        }];
        let map = assignments(&[(4, -1)]);

        let data = build_plot_data(&points, &map).unwrap();
        assert_eq!(data.labels[0], "(untitled)");
        assert_eq!(data.original_sizes[0], 0);
    }

    #[test]
    fn test_payload_serializes_with_js_field_names() {
        let points = vec![point(1, 0.5, -0.5, Some(12))];
        let map = assignments(&[(1, 3)]);

        let json = serde_json::to_string(&build_plot_data(&points, &map).unwrap()).unwrap();
        assert!(json.contains(r#""originalSizes":[12]"#));
        assert!(json.contains(r#""ids":[1]"#));
        assert!(json.contains(r#""colors":["CadetBlue"]"#));
    }
}
