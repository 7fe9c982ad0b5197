//! Projection of session state into map markers.

use serde::Serialize;

use crate::geo_types::{Address, Coordinate, SavedRecord, SelectionState};

/// What a marker stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    Selection,
    Saved { id: String },
}

/// A point for the map surface, with optional tooltip text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(flatten)]
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub label: Option<String>,
}

fn label(address: Option<&Address>) -> Option<String> {
    address.map(|a| format!("{}\n{}", a.location, a.route))
}

/// Selection marker first, then one marker per saved record with coordinates.
pub fn markers(selection: &SelectionState, saved: &[SavedRecord]) -> Vec<Marker> {
    let current = selection.coordinates.map(|position| Marker {
        kind: MarkerKind::Selection,
        position,
        label: label(selection.address.as_ref()),
    });

    current
        .into_iter()
        .chain(saved.iter().filter_map(|record| {
            record.coordinates.map(|position| Marker {
                kind: MarkerKind::Saved {
                    id: record.id.clone(),
                },
                position,
                label: label(record.address.as_ref()),
            })
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_skip_records_without_coordinates() {
        let saved = vec![
            SavedRecord {
                id: "a".to_string(),
                address: Some(Address {
                    location: "Moscow".to_string(),
                    route: "Red Square".to_string(),
                }),
                coordinates: Some(Coordinate::new(55.75, 37.61)),
            },
            SavedRecord {
                id: "b".to_string(),
                address: None,
                coordinates: None,
            },
        ];
        let markers = markers(&SelectionState::default(), &saved);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, MarkerKind::Saved { id: "a".to_string() });
        assert_eq!(markers[0].label.as_deref(), Some("Moscow\nRed Square"));
    }

    #[test]
    fn test_selection_marker_comes_first() {
        let selection = SelectionState {
            coordinates: Some(Coordinate::new(1.0, 2.0)),
            address: None,
            has_imagery: false,
        };
        let saved = vec![SavedRecord {
            id: "a".to_string(),
            address: None,
            coordinates: Some(Coordinate::new(3.0, 4.0)),
        }];
        let markers = markers(&selection, &saved);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].kind, MarkerKind::Selection);
        assert!(markers[0].label.is_none());
        assert_eq!(markers[1].position, Coordinate::new(3.0, 4.0));
    }

    #[test]
    fn test_marker_json_shape() {
        let marker = Marker {
            kind: MarkerKind::Saved { id: "a".to_string() },
            position: Coordinate::new(1.0, 2.0),
            label: None,
        };
        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["kind"], "saved");
        assert_eq!(value["id"], "a");
        assert_eq!(value["position"], serde_json::json!([1.0, 2.0]));
    }
}
