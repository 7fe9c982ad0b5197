//! JSON response types and formatting for CLI output.

use geopin::{Marker, SavedRecord, SelectionState};
use serde::Serialize;

/// Response for a capture.
#[derive(Serialize)]
pub struct CaptureResponse {
    pub selection: SelectionState,
    pub saved_id: Option<String>,
}

/// Response for a saved selection.
#[derive(Serialize)]
pub struct SaveResponse {
    pub status: String,
    pub id: String,
    pub total: usize,
}

/// Response for listing saved addresses.
#[derive(Serialize)]
pub struct ListResponse {
    pub records: Vec<SavedRecord>,
}

/// Response for map markers.
#[derive(Serialize)]
pub struct MarkersResponse {
    pub markers: Vec<Marker>,
}

/// Response for a delete request.
#[derive(Serialize)]
pub struct DeleteResponse {
    pub status: String,
    pub id: String,
    pub remaining: usize,
}

/// Response for errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Print a value as formatted JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}
