//! Command handlers for geopin CLI.

use std::process::ExitCode;

use geopin::{Address, Coordinate, Error, SavedRecord, SelectionState, Session};
use serde_json::json;

use crate::output::*;

/// Commands supported by geopin CLI.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Resolve a map point and show it as the current selection
    Capture {
        /// Latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Save the resolved selection to the collection
        #[arg(long)]
        save: bool,
    },
    /// Save a manually entered point; any part may be omitted
    Save {
        /// Latitude
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Descriptive location text
        #[arg(long, requires = "route")]
        location: Option<String>,

        /// Route or object name
        #[arg(long, requires = "location")]
        route: Option<String>,
    },
    /// List saved addresses in the order they were saved
    List,
    /// Print map markers for saved addresses
    Markers,
    /// Delete a saved address
    Delete {
        /// Record ID
        id: String,
    },
    Version,
}

/// Execute a CLI command.
pub async fn execute(command: &Commands, session: &Session, json: bool) -> Result<ExitCode, Error> {
    match command {
        Commands::Capture { lat, lon, save } => {
            handle_capture(session, *lat, *lon, *save, json).await
        }
        Commands::Save {
            lat,
            lon,
            location,
            route,
        } => {
            let coordinates = lat.zip(*lon).map(|(lat, lon)| Coordinate::new(lat, lon));
            let address = location.clone().zip(route.clone()).map(|(location, route)| Address {
                location,
                route,
            });
            handle_save(session, coordinates, address, json).await
        }
        Commands::List => handle_list(session, json).await,
        Commands::Markers => handle_markers(session, json).await,
        Commands::Delete { id } => handle_delete(session, id, json).await,
        Commands::Version => handle_version(json),
    }
}

async fn handle_capture(
    session: &Session,
    lat: f64,
    lon: f64,
    save: bool,
    json: bool,
) -> Result<ExitCode, Error> {
    let handle = session
        .capture(&json!([lat, lon]))
        .await
        .ok_or_else(|| Error::InvalidInput("coordinates must be finite numbers".to_string()))?;
    handle.settled().await;

    let selection = session.selection().await;
    let saved = if save {
        session.try_commit().await?.last().cloned()
    } else {
        None
    };

    if json {
        print_json(&CaptureResponse {
            selection,
            saved_id: saved.as_ref().map(|r| r.id.clone()),
        });
    } else {
        print_selection(&selection);
        if let Some(record) = saved {
            println!("Saved address: {}", record.id);
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_save(
    session: &Session,
    coordinates: Option<Coordinate>,
    address: Option<Address>,
    json: bool,
) -> Result<ExitCode, Error> {
    session
        .select(SelectionState {
            coordinates,
            address,
            has_imagery: false,
        })
        .await;
    let records = session.try_commit().await?;
    let record = records
        .last()
        .ok_or_else(|| Error::InvalidInput("nothing was saved".to_string()))?;

    if json {
        print_json(&SaveResponse {
            status: "saved".to_string(),
            id: record.id.clone(),
            total: records.len(),
        });
    } else {
        println!("Saved address: {}", record.id);
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_list(session: &Session, json: bool) -> Result<ExitCode, Error> {
    let records = session.saved().await;
    if json {
        print_json(&ListResponse { records });
    } else if records.is_empty() {
        println!("No saved addresses");
    } else {
        for record in &records {
            println!("{}", format_record(record));
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_markers(session: &Session, json: bool) -> Result<ExitCode, Error> {
    let markers = session.markers().await;
    if json {
        print_json(&MarkersResponse { markers });
    } else {
        for marker in markers {
            let label = marker.label.unwrap_or_default().replace('\n', ", ");
            println!("{}  {}", marker.position, label);
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_delete(session: &Session, id: &str, json: bool) -> Result<ExitCode, Error> {
    let existed = session.saved().await.iter().any(|r| r.id == id);
    let remaining = session.try_delete(id).await?;

    if json {
        print_json(&DeleteResponse {
            status: if existed { "deleted" } else { "not_found" }.to_string(),
            id: id.to_string(),
            remaining: remaining.len(),
        });
    } else if existed {
        println!("Deleted address: {}", id);
    } else {
        println!("No saved address with id {}", id);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn handle_version(json: bool) -> Result<ExitCode, Error> {
    if json {
        print_json(&serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "name": env!("CARGO_PKG_NAME")
        }));
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_selection(selection: &SelectionState) {
    match &selection.address {
        Some(address) => {
            println!("Location: {}", address.location);
            println!("Route: {}", address.route);
        }
        None => println!("No address found for this point"),
    }
    if let Some(coordinates) = selection.coordinates {
        println!("Coordinates: {}", coordinates);
    }
    println!(
        "Panorama: {}",
        if selection.has_imagery { "available" } else { "none" }
    );
}

fn format_record(record: &SavedRecord) -> String {
    let (location, route) = match &record.address {
        Some(a) => (a.location.as_str(), a.route.as_str()),
        None => ("-", "-"),
    };
    let coordinates = record
        .coordinates
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}: {} | {} | {}", record.id, location, route, coordinates)
}
