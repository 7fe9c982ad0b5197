//! geopin - capture map points as addresses and keep a saved collection.
//!
//! A click on the map becomes a selection: the coordinate is stored at once,
//! then a reverse geocoder and an imagery locator are queried concurrently.
//! Whatever has been resolved can be saved into an ordered collection that is
//! mirrored into a single durable slot after every change.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use geopin::{CollectionStore, Config, Database, NoImagery, Session, YandexGeocoder};
//!
//! # async fn run() -> Result<(), geopin::Error> {
//! let config = Config::load()?;
//! let db = Database::open(&config.database_path)?;
//! let store = CollectionStore::open(Box::new(db), &config.slot_name)?;
//! let session = Session::new(
//!     store,
//!     Arc::new(YandexGeocoder::new(&config)?),
//!     Arc::new(NoImagery),
//! );
//!
//! let handle = session.capture(&serde_json::json!([55.751244, 37.618423])).await;
//! if let Some(handle) = handle {
//!     handle.settled().await;
//! }
//! println!("{:?}", session.selection().await);
//!
//! let saved = session.commit().await;
//! let last = saved.last().map(|r| r.id.clone()).unwrap_or_default();
//! session.delete(&last).await;
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod config;
pub mod display;
pub mod errors;
pub mod geo_types;
pub mod lookup;
pub mod selection;
pub mod session;
pub mod sqlite;
pub mod storage;

// Re-export public API
pub use collection::CollectionStore;
pub use config::Config;
pub use display::{Marker, MarkerKind};
pub use errors::Error;
pub use geo_types::{Address, Coordinate, SavedRecord, SelectionState};
pub use lookup::{GeoObject, Geocoder, ImageryLocator, NoImagery, Panorama, YandexGeocoder};
pub use session::{CaptureHandle, CaptureOutcome, Session};
pub use sqlite::Database;
pub use storage::{MemorySlots, SlotStorage};
