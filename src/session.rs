//! Interactive session: capture flow, commit and delete.
//!
//! A capture stores the clicked coordinate and launches the address and
//! imagery lookups as two independent tasks. Each task writes only its own
//! field, and only while its capture is still the active one. The saved
//! collection sits behind an async lock, so mutations and the slot writes
//! they trigger run one at a time in arrival order.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::collection::CollectionStore;
use crate::display::{markers, Marker};
use crate::errors::Error;
use crate::geo_types::{Coordinate, SavedRecord, SelectionState};
use crate::lookup::{check_imagery, resolve_address, Geocoder, ImageryLocator};
use crate::selection::{Selection, Ticket};

/// Lookups launched by one capture.
pub struct CaptureHandle {
    ticket: Ticket,
    address: JoinHandle<bool>,
    imagery: JoinHandle<bool>,
}

/// Which lookup results reached the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub address_applied: bool,
    pub imagery_applied: bool,
}

impl CaptureHandle {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Wait for both lookups to finish.
    pub async fn settled(self) -> CaptureOutcome {
        let epoch = self.ticket.epoch;
        let (address, imagery) = tokio::join!(self.address, self.imagery);
        CaptureOutcome {
            address_applied: address.unwrap_or_else(|e| {
                warn!(epoch, error = %e, "address task aborted");
                false
            }),
            imagery_applied: imagery.unwrap_or_else(|e| {
                warn!(epoch, error = %e, "imagery task aborted");
                false
            }),
        }
    }
}

/// One user session over a saved collection.
pub struct Session {
    selection: Arc<Mutex<Selection>>,
    store: Mutex<CollectionStore>,
    geocoder: Arc<dyn Geocoder>,
    imagery: Arc<dyn ImageryLocator>,
}

impl Session {
    pub fn new(
        store: CollectionStore,
        geocoder: Arc<dyn Geocoder>,
        imagery: Arc<dyn ImageryLocator>,
    ) -> Self {
        Self {
            selection: Arc::new(Mutex::new(Selection::new())),
            store: Mutex::new(store),
            geocoder,
            imagery,
        }
    }

    /// Handle a raw click from the map surface.
    ///
    /// Payloads that are not a two-element numeric array are ignored and
    /// leave the selection untouched.
    pub async fn capture(&self, raw: &Value) -> Option<CaptureHandle> {
        match Coordinate::from_value(raw) {
            Some(coordinate) => Some(self.capture_at(coordinate).await),
            None => {
                debug!(payload = %raw, "ignoring click without usable coordinate");
                None
            }
        }
    }

    /// Select `coordinate` and launch both lookups for it.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn capture_at(&self, coordinate: Coordinate) -> CaptureHandle {
        let ticket = self.selection.lock().await.capture(coordinate);
        debug!(epoch = ticket.epoch, lat = coordinate.lat, lon = coordinate.lon, "captured coordinate");

        let address = tokio::spawn({
            let selection = Arc::clone(&self.selection);
            let geocoder = Arc::clone(&self.geocoder);
            async move {
                let address = resolve_address(geocoder.as_ref(), ticket.coordinate).await;
                selection.lock().await.apply_address(&ticket, address)
            }
        });

        let imagery = tokio::spawn({
            let selection = Arc::clone(&self.selection);
            let locator = Arc::clone(&self.imagery);
            async move {
                let has_imagery = check_imagery(locator.as_ref(), ticket.coordinate).await;
                selection.lock().await.apply_imagery(&ticket, has_imagery)
            }
        });

        CaptureHandle {
            ticket,
            address,
            imagery,
        }
    }

    /// Replace the selection directly, without lookups.
    pub async fn select(&self, state: SelectionState) {
        let epoch = self.selection.lock().await.replace(state);
        debug!(epoch, "selection replaced");
    }

    /// Snapshot of the current selection.
    pub async fn selection(&self) -> SelectionState {
        self.selection.lock().await.state().clone()
    }

    /// Snapshot of the saved collection in order.
    pub async fn saved(&self) -> Vec<SavedRecord> {
        self.store.lock().await.records().to_vec()
    }

    /// Save the current selection and return the updated collection.
    ///
    /// A failed slot write is logged; the record is kept for the session.
    pub async fn commit(&self) -> Vec<SavedRecord> {
        let selection = self.selection().await;
        let mut store = self.store.lock().await;
        let appended = store.append(&selection).map(<[SavedRecord]>::to_vec);
        match appended {
            Ok(records) => records,
            Err(e) => {
                warn!(slot = %store.slot(), error = %e, "failed to persist saved collection");
                store.records().to_vec()
            }
        }
    }

    /// Save the current selection, failing if the slot write fails.
    ///
    /// The record stays in the session's collection either way.
    pub async fn try_commit(&self) -> Result<Vec<SavedRecord>, Error> {
        let selection = self.selection().await;
        let mut store = self.store.lock().await;
        Ok(store.append(&selection)?.to_vec())
    }

    /// Delete a saved record, failing if the slot write fails.
    pub async fn try_delete(&self, id: &str) -> Result<Vec<SavedRecord>, Error> {
        let mut store = self.store.lock().await;
        Ok(store.remove(id)?.to_vec())
    }

    /// Delete a saved record and return the updated collection.
    pub async fn delete(&self, id: &str) -> Vec<SavedRecord> {
        let mut store = self.store.lock().await;
        let removed = store.remove(id).map(<[SavedRecord]>::to_vec);
        match removed {
            Ok(records) => records,
            Err(e) => {
                warn!(slot = %store.slot(), id = %id, error = %e, "failed to persist saved collection");
                store.records().to_vec()
            }
        }
    }

    /// Markers for the selection and every saved record with coordinates.
    pub async fn markers(&self) -> Vec<Marker> {
        let selection = self.selection().await;
        let store = self.store.lock().await;
        markers(&selection, store.records())
    }
}
