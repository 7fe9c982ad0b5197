//! Append, remove and read operations for the collection store.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::Error;
use crate::geo_types::{SavedRecord, SelectionState};

use super::store::CollectionStore;

impl CollectionStore {
    /// Current records in insertion order.
    pub fn records(&self) -> &[SavedRecord] {
        &self.records
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Option<&SavedRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use = "handle the error or results may be lost"]
    /// Save the given selection as a new record at the end of the collection.
    ///
    /// The record copies the selection's coordinates and address as they
    /// are, including when either is absent. The new record is the last
    /// element of the returned slice.
    ///
    /// # Errors
    ///
    /// Returns error if the collection cannot be written to the durable
    /// slot. The record stays in memory and is written by the next
    /// successful persist.
    pub fn append(&mut self, selection: &SelectionState) -> Result<&[SavedRecord], Error> {
        let id = self.fresh_id();
        info!(id = %id, has_address = selection.address.is_some(), "saving selection");
        self.records.push(SavedRecord {
            id,
            address: selection.address.clone(),
            coordinates: selection.coordinates,
        });
        self.persist()?;
        Ok(&self.records)
    }

    #[must_use = "handle the error or results may be lost"]
    /// Remove the record with exactly this ID.
    ///
    /// Unknown IDs leave the collection and the durable slot untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the collection cannot be written to the durable slot.
    pub fn remove(&mut self, id: &str) -> Result<&[SavedRecord], Error> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            debug!(id = %id, "no saved record with this id");
            return Ok(&self.records);
        }
        info!(id = %id, "removed saved record");
        self.persist()?;
        Ok(&self.records)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
