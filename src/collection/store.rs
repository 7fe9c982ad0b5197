//! Core collection store struct: loading and persisting the durable slot.

use tracing::{debug, warn};

use crate::errors::Error;
use crate::geo_types::SavedRecord;
use crate::storage::SlotStorage;

/// Suffix of the slot that receives unreadable contents before they are discarded.
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// Ordered collection of saved records backed by one durable slot.
///
/// The in-memory list is authoritative for the session. Every mutation
/// rewrites the whole slot; nothing else reads or writes that slot.
pub struct CollectionStore {
    pub(crate) storage: Box<dyn SlotStorage>,
    pub(crate) slot: String,
    pub(crate) records: Vec<SavedRecord>,
}

impl CollectionStore {
    /// Open the store and load the slot's current contents.
    ///
    /// A missing, empty or unparseable slot yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns error if the slot name is empty or the storage itself cannot
    /// be read.
    pub fn open(storage: Box<dyn SlotStorage>, slot: &str) -> Result<Self, Error> {
        if slot.trim().is_empty() {
            return Err(Error::InvalidInput("slot name cannot be empty".to_string()));
        }
        let mut store = CollectionStore {
            storage,
            slot: slot.to_string(),
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Reload the collection from the durable slot, replacing the in-memory list.
    ///
    /// Unparseable contents are copied to `<slot>.corrupt` and the
    /// collection starts empty.
    pub fn load(&mut self) -> Result<&[SavedRecord], Error> {
        let raw = self.storage.read_slot(&self.slot)?;
        self.records = match raw {
            Some(raw) if !raw.trim().is_empty() => self.decode_or_recover(&raw),
            _ => {
                debug!(slot = %self.slot, "slot empty, starting with empty collection");
                Vec::new()
            }
        };
        Ok(&self.records)
    }

    fn decode_or_recover(&self, raw: &str) -> Vec<SavedRecord> {
        match serde_json::from_str::<Vec<SavedRecord>>(raw) {
            Ok(records) => {
                debug!(slot = %self.slot, records = records.len(), "loaded saved collection");
                records
            }
            Err(e) => {
                let backup = format!("{}{}", self.slot, CORRUPT_SUFFIX);
                warn!(slot = %self.slot, backup = %backup, error = %e, "slot contents unreadable, discarding");
                if let Err(e) = self.storage.write_slot(&backup, raw) {
                    warn!(slot = %backup, error = %e, "failed to back up unreadable slot");
                }
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the durable slot.
    pub fn persist(&self) -> Result<(), Error> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.write_slot(&self.slot, &json)?;
        debug!(slot = %self.slot, records = self.records.len(), "persisted saved collection");
        Ok(())
    }

    /// Name of the durable slot backing this store.
    pub fn slot(&self) -> &str {
        &self.slot
    }
}
