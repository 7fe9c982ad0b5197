//! Durable slot storage abstraction.
//!
//! A slot is a named value holding one serialized document. Writes replace
//! the whole value.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::Error;

/// Key-value storage of whole serialized documents.
pub trait SlotStorage: Send {
    /// Read a slot. A slot that was never written yields `Ok(None)`.
    fn read_slot(&self, name: &str) -> Result<Option<String>, Error>;

    /// Replace a slot's contents.
    fn write_slot(&self, name: &str, contents: &str) -> Result<(), Error>;
}

/// In-memory slots.
///
/// Clones share the same underlying map, so a caller can keep a handle and
/// observe what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemorySlots {
    fn read_slot(&self, name: &str) -> Result<Option<String>, Error> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(name).cloned())
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<(), Error> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
