//! Saved collection store.
//!
//! Owns the ordered list of saved records and mirrors it into a single
//! durable slot after every mutation.

mod crud;

// pub(crate): module internals hidden; public items re-exported explicitly via lib.rs
pub(crate) mod store;

pub use store::{CollectionStore, CORRUPT_SUFFIX};

#[cfg(test)]
mod tests;
