//! The active selection and its capture epochs.
//!
//! Every capture starts a new epoch. Lookup results carry the [`Ticket`]
//! of the capture that launched them and are dropped if a newer capture
//! happened in the meantime.

use tracing::debug;

use crate::geo_types::{Address, Coordinate, SelectionState};

/// Identifies the capture a lookup was launched for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    pub epoch: u64,
    pub coordinate: Coordinate,
}

/// Holder of the single active selection.
#[derive(Debug, Default)]
pub struct Selection {
    state: SelectionState,
    epoch: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new selection at `coordinate`, discarding the previous one.
    pub fn capture(&mut self, coordinate: Coordinate) -> Ticket {
        self.epoch += 1;
        self.state = SelectionState {
            coordinates: Some(coordinate),
            address: None,
            has_imagery: false,
        };
        Ticket {
            epoch: self.epoch,
            coordinate,
        }
    }

    /// Replace the selection with a fully formed state.
    ///
    /// Lookups still in flight for the previous selection become stale.
    pub fn replace(&mut self, state: SelectionState) -> u64 {
        self.epoch += 1;
        self.state = state;
        self.epoch
    }

    /// Whether results for `ticket` still belong to the active selection.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.epoch == self.epoch && self.state.coordinates == Some(ticket.coordinate)
    }

    /// Store a resolved address. Returns false if the ticket is stale.
    pub fn apply_address(&mut self, ticket: &Ticket, address: Option<Address>) -> bool {
        if !self.is_current(ticket) {
            debug!(epoch = ticket.epoch, current = self.epoch, "dropping stale address result");
            return false;
        }
        self.state.address = address;
        true
    }

    /// Store imagery availability. Returns false if the ticket is stale.
    pub fn apply_imagery(&mut self, ticket: &Ticket, has_imagery: bool) -> bool {
        if !self.is_current(ticket) {
            debug!(epoch = ticket.epoch, current = self.epoch, "dropping stale imagery result");
            return false;
        }
        self.state.has_imagery = has_imagery;
        true
    }
}
