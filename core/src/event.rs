//! Events anchored at a grid location.

use crate::error::Result;
use crate::location::Location;
use crate::ticket_pool::TicketPool;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to an event at creation.
///
/// Ids are positive, strictly increasing in creation order, and never reused
/// within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable occasion at one location, with its resale tickets.
#[derive(Clone, Debug)]
pub struct Event {
    location: Location,
    id: EventId,
    tickets: TicketPool,
}

impl Event {
    /// Creates an event with no tickets.
    #[must_use]
    pub const fn new(location: Location, id: EventId) -> Self {
        Self {
            location,
            id,
            tickets: TicketPool::new(),
        }
    }

    /// Where the event takes place.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The event's id.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Tickets listed for this event.
    #[must_use]
    pub const fn tickets(&self) -> &TicketPool {
        &self.tickets
    }

    /// Mutable access to the ticket pool.
    pub const fn tickets_mut(&mut self) -> &mut TicketPool {
        &mut self.tickets
    }

    /// Whether at least one ticket is listed.
    #[must_use]
    pub const fn has_tickets(&self) -> bool {
        !self.tickets.is_empty()
    }

    /// Cheapest listed ticket.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyPool`](crate::RegistryError::EmptyPool) when sold out.
    pub fn cheapest_price(&self) -> Result<f64> {
        self.tickets.peek_min()
    }
}
