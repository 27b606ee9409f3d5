//! Request/response form of the registry operations.
//!
//! Lets a transport (HTTP handler, queue consumer, CLI) drive a registry
//! with serializable values instead of method calls:
//!
//! ```
//! use event_finder_core::{EventRegistry, Location, RegistryCommand, RegistryReply};
//!
//! let mut registry = EventRegistry::new([-10, 10], [-10, 10])?;
//! let reply = registry.execute(RegistryCommand::CreateEvent {
//!     location: Location::new(1, 0),
//! })?;
//! assert!(matches!(reply, RegistryReply::EventCreated { .. }));
//! # Ok::<(), event_finder_core::RegistryError>(())
//! ```

use crate::error::Result;
use crate::event::EventId;
use crate::location::Location;
use crate::registry::EventRegistry;
use crate::search::{DEFAULT_RESULT_LIMIT, NearbyEvents};
use crate::ticket_pool::RemoveOutcome;
use serde::{Deserialize, Serialize};

/// An operation on the registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryCommand {
    /// Create (or replace) the event at a location
    CreateEvent {
        /// Where to create the event
        location: Location,
    },
    /// Remove the event at a location
    RemoveEvent {
        /// Location of the event
        location: Location,
    },
    /// List a ticket for the event at a location
    AddTicket {
        /// Location of the event
        location: Location,
        /// Ticket price
        price: f64,
    },
    /// Remove one ticket at a price from the event at a location
    RemoveTicket {
        /// Location of the event
        location: Location,
        /// Ticket price to remove
        price: f64,
    },
    /// Find the nearest events with tickets available
    FindNearest {
        /// Query location
        origin: Location,
        /// Maximum number of results (defaults to 5)
        #[serde(default)]
        limit: Option<usize>,
    },
}

impl RegistryCommand {
    /// Whether executing this command can change the registry.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::FindNearest { .. })
    }
}

/// Result of a successfully executed [`RegistryCommand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryReply {
    /// An event was created
    EventCreated {
        /// Id of the new event
        event_id: EventId,
    },
    /// Removal finished; `None` if nothing was at the location
    EventRemoved {
        /// Id of the removed event
        event_id: Option<EventId>,
    },
    /// A ticket was listed
    TicketAdded,
    /// Ticket removal finished
    TicketRemoved {
        /// What the removal did
        outcome: RemoveOutcome,
    },
    /// Search results, nearest first
    NearestEvents {
        /// Events with tickets available
        events: NearbyEvents,
    },
}

impl EventRegistry {
    /// Executes a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`](crate::RegistryError::EventNotFound)
    /// when a ticket command targets a location with no event.
    pub fn execute(&mut self, command: RegistryCommand) -> Result<RegistryReply> {
        match command {
            RegistryCommand::FindNearest { origin, limit } => Ok(self.query(origin, limit)),
            RegistryCommand::CreateEvent { location } => Ok(RegistryReply::EventCreated {
                event_id: self.create_event(location),
            }),
            RegistryCommand::RemoveEvent { location } => Ok(RegistryReply::EventRemoved {
                event_id: self.remove_event(location).map(|event| event.id()),
            }),
            RegistryCommand::AddTicket { location, price } => {
                self.add_ticket(location, price)?;
                Ok(RegistryReply::TicketAdded)
            }
            RegistryCommand::RemoveTicket { location, price } => {
                Ok(RegistryReply::TicketRemoved {
                    outcome: self.remove_ticket(location, price)?,
                })
            }
        }
    }

    /// Executes a read-only command without requiring `&mut self`.
    ///
    /// Returns `None` for commands that would mutate the registry.
    #[must_use]
    pub fn execute_read(&self, command: &RegistryCommand) -> Option<RegistryReply> {
        match command {
            RegistryCommand::FindNearest { origin, limit } => Some(self.query(*origin, *limit)),
            _ => None,
        }
    }

    fn query(&self, origin: Location, limit: Option<usize>) -> RegistryReply {
        RegistryReply::NearestEvents {
            events: self.find_nearest_events(origin, limit.unwrap_or(DEFAULT_RESULT_LIMIT)),
        }
    }
}
