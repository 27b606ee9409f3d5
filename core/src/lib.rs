//! # Event Finder Core
//!
//! Locates the nearest events with resale tickets available, on a bounded
//! 2D integer grid.
//!
//! ## Core Concepts
//!
//! - **Location**: an `(x, y)` grid cell, compared by value
//! - **Event**: anchored at one location, with a unique, monotonically assigned id
//! - **Ticket pool**: price-ordered multiset of resale tickets for one event
//! - **Registry**: at most one event per location, inside inclusive grid bounds
//! - **Search**: breadth-first rings outward from a query location, nearest first
//!
//! ## Example
//!
//! ```
//! use event_finder_core::{EventRegistry, Location, DEFAULT_RESULT_LIMIT};
//!
//! let mut registry = EventRegistry::new([-10, 10], [-10, 10])?;
//!
//! for (x, y, prices) in [(1, 0, [30.51, 29.04]), (3, 5, [14.23, 34.52])] {
//!     let location = Location::new(x, y);
//!     registry.create_event(location);
//!     for price in prices {
//!         registry.add_ticket(location, price)?;
//!     }
//! }
//!
//! let nearest = registry.find_nearest_events(Location::new(0, 0), DEFAULT_RESULT_LIMIT);
//! assert_eq!(nearest.len(), 2);
//! assert_eq!(nearest[0].distance, 1);
//! assert_eq!(nearest[1].distance, 8);
//! # Ok::<(), event_finder_core::RegistryError>(())
//! ```
//!
//! ## Concurrency
//!
//! A registry is plain owned data with no interior locking. To share one
//! between tasks, wrap it in a single lock covering every operation (see the
//! `event-finder-runtime` crate).

pub mod command;
pub mod error;
pub mod event;
pub mod location;
pub mod registry;
pub mod search;
pub mod ticket_pool;

pub use command::{RegistryCommand, RegistryReply};
pub use error::{RegistryError, Result};
pub use event::{Event, EventId};
pub use location::{GridBounds, Location};
pub use registry::EventRegistry;
pub use search::{DEFAULT_RESULT_LIMIT, NearbyEvent, NearbyEvents};
pub use ticket_pool::{RemoveOutcome, TicketPool};
