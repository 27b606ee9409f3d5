//! The event registry: one event per location, inside fixed grid bounds.

use crate::error::{RegistryError, Result};
use crate::event::{Event, EventId};
use crate::location::{GridBounds, Location};
use crate::ticket_pool::RemoveOutcome;
use std::collections::HashMap;

/// Owns every event, keyed by location, and the grid they are searched on.
///
/// The location map is the only record of which events exist. Each registry
/// carries its own id counter, so separate registries never interfere.
///
/// # Example
///
/// ```
/// use event_finder_core::{EventRegistry, Location};
///
/// let mut registry = EventRegistry::new([-10, 10], [-10, 10])?;
/// let venue = Location::new(1, 0);
/// registry.create_event(venue);
/// registry.add_ticket(venue, 30.51)?;
/// registry.add_ticket(venue, 29.04)?;
///
/// let nearest = registry.find_nearest_events(Location::new(0, 0), 5);
/// assert_eq!(nearest.len(), 1);
/// assert_eq!(nearest[0].cheapest_price, 29.04);
/// # Ok::<(), event_finder_core::RegistryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EventRegistry {
    bounds: GridBounds,
    events: HashMap<Location, Event>,
    next_id: u64,
}

impl EventRegistry {
    /// Creates an empty registry over inclusive `[min, max]` ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidRange`] if either range is malformed,
    /// or [`RegistryError::GridTooLarge`] if the grid cannot be indexed.
    pub fn new(x_range: [i64; 2], y_range: [i64; 2]) -> Result<Self> {
        Ok(Self::with_bounds(GridBounds::new(x_range, y_range)?))
    }

    /// Creates an empty registry over already validated bounds.
    #[must_use]
    pub fn with_bounds(bounds: GridBounds) -> Self {
        Self {
            bounds,
            events: HashMap::new(),
            next_id: 0,
        }
    }

    /// The grid searches run on.
    #[must_use]
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Creates an event at `location` and returns its id.
    ///
    /// An event already at `location` is replaced, and its tickets are
    /// discarded with it.
    pub fn create_event(&mut self, location: Location) -> EventId {
        self.next_id += 1;
        let id = EventId::new(self.next_id);

        if !self.bounds.contains(&location) {
            tracing::warn!(
                event_id = %id,
                location = %location,
                "Event created outside grid bounds, it will never be found by search"
            );
        }

        if let Some(previous) = self.events.insert(location, Event::new(location, id)) {
            tracing::warn!(
                event_id = %id,
                replaced_event_id = %previous.id(),
                discarded_tickets = previous.tickets().len(),
                location = %location,
                "Replaced existing event"
            );
        } else {
            tracing::debug!(event_id = %id, location = %location, "Event created");
        }

        id
    }

    /// Removes the event at `location`, if any, returning it.
    pub fn remove_event(&mut self, location: Location) -> Option<Event> {
        let removed = self.events.remove(&location);
        if let Some(event) = &removed {
            tracing::debug!(event_id = %event.id(), location = %location, "Event removed");
        }
        removed
    }

    /// Lists one ticket at `price` for the event at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`] if no event is at `location`.
    pub fn add_ticket(&mut self, location: Location, price: f64) -> Result<()> {
        let event = self.event_mut(location)?;
        event.tickets_mut().insert(price);
        tracing::trace!(event_id = %event.id(), price, "Ticket added");
        Ok(())
    }

    /// Removes one ticket listed at exactly `price` for the event at `location`.
    ///
    /// A sold-out event or a price with no listing leaves the pool unchanged
    /// and is reported through the returned [`RemoveOutcome`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`] if no event is at `location`.
    pub fn remove_ticket(&mut self, location: Location, price: f64) -> Result<RemoveOutcome> {
        let event = self.event_mut(location)?;
        let outcome = event.tickets_mut().remove_one(price);
        match outcome {
            RemoveOutcome::Removed => {
                tracing::trace!(event_id = %event.id(), price, "Ticket removed");
            }
            RemoveOutcome::NotFound => {
                tracing::debug!(event_id = %event.id(), price, "No ticket listed at price");
            }
            RemoveOutcome::PoolEmpty => {
                tracing::warn!(event_id = %event.id(), "No tickets available for removal");
            }
        }
        Ok(outcome)
    }

    /// The event at `location`, if any.
    #[must_use]
    pub fn event_at(&self, location: Location) -> Option<&Event> {
        self.events.get(&location)
    }

    /// Cheapest ticket of the event at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`] if no event is at `location`,
    /// or [`RegistryError::EmptyPool`] if it has no tickets.
    pub fn cheapest_price(&self, location: Location) -> Result<f64> {
        self.event_at(location)
            .ok_or(RegistryError::EventNotFound(location))?
            .cheapest_price()
    }

    /// Number of registered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All registered events, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Id handed to the most recently created event, if any.
    #[must_use]
    pub const fn last_event_id(&self) -> Option<EventId> {
        if self.next_id == 0 {
            None
        } else {
            Some(EventId::new(self.next_id))
        }
    }

    fn event_mut(&mut self, location: Location) -> Result<&mut Event> {
        self.events.get_mut(&location).ok_or_else(|| {
            tracing::warn!(location = %location, "No event at location");
            RegistryError::EventNotFound(location)
        })
    }
}
