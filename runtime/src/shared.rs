//! Shared registry handle.
//!
//! A registry and the ticket pools inside it have no isolation of their own,
//! so every operation here runs under one registry-wide `RwLock`: mutations
//! take the write lock, searches and reads share the read lock. Each
//! operation completes inside a single lock acquisition, so no caller ever
//! observes a half-applied change.

use crate::metrics;
use event_finder_core::{
    EventId, EventRegistry, Location, NearbyEvents, RegistryCommand, RegistryReply,
    RemoveOutcome, Result,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to a registry shared between tasks.
///
/// # Example
///
/// ```
/// use event_finder_core::{EventRegistry, Location};
/// use event_finder_runtime::SharedRegistry;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), event_finder_core::RegistryError> {
/// let shared = SharedRegistry::new(EventRegistry::new([-10, 10], [-10, 10])?);
///
/// let venue = Location::new(0, 1);
/// shared.create_event(venue).await;
/// shared.add_ticket(venue, 20.32).await?;
///
/// let nearest = shared.find_nearest_events(Location::new(0, 0), 5).await;
/// assert_eq!(nearest.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SharedRegistry {
    registry: Arc<RwLock<EventRegistry>>,
}

impl SharedRegistry {
    /// Wraps `registry` for shared use.
    #[must_use]
    pub fn new(registry: EventRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Creates (or replaces) the event at `location`.
    #[tracing::instrument(skip(self), name = "registry_create_event")]
    pub async fn create_event(&self, location: Location) -> EventId {
        let id = self.registry.write().await.create_event(location);
        metrics::record_event_created();
        id
    }

    /// Removes the event at `location`, returning its id if one was there.
    #[tracing::instrument(skip(self), name = "registry_remove_event")]
    pub async fn remove_event(&self, location: Location) -> Option<EventId> {
        let removed = self.registry.write().await.remove_event(location)?;
        metrics::record_event_removed();
        Some(removed.id())
    }

    /// Lists one ticket for the event at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`](event_finder_core::RegistryError::EventNotFound)
    /// if no event is at `location`.
    #[tracing::instrument(skip(self), name = "registry_add_ticket")]
    pub async fn add_ticket(&self, location: Location, price: f64) -> Result<()> {
        self.registry.write().await.add_ticket(location, price)?;
        metrics::record_ticket_added();
        Ok(())
    }

    /// Removes one ticket at exactly `price` from the event at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`](event_finder_core::RegistryError::EventNotFound)
    /// if no event is at `location`.
    #[tracing::instrument(skip(self), name = "registry_remove_ticket")]
    pub async fn remove_ticket(&self, location: Location, price: f64) -> Result<RemoveOutcome> {
        let outcome = self.registry.write().await.remove_ticket(location, price)?;
        metrics::record_ticket_removed(outcome);
        Ok(outcome)
    }

    /// Up to `limit` events with tickets available, nearest to `origin` first.
    #[tracing::instrument(skip(self), name = "registry_find_nearest")]
    pub async fn find_nearest_events(&self, origin: Location, limit: usize) -> NearbyEvents {
        let results = self.registry.read().await.find_nearest_events(origin, limit);
        metrics::record_search(results.len());
        results
    }

    /// Executes a command under the lock it needs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EventNotFound`](event_finder_core::RegistryError::EventNotFound)
    /// when a ticket command targets a location with no event.
    #[tracing::instrument(skip(self, command), name = "registry_send")]
    pub async fn send(&self, command: RegistryCommand) -> Result<RegistryReply> {
        // The read guard is released at the end of this statement.
        let read_reply = self.registry.read().await.execute_read(&command);
        let reply = match read_reply {
            Some(reply) => reply,
            None => self.registry.write().await.execute(command)?,
        };
        record_reply(&reply);
        Ok(reply)
    }

    /// Reads the registry under the read lock.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = shared.state(|registry| registry.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&EventRegistry) -> T,
    {
        let registry = self.registry.read().await;
        f(&registry)
    }
}

fn record_reply(reply: &RegistryReply) {
    match reply {
        RegistryReply::EventCreated { .. } => metrics::record_event_created(),
        RegistryReply::EventRemoved { event_id } => {
            if event_id.is_some() {
                metrics::record_event_removed();
            }
        }
        RegistryReply::TicketAdded => metrics::record_ticket_added(),
        RegistryReply::TicketRemoved { outcome } => metrics::record_ticket_removed(*outcome),
        RegistryReply::NearestEvents { events } => metrics::record_search(events.len()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use event_finder_core::RegistryError;

    fn shared() -> SharedRegistry {
        SharedRegistry::new(EventRegistry::new([-10, 10], [-10, 10]).unwrap())
    }

    #[tokio::test]
    async fn test_operations_through_handle() {
        let shared = shared();
        let location = Location::new(1, 0);

        let id = shared.create_event(location).await;
        shared.add_ticket(location, 30.51).await.unwrap();
        shared.add_ticket(location, 29.04).await.unwrap();

        let results = shared.find_nearest_events(Location::new(0, 0), 5).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event_id, id);
        assert_eq!(results[0].cheapest_price, 29.04);

        assert_eq!(
            shared.remove_ticket(location, 29.04).await.unwrap(),
            RemoveOutcome::Removed
        );
        assert_eq!(
            shared.state(|r| r.cheapest_price(location)).await.unwrap(),
            30.51
        );

        assert_eq!(shared.remove_event(location).await, Some(id));
        assert_eq!(shared.remove_event(location).await, None);
    }

    #[tokio::test]
    async fn test_add_ticket_without_event_leaves_registry_untouched() {
        let shared = shared();
        let err = shared
            .add_ticket(Location::new(2, 2), 10.0)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(shared.state(EventRegistry::is_empty).await);
    }

    #[tokio::test]
    async fn test_send_routes_commands() {
        let shared = shared();
        let location = Location::new(0, -1);

        let reply = shared
            .send(RegistryCommand::CreateEvent { location })
            .await
            .unwrap();
        assert!(matches!(reply, RegistryReply::EventCreated { .. }));

        let err = shared
            .send(RegistryCommand::AddTicket {
                location: Location::new(5, 5),
                price: 1.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::EventNotFound(Location::new(5, 5)));

        let reply = shared
            .send(RegistryCommand::FindNearest {
                origin: Location::new(0, 0),
                limit: Some(5),
            })
            .await
            .unwrap();
        assert_eq!(
            reply,
            RegistryReply::NearestEvents {
                events: NearbyEvents::new()
            }
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let shared = shared();
        let other = shared.clone();

        other.create_event(Location::new(3, 3)).await;

        assert_eq!(shared.state(EventRegistry::len).await, 1);
    }
}
