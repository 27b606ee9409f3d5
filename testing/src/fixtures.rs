//! Registry fixtures.

use event_finder_core::{EventRegistry, GridBounds, Location};

/// The sample scenario: six events with two tickets each on a 21x21 grid.
pub const SAMPLE_EVENTS: [((i64, i64), [f64; 2]); 6] = [
    ((1, 0), [30.51, 29.04]),
    ((0, 1), [20.32, 33.51]),
    ((1, 1), [32.51, 38.14]),
    ((0, -1), [23.45, 43.34]),
    ((-1, 0), [32.36, 20.51]),
    ((3, 5), [14.23, 34.52]),
];

/// Grid range used by the sample scenario, on both axes.
pub const SAMPLE_RANGE: [i64; 2] = [-10, 10];

/// Builder for registries in a known state.
///
/// Events are created in call order, so ids follow the order of
/// [`event`](Self::event) and [`sold_out_event`](Self::sold_out_event) calls.
#[derive(Debug)]
pub struct RegistryFixture {
    registry: EventRegistry,
}

impl RegistryFixture {
    /// Empty fixture over the sample grid, `[-10, 10]` on both axes.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_bounds(
            GridBounds::new(SAMPLE_RANGE, SAMPLE_RANGE).expect("sample range is valid"),
        )
    }

    /// Empty fixture over `bounds`.
    #[must_use]
    pub fn with_bounds(bounds: GridBounds) -> Self {
        Self {
            registry: EventRegistry::with_bounds(bounds),
        }
    }

    /// Adds an event at `location` with one ticket per price.
    ///
    /// # Panics
    ///
    /// Never in practice: the event is created before its tickets are added.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn event(mut self, location: impl Into<Location>, prices: &[f64]) -> Self {
        let location = location.into();
        self.registry.create_event(location);
        for price in prices {
            self.registry
                .add_ticket(location, *price)
                .expect("event was just created");
        }
        self
    }

    /// Adds an event at `location` with no tickets.
    #[must_use]
    pub fn sold_out_event(self, location: impl Into<Location>) -> Self {
        self.event(location, &[])
    }

    /// Finishes the fixture.
    #[must_use]
    pub fn build(self) -> EventRegistry {
        self.registry
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding [`SAMPLE_EVENTS`], created in order (ids 1 through 6).
#[must_use]
pub fn sample_registry() -> EventRegistry {
    SAMPLE_EVENTS
        .iter()
        .fold(RegistryFixture::new(), |fixture, (location, prices)| {
            fixture.event(*location, prices)
        })
        .build()
}
