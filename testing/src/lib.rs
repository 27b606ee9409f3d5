//! # Event Finder Testing
//!
//! Testing utilities for the event finder crates.
//!
//! This crate provides:
//! - Registry fixtures and the standard six-event sample scenario
//! - A brute-force reference for checking search results
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use event_finder_core::Location;
//! use event_finder_testing::RegistryFixture;
//!
//! let registry = RegistryFixture::new()
//!     .event((1, 0), &[30.51, 29.04])
//!     .sold_out_event((0, 1))
//!     .build();
//!
//! let nearest = registry.find_nearest_events(Location::new(0, 0), 5);
//! assert_eq!(nearest.len(), 1);
//! ```

pub mod fixtures;
pub mod reference;

/// Property-based testing utilities using proptest.
pub mod properties {
    use event_finder_core::{GridBounds, Location};
    use proptest::prelude::*;

    /// Small grids with arbitrary (possibly negative, possibly asymmetric) offsets.
    pub fn arb_bounds() -> impl Strategy<Value = GridBounds> {
        (-20_i64..20, 0_i64..12, -20_i64..20, 0_i64..12).prop_filter_map(
            "bounds must be valid",
            |(x_min, width, y_min, height)| {
                GridBounds::new([x_min, x_min + width], [y_min, y_min + height]).ok()
            },
        )
    }

    /// A location inside `bounds`.
    pub fn arb_location_in(bounds: GridBounds) -> impl Strategy<Value = Location> {
        let [x_min, x_max] = bounds.x_range();
        let [y_min, y_max] = bounds.y_range();
        (x_min..=x_max, y_min..=y_max).prop_map(|(x, y)| Location::new(x, y))
    }

    /// A location up to `margin` cells outside `bounds` on any side.
    pub fn arb_location_near(bounds: GridBounds, margin: i64) -> impl Strategy<Value = Location> {
        let [x_min, x_max] = bounds.x_range();
        let [y_min, y_max] = bounds.y_range();
        (x_min - margin..=x_max + margin, y_min - margin..=y_max + margin)
            .prop_map(|(x, y)| Location::new(x, y))
    }

    /// Ticket prices in cents-precision dollars.
    pub fn arb_price() -> impl Strategy<Value = f64> {
        (0_u32..10_000).prop_map(|cents| f64::from(cents) / 100.0)
    }

    /// Events to place: location and ticket prices (possibly none).
    pub fn arb_placements(
        bounds: GridBounds,
        margin: i64,
    ) -> impl Strategy<Value = Vec<(Location, Vec<f64>)>> {
        prop::collection::vec(
            (
                arb_location_near(bounds, margin),
                prop::collection::vec(arb_price(), 0..4),
            ),
            0..24,
        )
    }
}

/// Install a `tracing` subscriber for test output.
///
/// Safe to call from many tests; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use fixtures::{RegistryFixture, SAMPLE_EVENTS, sample_registry};
pub use reference::expected_distances;
