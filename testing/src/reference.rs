//! Brute-force reference for the nearest-event search.
//!
//! On a rectangular grid, breadth-first distance equals Manhattan distance,
//! so the search must return the `limit` smallest distances among in-bounds
//! events with tickets. The order of equal-distance hits depends on
//! visitation order and is not checked here.

use event_finder_core::{EventRegistry, Location};

/// Sorted distances the search must report for `origin` and `limit`.
///
/// Empty when `origin` lies outside the registry's bounds.
#[must_use]
pub fn expected_distances(registry: &EventRegistry, origin: Location, limit: usize) -> Vec<u64> {
    if !registry.bounds().contains(&origin) {
        return Vec::new();
    }

    let mut distances: Vec<u64> = registry
        .events()
        .filter(|event| event.has_tickets() && registry.bounds().contains(&event.location()))
        .map(|event| origin.manhattan_distance(&event.location()))
        .collect();
    distances.sort_unstable();
    distances.truncate(limit);
    distances
}

/// Locations of all qualifying in-bounds events strictly closer than `distance`.
#[must_use]
pub fn qualifying_within(registry: &EventRegistry, origin: Location, distance: u64) -> Vec<Location> {
    let mut locations: Vec<Location> = registry
        .events()
        .filter(|event| event.has_tickets() && registry.bounds().contains(&event.location()))
        .map(|event| event.location())
        .filter(|location| origin.manhattan_distance(location) < distance)
        .collect();
    locations.sort_unstable();
    locations
}
