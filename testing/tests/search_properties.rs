//! Property tests for the registry and nearest-event search.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use event_finder_core::{EventRegistry, GridBounds, Location};
use event_finder_testing::properties::{arb_bounds, arb_location_near, arb_placements};
use event_finder_testing::reference::{expected_distances, qualifying_within};
use proptest::prelude::*;
use std::collections::HashSet;

fn build(bounds: GridBounds, placements: &[(Location, Vec<f64>)]) -> EventRegistry {
    let mut registry = EventRegistry::with_bounds(bounds);
    for (location, prices) in placements {
        registry.create_event(*location);
        for price in prices {
            registry.add_ticket(*location, *price).unwrap();
        }
    }
    registry
}

fn scenario() -> impl Strategy<Value = (GridBounds, Vec<(Location, Vec<f64>)>, Location, usize)> {
    arb_bounds().prop_flat_map(|bounds| {
        (
            Just(bounds),
            arb_placements(bounds, 2),
            arb_location_near(bounds, 2),
            0_usize..10,
        )
    })
}

proptest! {
    #[test]
    fn prop_results_are_the_nearest_qualifying_events(
        (bounds, placements, origin, limit) in scenario()
    ) {
        let registry = build(bounds, &placements);
        let results = registry.find_nearest_events(origin, limit);

        let distances: Vec<u64> = results.iter().map(|hit| hit.distance).collect();
        prop_assert_eq!(&distances, &expected_distances(&registry, origin, limit));

        // Non-decreasing distance order.
        prop_assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));

        // Every hit is a distinct, in-bounds event with tickets, reported accurately.
        let mut seen = HashSet::new();
        for hit in &results {
            prop_assert!(seen.insert(hit.location));
            prop_assert!(bounds.contains(&hit.location));
            let event = registry.event_at(hit.location).unwrap();
            prop_assert_eq!(event.id(), hit.event_id);
            prop_assert_eq!(event.cheapest_price().unwrap().to_bits(), hit.cheapest_price.to_bits());
            prop_assert_eq!(origin.manhattan_distance(&hit.location), hit.distance);
        }

        // Nothing strictly closer than the farthest hit was skipped.
        if let Some(farthest) = distances.last() {
            let mut closer: Vec<Location> = results
                .iter()
                .filter(|hit| hit.distance < *farthest)
                .map(|hit| hit.location)
                .collect();
            closer.sort_unstable();
            prop_assert_eq!(closer, qualifying_within(&registry, origin, *farthest));
        }
    }

    #[test]
    fn prop_out_of_bounds_origin_finds_nothing(
        (bounds, placements, origin, limit) in scenario()
    ) {
        prop_assume!(!bounds.contains(&origin));
        let registry = build(bounds, &placements);
        prop_assert!(registry.find_nearest_events(origin, limit).is_empty());
    }

    #[test]
    fn prop_ids_strictly_increase_and_are_never_reused(
        (bounds, placements, _origin, _limit) in scenario(),
        remove_mask in prop::collection::vec(any::<bool>(), 24),
    ) {
        let mut registry = EventRegistry::with_bounds(bounds);
        let mut issued = Vec::new();

        for ((location, _), remove) in placements.iter().zip(&remove_mask) {
            issued.push(registry.create_event(*location));
            if *remove {
                registry.remove_event(*location);
            }
        }

        prop_assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(registry.last_event_id(), issued.last().copied());
    }

    #[test]
    fn prop_at_most_one_event_per_location(
        (bounds, placements, _origin, _limit) in scenario()
    ) {
        let registry = build(bounds, &placements);

        let distinct: HashSet<Location> = placements.iter().map(|(location, _)| *location).collect();
        prop_assert_eq!(registry.len(), distinct.len());

        // The surviving event at each location is the last one created there,
        // holding only the tickets added after its creation.
        for location in distinct {
            let (index, (_, prices)) = placements
                .iter()
                .enumerate()
                .rev()
                .find(|(_, (placed, _))| *placed == location)
                .unwrap();
            let event = registry.event_at(location).unwrap();
            prop_assert_eq!(event.id().get(), u64::try_from(index).unwrap() + 1);
            prop_assert_eq!(event.tickets().len(), prices.len());
        }
    }
}
