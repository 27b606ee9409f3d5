//! Concurrent access through `SharedRegistry`.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::float_cmp)] // Prices are compared exactly as inserted

use event_finder_core::{Location, RegistryCommand, RegistryReply, RemoveOutcome};
use event_finder_runtime::SharedRegistry;
use event_finder_testing::{init_test_tracing, sample_registry};
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_ticket_adds_are_all_applied() {
    init_test_tracing();
    let shared = SharedRegistry::new(sample_registry());
    let location = Location::new(3, 5);

    let mut tasks = JoinSet::new();
    for i in 0..100_u32 {
        let handle = shared.clone();
        tasks.spawn(async move { handle.add_ticket(location, f64::from(i)).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let (count, cheapest) = shared
        .state(|registry| {
            let event = registry.event_at(location).unwrap();
            (event.tickets().len(), event.cheapest_price().unwrap())
        })
        .await;
    assert_eq!(count, 102);
    assert_eq!(cheapest, 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_purchases_never_oversell() {
    let shared = SharedRegistry::new(sample_registry());
    let location = Location::new(1, 0);

    // 20 buyers race for the same two tickets.
    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let handle = shared.clone();
        let price = if i % 2 == 0 { 30.51 } else { 29.04 };
        tasks.spawn(async move { handle.remove_ticket(location, price).await });
    }

    let mut removed = 0;
    while let Some(result) = tasks.join_next().await {
        if result.unwrap().unwrap() == RemoveOutcome::Removed {
            removed += 1;
        }
    }

    assert_eq!(removed, 2);
    let remaining = shared
        .state(|registry| registry.event_at(location).unwrap().tickets().len())
        .await;
    assert_eq!(remaining, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_searches_interleaved_with_mutations_see_whole_operations() {
    let shared = SharedRegistry::new(sample_registry());
    let origin = Location::new(0, 0);

    let writer = {
        let handle = shared.clone();
        tokio::spawn(async move {
            for x in 2..=10 {
                let location = Location::new(x, -x);
                handle.create_event(location).await;
                handle.add_ticket(location, 5.0).await.unwrap();
            }
        })
    };

    let mut readers = JoinSet::new();
    for _ in 0..8 {
        let handle = shared.clone();
        readers.spawn(async move {
            let reply = handle
                .send(RegistryCommand::FindNearest {
                    origin,
                    limit: Some(20),
                })
                .await
                .unwrap();
            let RegistryReply::NearestEvents { events } = reply else {
                return false;
            };
            events
                .iter()
                .all(|hit| hit.cheapest_price.is_finite() && hit.distance >= 1)
        });
    }

    writer.await.unwrap();
    while let Some(result) = readers.join_next().await {
        assert!(result.unwrap());
    }

    let results = shared.find_nearest_events(origin, 20).await;
    assert_eq!(results.len(), 6 + 9);
}
