//! Event Finder Demo
//!
//! Places six sample events on a 21x21 grid, lists two resale tickets for
//! each, then finds the events nearest to a random user location along with
//! their cheapest ticket.
//!
//! # Usage
//!
//! ```bash
//! # Random location
//! cargo run --bin event-finder-demo
//!
//! # Fixed location, one event sold out, JSON output
//! EVENT_FINDER_ORIGIN_X=0 EVENT_FINDER_ORIGIN_Y=0 \
//! EVENT_FINDER_SELL_OUT_SECOND=true EVENT_FINDER_OUTPUT=json \
//!     cargo run --bin event-finder-demo
//! ```

mod config;

use config::Config;
use event_finder_core::{EventRegistry, Location, NearbyEvent};
use event_finder_runtime::SharedRegistry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info,event_finder_core=debug";

/// Sample events: location and the prices of their two listed tickets.
const SAMPLE_EVENTS: [((i64, i64), [f64; 2]); 6] = [
    ((1, 0), [30.51, 29.04]),
    ((0, 1), [20.32, 33.51]),
    ((1, 1), [32.51, 38.14]),
    ((0, -1), [23.45, 43.34]),
    ((-1, 0), [32.36, 20.51]),
    ((3, 5), [14.23, 34.52]),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    event_finder_runtime::metrics::register_metrics();

    let registry = EventRegistry::new(config.grid.x_range(), config.grid.y_range())?;
    let shared = SharedRegistry::new(registry);

    for (location, prices) in SAMPLE_EVENTS {
        let location = Location::from(location);
        shared.create_event(location).await;
        for price in prices {
            shared.add_ticket(location, price).await?;
        }
    }
    tracing::info!(events = SAMPLE_EVENTS.len(), "Sample events created");

    if config.demo.sell_out_second {
        let (location, prices) = SAMPLE_EVENTS[1];
        let location = Location::from(location);
        for price in prices {
            shared.remove_ticket(location, price).await?;
        }
        tracing::info!(location = %location, "Sold out second sample event");
    }

    let origin = user_location(&config);
    println!("Please Input Coordinates:");
    println!("{},{}", origin.x, origin.y);

    let results = shared
        .find_nearest_events(origin, config.search.result_limit)
        .await;

    if config.demo.json_output {
        println!("{}", serde_json::to_string_pretty(results.as_slice())?);
    } else {
        println!("Closest Event to {origin}:");
        for hit in &results {
            println!("{}", render(hit));
        }
    }

    Ok(())
}

/// The configured origin, or a random cell inside the grid.
fn user_location(config: &Config) -> Location {
    if let Some(origin) = config.demo.origin {
        return Location::from(origin);
    }

    let mut rng = config
        .demo
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let [x_min, x_max] = config.grid.x_range();
    let [y_min, y_max] = config.grid.y_range();
    Location::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max))
}

fn render(hit: &NearbyEvent) -> String {
    format!(
        "Event{} - ${}, Distance {}",
        hit.event_id, hit.cheapest_price, hit.distance
    )
}
