//! Business metrics for the event registry.
//!
//! Recorded through the [`metrics`] facade; nothing is exported unless the
//! application installs a recorder.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `event_finder_events_created_total` - Events created (including replacements)
//! - `event_finder_events_removed_total` - Events actually removed
//! - `event_finder_tickets_added_total` - Tickets listed
//! - `event_finder_tickets_removed_total{outcome}` - Ticket removals by outcome
//! - `event_finder_searches_total` - Nearest-event searches run
//!
//! ## Histograms
//! - `event_finder_search_results` - Number of events returned per search

use event_finder_core::RemoveOutcome;
use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Register all metric descriptions.
///
/// Call once at startup, after installing a recorder.
pub fn register_metrics() {
    describe_counter!(
        "event_finder_events_created_total",
        "Total number of events created, including replacements"
    );
    describe_counter!(
        "event_finder_events_removed_total",
        "Total number of events removed"
    );
    describe_counter!(
        "event_finder_tickets_added_total",
        "Total number of tickets listed for resale"
    );
    describe_counter!(
        "event_finder_tickets_removed_total",
        "Total number of ticket removals by outcome (removed, not_found, pool_empty)"
    );
    describe_counter!(
        "event_finder_searches_total",
        "Total number of nearest-event searches"
    );
    describe_histogram!(
        "event_finder_search_results",
        "Number of events returned per nearest-event search"
    );
}

pub(crate) fn record_event_created() {
    counter!("event_finder_events_created_total").increment(1);
}

pub(crate) fn record_event_removed() {
    counter!("event_finder_events_removed_total").increment(1);
}

pub(crate) fn record_ticket_added() {
    counter!("event_finder_tickets_added_total").increment(1);
}

pub(crate) fn record_ticket_removed(outcome: RemoveOutcome) {
    let outcome = match outcome {
        RemoveOutcome::Removed => "removed",
        RemoveOutcome::NotFound => "not_found",
        RemoveOutcome::PoolEmpty => "pool_empty",
    };
    counter!("event_finder_tickets_removed_total", "outcome" => outcome).increment(1);
}

#[allow(clippy::cast_precision_loss)] // Result counts are small
pub(crate) fn record_search(results: usize) {
    counter!("event_finder_searches_total").increment(1);
    histogram!("event_finder_search_results").record(results as f64);
}
