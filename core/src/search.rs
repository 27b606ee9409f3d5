//! Nearest-event search.
//!
//! Expands breadth-first from the query location over the 4-connected grid,
//! one ring of equal Manhattan distance at a time, so results come out in
//! non-decreasing distance order. Within a ring, cells are reached in
//! neighbor order (+x, -x, +y, -y) of the previous ring's cells.
//!
//! ```text
//!          2
//!       2  1  2
//!    2  1  o  1  2
//!       2  1  2
//!          2
//! ```
//!
//! Every in-bounds cell is visited at most once. Small grids track visits in
//! a bitmap; large ones in a hash set, so memory follows the explored area
//! rather than the grid size. Sold-out events are passed
//! over but still expanded through, so they never hide events behind them.

use crate::event::{Event, EventId};
use crate::location::{GridBounds, Location};
use crate::registry::EventRegistry;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashSet, VecDeque};

/// Number of results returned when the caller does not choose.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Search results, stored inline up to the default limit.
pub type NearbyEvents = SmallVec<[NearbyEvent; DEFAULT_RESULT_LIMIT]>;

/// One search hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearbyEvent {
    /// The event's id
    pub event_id: EventId,
    /// Where the event is
    pub location: Location,
    /// Cheapest ticket currently listed
    pub cheapest_price: f64,
    /// Manhattan distance from the query location
    pub distance: u64,
}

impl NearbyEvent {
    /// Builds a hit for `event`, or `None` if it is sold out.
    fn qualify(event: &Event, origin: &Location) -> Option<Self> {
        let cheapest_price = event.cheapest_price().ok()?;
        Some(Self {
            event_id: event.id(),
            location: event.location(),
            cheapest_price,
            distance: origin.manhattan_distance(&event.location()),
        })
    }
}

/// Largest grid searched with a dense visited bitmap (one byte per cell).
/// Bigger grids track visited cells in a hash set that grows with the
/// cells actually explored.
const DENSE_VISITED_MAX_CELLS: usize = 1 << 20;

enum VisitedCells {
    Dense(Vec<bool>),
    Sparse(HashSet<usize>),
}

/// Visited flags for the cells of `bounds`, keyed by cell index.
struct Visited<'a> {
    bounds: &'a GridBounds,
    cells: VisitedCells,
}

impl<'a> Visited<'a> {
    fn new(bounds: &'a GridBounds) -> Self {
        let cell_count = bounds.cell_count();
        let cells = if cell_count <= DENSE_VISITED_MAX_CELLS {
            VisitedCells::Dense(vec![false; cell_count])
        } else {
            VisitedCells::Sparse(HashSet::new())
        };
        Self { bounds, cells }
    }

    /// Marks `location` visited. Returns `false` if it was already visited
    /// or lies outside the bounds.
    fn mark(&mut self, location: &Location) -> bool {
        let Some(index) = self.bounds.cell_index(location) else {
            return false;
        };
        match &mut self.cells {
            VisitedCells::Dense(cells) => !std::mem::replace(&mut cells[index], true),
            VisitedCells::Sparse(cells) => cells.insert(index),
        }
    }
}

impl EventRegistry {
    /// Up to `limit` events with tickets available, nearest to `origin` first.
    ///
    /// Ties in distance are broken by breadth-first visitation order. Fewer
    /// than `limit` results means the whole grid was explored. An `origin`
    /// outside the bounds yields no results.
    #[must_use]
    pub fn find_nearest_events(&self, origin: Location, limit: usize) -> NearbyEvents {
        nearest_events(self.bounds(), origin, limit, |location| {
            self.event_at(location)
        })
    }
}

/// Bounded breadth-first search over `bounds` using `lookup` to find events.
pub(crate) fn nearest_events<'e>(
    bounds: &GridBounds,
    origin: Location,
    limit: usize,
    lookup: impl Fn(Location) -> Option<&'e Event>,
) -> NearbyEvents {
    let mut results = NearbyEvents::new();
    if limit == 0 || !bounds.contains(&origin) {
        tracing::debug!(origin = %origin, limit, "Search skipped");
        return results;
    }

    let mut visited = Visited::new(bounds);
    visited.mark(&origin);
    if let Some(hit) = lookup(origin).and_then(|event| NearbyEvent::qualify(event, &origin)) {
        results.push(hit);
    }

    let mut frontier = VecDeque::from([origin]);
    let mut cells_visited = 1_usize;

    'rings: while results.len() < limit && !frontier.is_empty() {
        for _ in 0..frontier.len() {
            let Some(cell) = frontier.pop_front() else {
                break;
            };
            for neighbor in cell.neighbors() {
                if !visited.mark(&neighbor) {
                    continue;
                }
                cells_visited += 1;

                if let Some(hit) =
                    lookup(neighbor).and_then(|event| NearbyEvent::qualify(event, &origin))
                {
                    results.push(hit);
                    if results.len() == limit {
                        break 'rings;
                    }
                }
                frontier.push_back(neighbor);
            }
        }
    }

    tracing::debug!(
        origin = %origin,
        limit,
        found = results.len(),
        cells_visited,
        "Search completed"
    );
    results
}
