//! Error types for registry operations.
//!
//! Every error here is recoverable: a failed operation leaves the registry
//! exactly as it was before the call.

use crate::location::Location;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while building or mutating an [`EventRegistry`](crate::EventRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An axis range is malformed (`min > max`, or longer than `usize` can count).
    #[error("Invalid grid range on {axis} axis: [{min}, {max}]")]
    InvalidRange {
        /// Axis name (`x` or `y`)
        axis: &'static str,
        /// Lower bound supplied by the caller
        min: i64,
        /// Upper bound supplied by the caller
        max: i64,
    },

    /// Both axis ranges are valid but the grid has more cells than `usize` can index.
    #[error("Grid of {width}x{height} cells is too large to index")]
    GridTooLarge {
        /// Number of columns
        width: usize,
        /// Number of rows
        height: usize,
    },

    /// A ticket operation targeted a location that holds no event.
    #[error("No event exists at {0}")]
    EventNotFound(Location),

    /// The cheapest price was requested from an event with zero tickets.
    #[error("No tickets available")]
    EmptyPool,
}

impl RegistryError {
    /// Whether this error reports a missing event.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_))
    }
}
