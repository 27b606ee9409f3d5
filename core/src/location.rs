//! Grid coordinates and the bounded region events live in.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neighbor offsets in expansion order: +x, -x, +y, -y.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A cell on the integer grid.
///
/// Locations compare and hash by value, so two locations with the same
/// coordinates always refer to the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Horizontal coordinate
    pub x: i64,
    /// Vertical coordinate
    pub y: i64,
}

impl Location {
    /// Creates a location from its coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.
    #[must_use]
    pub const fn manhattan_distance(&self, other: &Self) -> u64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// The 4-connected neighbors in +x, -x, +y, -y order.
    ///
    /// Neighbors whose coordinates would overflow `i64` are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }
}

impl From<(i64, i64)> for Location {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Inclusive rectangular region of valid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
    width: usize,
    height: usize,
}

impl GridBounds {
    /// Builds bounds from inclusive `[min, max]` ranges on each axis.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidRange`] if `min > max` on either axis,
    /// or [`RegistryError::GridTooLarge`] if the cell count overflows `usize`.
    pub fn new(x_range: [i64; 2], y_range: [i64; 2]) -> Result<Self> {
        let width = axis_len("x", x_range)?;
        let height = axis_len("y", y_range)?;

        if width.checked_mul(height).is_none() {
            return Err(RegistryError::GridTooLarge { width, height });
        }

        Ok(Self {
            x_min: x_range[0],
            x_max: x_range[1],
            y_min: y_range[0],
            y_max: y_range[1],
            width,
            height,
        })
    }

    /// Inclusive x range.
    #[must_use]
    pub const fn x_range(&self) -> [i64; 2] {
        [self.x_min, self.x_max]
    }

    /// Inclusive y range.
    #[must_use]
    pub const fn y_range(&self) -> [i64; 2] {
        [self.y_min, self.y_max]
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells in the region.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        // Checked at construction.
        self.width * self.height
    }

    /// Whether `location` lies inside the region.
    #[must_use]
    pub const fn contains(&self, location: &Location) -> bool {
        location.x >= self.x_min
            && location.x <= self.x_max
            && location.y >= self.y_min
            && location.y <= self.y_max
    }

    /// Row-major index of `location` in `0..cell_count()`.
    ///
    /// Each axis is offset by its own minimum. Returns `None` outside the region.
    #[must_use]
    pub fn cell_index(&self, location: &Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let column = usize::try_from(location.x.abs_diff(self.x_min)).ok()?;
        let row = usize::try_from(location.y.abs_diff(self.y_min)).ok()?;
        Some(column * self.height + row)
    }
}

fn axis_len(axis: &'static str, [min, max]: [i64; 2]) -> Result<usize> {
    let invalid = || RegistryError::InvalidRange { axis, min, max };

    if min > max {
        return Err(invalid());
    }
    max.abs_diff(min)
        .checked_add(1)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or_else(invalid)
}
