//! Configuration management for the demo.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Grid the events live on
    pub grid: GridConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Demo driver settings
    pub demo: DemoConfig,
}

/// Grid bounds, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// Smallest x coordinate
    pub x_min: i64,
    /// Largest x coordinate
    pub x_max: i64,
    /// Smallest y coordinate
    pub y_min: i64,
    /// Largest y coordinate
    pub y_max: i64,
}

impl GridConfig {
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
}

/// Search configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of events returned (default: 5)
    pub result_limit: usize,
}

/// Demo driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seed for the random user location (random each run when unset)
    pub seed: Option<u64>,
    /// Fixed user location; overrides the random one when both coordinates are set
    pub origin: Option<(i64, i64)>,
    /// Sell every ticket of the second sample event before searching
    pub sell_out_second: bool,
    /// Print results as JSON instead of text
    pub json_output: bool,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            grid: GridConfig {
                x_min: parse_var(&lookup, "EVENT_FINDER_X_MIN").unwrap_or(-10),
                x_max: parse_var(&lookup, "EVENT_FINDER_X_MAX").unwrap_or(10),
                y_min: parse_var(&lookup, "EVENT_FINDER_Y_MIN").unwrap_or(-10),
                y_max: parse_var(&lookup, "EVENT_FINDER_Y_MAX").unwrap_or(10),
            },
            search: SearchConfig {
                result_limit: parse_var(&lookup, "EVENT_FINDER_RESULT_LIMIT")
                    .unwrap_or(event_finder_core::DEFAULT_RESULT_LIMIT),
            },
            demo: DemoConfig {
                seed: parse_var(&lookup, "EVENT_FINDER_SEED"),
                origin: parse_var(&lookup, "EVENT_FINDER_ORIGIN_X")
                    .zip(parse_var(&lookup, "EVENT_FINDER_ORIGIN_Y")),
                sell_out_second: parse_var(&lookup, "EVENT_FINDER_SELL_OUT_SECOND")
                    .unwrap_or(false),
                json_output: lookup("EVENT_FINDER_OUTPUT")
                    .is_some_and(|format| format.eq_ignore_ascii_case("json")),
            },
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}
