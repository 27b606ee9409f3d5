//! # Event Finder Runtime
//!
//! Shared access to an [`EventRegistry`](event_finder_core::EventRegistry)
//! from many tasks.
//!
//! The core registry assumes a single caller. This crate puts the whole
//! registry behind one lock so that every create/remove/add/remove-ticket
//! call and every search is sequenced, and records business metrics for
//! each operation.
//!
//! ## Example
//!
//! ```ignore
//! use event_finder_runtime::SharedRegistry;
//!
//! let shared = SharedRegistry::new(registry);
//!
//! // Hand clones to request handlers
//! let handle = shared.clone();
//! tokio::spawn(async move {
//!     handle.add_ticket(venue, 42.0).await
//! });
//!
//! // Read state
//! let events = shared.state(|r| r.len()).await;
//! ```

/// Business metrics for registry operations
pub mod metrics;

/// Lock-serialized registry handle
pub mod shared;

pub use shared::SharedRegistry;
