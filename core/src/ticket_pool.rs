//! Price-ordered pool of resellable tickets for a single event.
//!
//! The pool is a multiset: every inserted price is tracked as its own ticket,
//! so two tickets listed at the same price are removed one at a time.
//!
//! Prices are ordered with [`f64::total_cmp`]. Removal therefore matches on
//! the exact value (`-0.0` and `0.0` are different tickets, and a `NaN`
//! price can be removed by passing the same `NaN`).

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Totally ordered price key.
#[derive(Clone, Copy, Debug)]
struct PriceKey(f64);

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// What a single-ticket removal did.
///
/// Only [`RemoveOutcome::Removed`] changes the pool; the other two are soft
/// signals, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    /// One ticket at the requested price was removed
    Removed,
    /// The pool has tickets, but none at the requested price
    NotFound,
    /// The pool had no tickets at all
    PoolEmpty,
}

/// Ordered multiset of ticket prices.
#[derive(Clone, Debug, Default)]
pub struct TicketPool {
    prices: BTreeMap<PriceKey, usize>,
    len: usize,
}

impl TicketPool {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prices: BTreeMap::new(),
            len: 0,
        }
    }

    /// Adds one ticket at `price`.
    pub fn insert(&mut self, price: f64) {
        *self.prices.entry(PriceKey(price)).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes a single ticket listed at exactly `price`.
    pub fn remove_one(&mut self, price: f64) -> RemoveOutcome {
        if self.is_empty() {
            return RemoveOutcome::PoolEmpty;
        }

        let key = PriceKey(price);
        match self.prices.get_mut(&key) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.prices.remove(&key);
            }
            None => return RemoveOutcome::NotFound,
        }
        self.len -= 1;
        RemoveOutcome::Removed
    }

    /// Cheapest price in the pool, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyPool`] if the pool holds no tickets.
    pub fn peek_min(&self) -> Result<f64> {
        self.prices
            .first_key_value()
            .map(|(key, _)| key.0)
            .ok_or(RegistryError::EmptyPool)
    }

    /// Number of tickets, counting duplicates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the pool has no tickets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of tickets listed at exactly `price`.
    #[must_use]
    pub fn count_at(&self, price: f64) -> usize {
        self.prices.get(&PriceKey(price)).copied().unwrap_or(0)
    }

    /// All prices in ascending order, repeating duplicates.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.prices
            .iter()
            .flat_map(|(key, count)| std::iter::repeat_n(key.0, *count))
    }
}

impl FromIterator<f64> for TicketPool {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut pool = Self::new();
        for price in iter {
            pool.insert(price);
        }
        pool
    }
}

impl Extend<f64> for TicketPool {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for price in iter {
            self.insert(price);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_peek_min_returns_cheapest() {
        let pool: TicketPool = [30.51, 29.04].into_iter().collect();
        assert_eq!(pool.peek_min().unwrap(), 29.04);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_remove_one_duplicate_leaves_the_other() {
        let mut pool: TicketPool = [10.0, 10.0, 20.0].into_iter().collect();

        assert_eq!(pool.remove_one(10.0), RemoveOutcome::Removed);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.count_at(10.0), 1);
        assert_eq!(pool.count_at(20.0), 1);
        assert_eq!(pool.peek_min().unwrap(), 10.0);
    }

    #[test]
    fn test_remove_missing_price_is_noop() {
        let mut pool: TicketPool = [10.0, 20.0].into_iter().collect();

        assert_eq!(pool.remove_one(15.0), RemoveOutcome::NotFound);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_empty_pool_guard() {
        let mut pool = TicketPool::new();

        assert_eq!(pool.remove_one(10.0), RemoveOutcome::PoolEmpty);
        assert_eq!(pool.peek_min(), Err(RegistryError::EmptyPool));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_removing_last_ticket_empties_pool() {
        let mut pool = TicketPool::new();
        pool.insert(12.5);
        assert_eq!(pool.remove_one(12.5), RemoveOutcome::Removed);
        assert!(pool.is_empty());
        assert_eq!(pool.peek_min(), Err(RegistryError::EmptyPool));
    }

    #[test]
    fn test_signed_zero_is_exact_match() {
        let mut pool: TicketPool = [0.0].into_iter().collect();
        assert_eq!(pool.remove_one(-0.0), RemoveOutcome::NotFound);
        assert_eq!(pool.remove_one(0.0), RemoveOutcome::Removed);
    }

    #[test]
    fn test_nan_price_can_be_removed() {
        let mut pool: TicketPool = [f64::NAN, 5.0].into_iter().collect();
        assert_eq!(pool.peek_min().unwrap(), 5.0);
        assert_eq!(pool.remove_one(f64::NAN), RemoveOutcome::Removed);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_iter_is_ascending_with_duplicates() {
        let mut pool = TicketPool::new();
        pool.extend([3.0, 1.0, 2.0, 1.0]);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![1.0, 1.0, 2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn prop_pool_matches_sorted_vec(
            inserts in prop::collection::vec(0u32..50, 0..40),
            removals in prop::collection::vec(0u32..50, 0..40),
        ) {
            let mut pool = TicketPool::new();
            let mut model: Vec<f64> = Vec::new();

            for cents in &inserts {
                let price = f64::from(*cents);
                pool.insert(price);
                model.push(price);
            }

            for cents in &removals {
                let price = f64::from(*cents);
                let outcome = pool.remove_one(price);
                let expected = if model.is_empty() {
                    RemoveOutcome::PoolEmpty
                } else if let Some(pos) = model.iter().position(|p| *p == price) {
                    model.swap_remove(pos);
                    RemoveOutcome::Removed
                } else {
                    RemoveOutcome::NotFound
                };
                prop_assert_eq!(outcome, expected);
            }

            model.sort_by(f64::total_cmp);
            prop_assert_eq!(pool.len(), model.len());
            prop_assert_eq!(pool.iter().collect::<Vec<_>>(), model.clone());
            match model.first() {
                Some(min) => prop_assert_eq!(pool.peek_min().unwrap(), *min),
                None => prop_assert_eq!(pool.peek_min(), Err(RegistryError::EmptyPool)),
            }
        }
    }
}
