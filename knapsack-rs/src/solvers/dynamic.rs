use anyhow::{Result, anyhow};
use log::debug;
use thousands::Separable;

use crate::entities::{Item, KPInstance, Profit};
use crate::solvers::{Budget, Outcome};

/// Finds the optimum with a capacity-indexed dynamic programming table, see [`DPTable`].
///
/// Runs in `O(n * capacity)` time and `O(capacity)` space.
/// Fails if the table for the instance's capacity cannot be allocated.
pub fn solve(instance: &KPInstance, budget: Budget) -> Result<Outcome> {
    let mut table = DPTable::new(instance.capacity)?;

    for (i, item) in instance.items.iter().enumerate() {
        if budget.is_exhausted() {
            debug!(
                "[DP] budget exhausted after {}/{} items",
                i.separate_with_commas(),
                instance.n_items().separate_with_commas()
            );
            return Ok(Outcome::Exceeded);
        }
        table.insert(item);
    }

    Ok(Outcome::Completed(table.best()))
}

/// One-dimensional dynamic programming table for the 0/1 knapsack problem.
///
/// Entry `w` holds the best profit attainable within a weight budget of `w`,
/// using only the items inserted so far.
#[derive(Clone, Debug)]
pub struct DPTable {
    entries: Vec<Profit>,
}

impl DPTable {
    /// Creates an all-zero table for weight budgets `0..=capacity`
    pub fn new(capacity: u64) -> Result<Self> {
        let len = usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or_else(|| anyhow!("instance too large: capacity {capacity} is not addressable"))?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(len).map_err(|e| {
            anyhow!("instance too large: could not allocate table for capacity {capacity} ({e})")
        })?;
        entries.resize(len, Profit::ZERO);

        Ok(Self { entries })
    }

    /// Updates the table with a new item.
    ///
    /// Weight budgets are visited in descending order: entry `w - item.weight` is then always read
    /// before it is updated in the same pass, so the item is used at most once.
    pub fn insert(&mut self, item: &Item) {
        let Ok(weight) = usize::try_from(item.weight) else {
            return; //heavier than any addressable capacity
        };
        let capacity = self.capacity();
        if weight > capacity {
            return;
        }
        for w in (weight..=capacity).rev() {
            let with_item = self.entries[w - weight] + item.value;
            if with_item > self.entries[w] {
                self.entries[w] = with_item;
            }
        }
    }

    /// Best profit attainable within the full capacity
    pub fn best(&self) -> Profit {
        *self.entries.last().expect("table always holds at least one entry")
    }

    pub fn capacity(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[Profit] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions::dp_pass_never_decreases;
    use std::time::Duration;

    #[test]
    fn item_is_not_reused() {
        // an unbounded knapsack would take the item twice for a profit of 6.00
        let instance = KPInstance::new(vec![Item::new(2, 3.0)], 4);
        assert_eq!(
            solve(&instance, Budget::unlimited()).unwrap(),
            Outcome::Completed(Profit::from_f64(3.0))
        );
    }

    #[test]
    fn zero_capacity() {
        let instance = KPInstance::new(vec![Item::new(1, 5.0), Item::new(2, 1.0)], 0);
        assert_eq!(
            solve(&instance, Budget::unlimited()).unwrap(),
            Outcome::Completed(Profit::ZERO)
        );
    }

    #[test]
    fn table_entries_never_decrease() {
        let items = [Item::new(3, 4.0), Item::new(2, 3.0), Item::new(5, 6.0), Item::new(4, 5.0)];
        let mut table = DPTable::new(10).unwrap();
        for item in &items {
            let before = table.clone();
            table.insert(item);
            assert!(dp_pass_never_decreases(before.entries(), table.entries()));
        }
        assert_eq!(table.best(), Profit::from_f64(13.0));
    }

    #[test]
    fn table_is_monotone_in_weight_budget() {
        let mut table = DPTable::new(20).unwrap();
        for item in [Item::new(7, 2.5), Item::new(3, 1.25), Item::new(11, 9.0)] {
            table.insert(&item);
        }
        assert!(table.entries().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn exhausted_budget_is_reported() {
        let instance = KPInstance::new(vec![Item::new(1, 1.0)], 10);
        assert_eq!(
            solve(&instance, Budget::from_now(Duration::ZERO)).unwrap(),
            Outcome::Exceeded
        );
    }

    #[test]
    fn unaddressable_capacity_is_an_error() {
        let err = DPTable::new(u64::MAX).unwrap_err();
        assert!(err.to_string().contains("instance too large"));
    }
}
