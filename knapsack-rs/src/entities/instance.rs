use crate::entities::{Item, Profit};

/// A 0/1 knapsack problem instance: a set of items and the capacity of the knapsack.
/// The order of the items is irrelevant to the optimum, solvers never reorder them.
#[derive(Clone, Debug)]
pub struct KPInstance {
    pub items: Vec<Item>,
    pub capacity: u64,
}

impl KPInstance {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }
}

/// Estimated peak working memory (in bytes) needed to hold an instance of `n_items` items
/// and run every solver on it with the given `capacity`.
///
/// Consists of the item vector, the dynamic programming table (one [`Profit`] per unit of capacity)
/// and the permutation used by the greedy solver. The exact solvers only use memory linear in `n_items`.
pub fn estimated_footprint(n_items: usize, capacity: u64) -> u64 {
    let n_items = n_items as u64;
    let items = n_items.saturating_mul(size_of::<Item>() as u64);
    let dp_table = capacity
        .saturating_add(1)
        .saturating_mul(size_of::<Profit>() as u64);
    let greedy_order = n_items.saturating_mul(size_of::<usize>() as u64);

    items.saturating_add(dp_table).saturating_add(greedy_order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_grows_with_capacity_and_items() {
        let small = estimated_footprint(5, 10_000);
        assert!(estimated_footprint(5, 1_000_000) > small);
        assert!(estimated_footprint(320_000, 10_000) > small);
    }

    #[test]
    fn footprint_of_empty_instance_is_dp_table() {
        assert_eq!(estimated_footprint(0, 0), size_of::<Profit>() as u64);
    }
}
