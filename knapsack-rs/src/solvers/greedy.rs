use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::NotNan;

use crate::entities::{KPInstance, Profit};
use crate::util::assertions;

/// Approximates the optimum by filling the knapsack in order of descending density.
///
/// Every item that still fits the remaining capacity is taken, the others are skipped (never split).
/// Not guaranteed to be optimal. Runs in `O(n log n)`.
pub fn solve(instance: &KPInstance) -> Profit {
    let mut remaining = instance.capacity;
    let mut selected = vec![];

    for i in density_order(instance) {
        if remaining == 0 {
            break;
        }
        let item = instance.item(i);
        if item.weight <= remaining {
            remaining -= item.weight;
            selected.push(i);
        }
    }

    debug_assert!(assertions::selection_is_feasible(instance, &selected));

    selected.iter().map(|&i| instance.item(i).value).sum()
}

/// Indices of the instance's items, sorted by descending density.
/// The sort is stable: items of equal density keep their input order.
/// The items themselves are left untouched.
pub fn density_order(instance: &KPInstance) -> Vec<usize> {
    (0..instance.n_items())
        .sorted_by_cached_key(|&i| {
            let density = NotNan::new(instance.item(i).density()).expect("item density is NaN");
            Reverse(density)
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    fn worked_example() -> KPInstance {
        KPInstance::new(
            vec![Item::new(2, 3.0), Item::new(3, 4.0), Item::new(4, 5.0), Item::new(5, 6.0)],
            5,
        )
    }

    #[test]
    fn worked_example_takes_first_two_items() {
        // densities 1.5, 1.33, 1.25, 1.2: item 1 (w=2) leaves 3, item 2 (w=3) still fits
        assert_eq!(solve(&worked_example()), Profit::from_f64(7.0));
    }

    #[test]
    fn skips_items_that_no_longer_fit() {
        // densities 2.0, 1.5, 1.0: the second item does not fit after the first, the third does
        let instance = KPInstance::new(
            vec![Item::new(6, 12.0), Item::new(4, 6.0), Item::new(3, 3.0)],
            9,
        );
        assert_eq!(solve(&instance), Profit::from_f64(15.0));
    }

    #[test]
    fn not_optimal_in_general() {
        // greedy takes the dense small item and has no room left for the large one
        let instance = KPInstance::new(vec![Item::new(1, 2.0), Item::new(10, 10.0)], 10);
        assert_eq!(solve(&instance), Profit::from_f64(2.0));
    }

    #[test]
    fn input_is_not_reordered() {
        let instance = KPInstance::new(
            vec![Item::new(5, 1.0), Item::new(1, 9.0), Item::new(3, 3.0)],
            6,
        );
        let before = instance.items.clone();
        solve(&instance);
        assert_eq!(instance.items, before);
    }

    #[test]
    fn ties_keep_input_order() {
        let instance = KPInstance::new(
            vec![Item::new(2, 2.0), Item::new(1, 3.0), Item::new(4, 4.0), Item::new(3, 3.0)],
            10,
        );
        assert_eq!(density_order(&instance), vec![1, 0, 2, 3]);
    }
}
