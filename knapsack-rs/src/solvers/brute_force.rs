use log::debug;
use thousands::Separable;

use crate::entities::{KPInstance, Profit};
use crate::solvers::{Budget, EXACT_ITEM_LIMIT, Outcome};

/// Number of subsets evaluated between two checks of the budget
const BUDGET_CHECK_INTERVAL: u64 = 1 << 14;

/// Finds the optimum by evaluating every subset of the items.
///
/// Subsets are encoded as `n`-bit masks from `0` to `2^n - 1`, bit `i` set meaning item `i` is included.
/// Runs in `O(2^n * n)` and panics for instances with more than [`EXACT_ITEM_LIMIT`] items.
pub fn solve(instance: &KPInstance, budget: Budget) -> Outcome {
    let n = instance.n_items();
    assert!(
        n <= EXACT_ITEM_LIMIT,
        "brute force called with {n} items, limit is {EXACT_ITEM_LIMIT}"
    );

    let n_subsets = 1u64 << n;
    let mut best = Profit::ZERO;

    for mask in 0..n_subsets {
        if mask % BUDGET_CHECK_INTERVAL == 0 && budget.is_exhausted() {
            debug!(
                "[BF] budget exhausted after {}/{} subsets",
                mask.separate_with_commas(),
                n_subsets.separate_with_commas()
            );
            return Outcome::Exceeded;
        }

        let (weight, value) = instance
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .fold((0u64, Profit::ZERO), |(w, v), (_, item)| {
                (w.saturating_add(item.weight), v + item.value)
            });

        //a saturated weight always exceeds the capacity
        if weight <= instance.capacity && value > best {
            best = value;
        }
    }

    Outcome::Completed(best)
}
