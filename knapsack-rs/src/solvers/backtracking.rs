use log::debug;
use thousands::Separable;

use crate::entities::{KPInstance, Profit};
use crate::solvers::{Budget, EXACT_ITEM_LIMIT, Outcome};

/// Number of expanded nodes between two checks of the budget
const BUDGET_CHECK_INTERVAL: u64 = 1 << 14;

/// Partial assignment: items `0..depth` have been decided
#[derive(Clone, Copy, Debug)]
struct Node {
    depth: usize,
    weight: u64,
    value: Profit,
}

/// Finds the optimum with a depth-first search over include/exclude decisions per item.
///
/// Branches whose weight exceeds the capacity are pruned immediately.
/// The search uses an explicit stack (at most `n + 1` nodes deep) instead of recursion.
/// Panics for instances with more than [`EXACT_ITEM_LIMIT`] items.
pub fn solve(instance: &KPInstance, budget: Budget) -> Outcome {
    let n = instance.n_items();
    assert!(
        n <= EXACT_ITEM_LIMIT,
        "backtracking called with {n} items, limit is {EXACT_ITEM_LIMIT}"
    );

    let mut best = Profit::ZERO;
    let mut n_expanded: u64 = 0;
    let mut n_pruned: u64 = 0;

    let mut stack = Vec::with_capacity(n + 1);
    stack.push(Node {
        depth: 0,
        weight: 0,
        value: Profit::ZERO,
    });

    while let Some(node) = stack.pop() {
        n_expanded += 1;
        if n_expanded % BUDGET_CHECK_INTERVAL == 0 && budget.is_exhausted() {
            debug!(
                "[BT] budget exhausted after {} nodes",
                n_expanded.separate_with_commas()
            );
            return Outcome::Exceeded;
        }

        if node.depth == n {
            best = best.max(node.value);
            continue;
        }

        let item = instance.item(node.depth);
        //exclude first, so the include branch is explored first
        stack.push(Node {
            depth: node.depth + 1,
            ..node
        });
        let weight = node.weight.saturating_add(item.weight);
        if weight <= instance.capacity {
            stack.push(Node {
                depth: node.depth + 1,
                weight,
                value: node.value + item.value,
            });
        } else {
            n_pruned += 1;
        }
    }

    debug!(
        "[BT] {} nodes expanded, {} branches pruned",
        n_expanded.separate_with_commas(),
        n_pruned.separate_with_commas()
    );

    Outcome::Completed(best)
}
