use std::collections::HashSet;

use log::error;

use crate::entities::{KPInstance, Profit};

//Various checks to verify correctness of the solvers
//Used in debug_assert!() blocks and tests

/// A selection is feasible if it contains no duplicates and its total weight fits the capacity
pub fn selection_is_feasible(instance: &KPInstance, selected: &[usize]) -> bool {
    let unique: HashSet<usize> = selected.iter().copied().collect();
    if unique.len() != selected.len() {
        error!("selection contains an item more than once: {selected:?}");
        return false;
    }
    let weight = selected
        .iter()
        .fold(0u64, |w, &i| w.saturating_add(instance.item(i).weight));
    if weight > instance.capacity {
        error!("selection weight {weight} exceeds capacity {}", instance.capacity);
        return false;
    }
    true
}

/// Inserting an item in a dynamic programming table never lowers any of its entries
pub fn dp_pass_never_decreases(before: &[Profit], after: &[Profit]) -> bool {
    before.len() == after.len() && before.iter().zip(after).all(|(b, a)| a >= b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    #[test]
    fn detects_infeasible_selections() {
        let instance = KPInstance::new(vec![Item::new(3, 1.0), Item::new(4, 1.0)], 5);
        assert!(selection_is_feasible(&instance, &[]));
        assert!(selection_is_feasible(&instance, &[1]));
        assert!(!selection_is_feasible(&instance, &[0, 1]));
        assert!(!selection_is_feasible(&instance, &[0, 0]));
    }
}
