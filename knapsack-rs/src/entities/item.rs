use crate::entities::Profit;

/// Item which can be put in the knapsack at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    /// Strictly positive weight
    pub weight: u64,
    /// Strictly positive value, at most [`Item::MAX_VALUE`]
    pub value: Profit,
}

impl Item {
    /// Upper bound on the value of a single item.
    /// The values of up to `u32::MAX` items always sum to a representable [`Profit`].
    pub const MAX_VALUE: Profit = Profit(u64::MAX >> 32);

    pub fn new(weight: u64, value: f64) -> Item {
        Item::from_profit(weight, Profit::from_f64(value))
    }

    pub fn from_profit(weight: u64, value: Profit) -> Item {
        assert!(weight > 0, "item weight must be strictly positive");
        assert!(value > Profit::ZERO, "item value must be strictly positive");
        assert!(
            value <= Item::MAX_VALUE,
            "item value {value} exceeds {}",
            Item::MAX_VALUE
        );
        Item { weight, value }
    }

    /// Value per unit of weight
    pub fn density(&self) -> f64 {
        self.value.as_f64() / self.weight as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heaviest_weight_is_accepted() {
        let item = Item::new(u64::MAX, 5.0);
        assert!(item.density() > 0.0);
    }

    #[test]
    #[should_panic]
    fn value_above_bound_panics() {
        Item::from_profit(1, Profit(Item::MAX_VALUE.0 + 1));
    }
}
