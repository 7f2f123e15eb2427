use anyhow::{Result, anyhow, ensure};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::entities::{Item, Profit};

/// Configuration of the random item generator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ItemGenConfig {
    /// Inclusive range of item weights
    pub weight_range: [u64; 2],
    /// Inclusive range of item values, rounded to two decimals
    pub value_range: [f64; 2],
}

impl Default for ItemGenConfig {
    fn default() -> Self {
        Self {
            weight_range: [1, 100],
            value_range: [1.00, 9.99],
        }
    }
}

/// Generates items with uniformly distributed weights and values.
///
/// Values are drawn as an integer number of hundredths, so every generated value has two-decimal granularity.
/// The generator holds no randomness of its own, the caller threads a PRNG through [`ItemGenerator::generate`].
#[derive(Clone, Debug)]
pub struct ItemGenerator {
    weight_distr: Uniform<u64>,
    value_distr: Uniform<u64>,
}

impl ItemGenerator {
    pub fn new(config: ItemGenConfig) -> Result<Self> {
        let [min_w, max_w] = config.weight_range;
        ensure!(min_w > 0, "item weights must be strictly positive, got {min_w}");
        ensure!(min_w <= max_w, "empty weight range: [{min_w}, {max_w}]");

        let [min_v, max_v] = config.value_range;
        ensure!(
            min_v.is_finite() && max_v.is_finite(),
            "value range must be finite: [{min_v}, {max_v}]"
        );
        let (min_v, max_v) = (Profit::from_f64(min_v.max(0.0)), Profit::from_f64(max_v.max(0.0)));
        ensure!(
            min_v > Profit::ZERO,
            "item values must be strictly positive, got {min_v}"
        );
        ensure!(min_v <= max_v, "empty value range: [{min_v}, {max_v}]");
        ensure!(
            max_v <= Item::MAX_VALUE,
            "item values must not exceed {}, got {max_v}",
            Item::MAX_VALUE
        );

        let weight_distr = Uniform::new_inclusive(min_w, max_w)
            .map_err(|e| anyhow!("invalid weight range [{min_w}, {max_w}]: {e}"))?;
        let value_distr = Uniform::new_inclusive(min_v.hundredths(), max_v.hundredths())
            .map_err(|e| anyhow!("invalid value range [{min_v}, {max_v}]: {e}"))?;

        Ok(Self {
            weight_distr,
            value_distr,
        })
    }

    /// Generates `n` items.
    /// Fails if the item vector cannot be allocated.
    pub fn generate(&self, n: usize, rng: &mut impl Rng) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        items.try_reserve_exact(n).map_err(|e| {
            anyhow!("instance too large: could not allocate {n} items ({e})")
        })?;

        items.extend((0..n).map(|_| {
            let weight = self.weight_distr.sample(rng);
            let value = Profit::from_hundredths(self.value_distr.sample(rng));
            Item::from_profit(weight, value)
        }));

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_case::test_case;

    #[test_case(0; "empty")]
    #[test_case(1; "single")]
    #[test_case(1000; "appendix size")]
    fn generates_requested_number_of_items(n: usize) {
        let generator = ItemGenerator::new(ItemGenConfig::default()).unwrap();
        let items = generator.generate(n, &mut SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(items.len(), n);
    }

    #[test]
    fn items_respect_default_ranges() {
        let generator = ItemGenerator::new(ItemGenConfig::default()).unwrap();
        let items = generator.generate(10_000, &mut SmallRng::seed_from_u64(1)).unwrap();
        for item in items {
            assert!((1..=100).contains(&item.weight), "weight {}", item.weight);
            assert!(
                (100..=999).contains(&item.value.hundredths()),
                "value {}",
                item.value
            );
        }
    }

    #[test]
    fn extreme_weights_are_accepted() {
        let config = ItemGenConfig {
            weight_range: [1, u64::MAX],
            value_range: [1.0, 9.99],
        };
        let generator = ItemGenerator::new(config).unwrap();
        let items = generator.generate(100, &mut SmallRng::seed_from_u64(3)).unwrap();
        assert_eq!(items.len(), 100);
    }

    #[test]
    fn same_seed_same_items() {
        let generator = ItemGenerator::new(ItemGenConfig::default()).unwrap();
        let a = generator.generate(50, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = generator.generate(50, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_instances_differ() {
        // a single PRNG threaded through consecutive calls must not repeat itself
        let generator = ItemGenerator::new(ItemGenConfig::default()).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let a = generator.generate(50, &mut rng).unwrap();
        let b = generator.generate(50, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test_case([0, 100], [1.0, 9.99]; "zero weight")]
    #[test_case([50, 10], [1.0, 9.99]; "inverted weights")]
    #[test_case([1, 100], [0.0, 9.99]; "zero value")]
    #[test_case([1, 100], [5.0, 1.0]; "inverted values")]
    #[test_case([1, 100], [1.0, f64::NAN]; "nan value")]
    #[test_case([1, 100], [1.0, 1e17]; "value sums overflow")]
    fn invalid_ranges_are_rejected(weight_range: [u64; 2], value_range: [f64; 2]) {
        let config = ItemGenConfig {
            weight_range,
            value_range,
        };
        assert!(ItemGenerator::new(config).is_err());
    }
}
