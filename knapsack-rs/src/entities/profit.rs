use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Value of an item (or a set of items) in fixed-point hundredths.
///
/// Item values have two-decimal granularity, so storing them as integer hundredths keeps every
/// summation exact: two solvers that select equally valuable subsets always report the same [`Profit`],
/// no matter in which order the values were accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Profit(pub u64);

impl Profit {
    pub const ZERO: Profit = Profit(0);

    /// Profit corresponding to `value`, rounded to the nearest hundredth
    pub fn from_f64(value: f64) -> Self {
        assert!(
            value.is_finite() && value >= 0.0,
            "profit must be a finite, non-negative number: {value}"
        );
        Profit((value * 100.0).round() as u64)
    }

    pub fn from_hundredths(hundredths: u64) -> Self {
        Profit(hundredths)
    }

    pub fn hundredths(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Profit {
    type Output = Profit;

    fn add(self, rhs: Self) -> Self::Output {
        Profit(self.0 + rhs.0)
    }
}

impl AddAssign for Profit {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Profit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Profit::ZERO, Add::add)
    }
}

impl Display for Profit {
    /// Always formatted with exactly two decimals, e.g. `7.05`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "0.00"; "zero")]
    #[test_case(1.0, "1.00"; "one")]
    #[test_case(9.99, "9.99"; "upper generator bound")]
    #[test_case(12.05, "12.05"; "leading zero in cents")]
    #[test_case(0.07, "0.07"; "cents only")]
    fn display_has_two_decimals(value: f64, expected: &str) {
        assert_eq!(Profit::from_f64(value).to_string(), expected);
    }

    #[test]
    fn sums_are_exact() {
        // 0.1 + 0.2 != 0.3 in binary floating point, but hundredths add up exactly
        let total: Profit = [0.1, 0.2].into_iter().map(Profit::from_f64).sum();
        assert_eq!(total, Profit::from_f64(0.3));
    }

    #[test]
    #[should_panic]
    fn negative_value_panics() {
        Profit::from_f64(-1.0);
    }
}
