use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::entities::{KPInstance, Profit};

pub mod backtracking;
pub mod brute_force;
pub mod dynamic;
pub mod greedy;

/// Maximum number of items the exhaustive solvers (brute force and backtracking) accept.
/// Beyond this, `2^n` subsets are no longer practical to enumerate.
pub const EXACT_ITEM_LIMIT: usize = 20;

/// The solving strategies under benchmark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    Dynamic,
    Greedy,
    Backtracking,
}

impl Algorithm {
    /// All algorithms, in the order in which they are benchmarked and reported
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::Dynamic,
        Algorithm::Greedy,
        Algorithm::Backtracking,
    ];

    /// Short tag used in log lines
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute",
            Algorithm::Dynamic => "Dynamic",
            Algorithm::Greedy => "Greedy",
            Algorithm::Backtracking => "Backtrack",
        }
    }

    /// Name used as column prefix in the results file
    pub fn column_name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::Dynamic => "dynamic",
            Algorithm::Greedy => "greedy",
            Algorithm::Backtracking => "backtracking",
        }
    }

    /// Whether the algorithm can be run on an instance with `n_items` items
    pub fn is_applicable(&self, n_items: usize) -> bool {
        match self {
            Algorithm::BruteForce | Algorithm::Backtracking => n_items <= EXACT_ITEM_LIMIT,
            Algorithm::Dynamic | Algorithm::Greedy => true,
        }
    }

    /// Solves `instance` with this algorithm.
    /// Panics if the algorithm is not applicable to the instance (see [`Algorithm::is_applicable`]).
    pub fn solve(&self, instance: &KPInstance, budget: Budget) -> Result<Outcome> {
        match self {
            Algorithm::BruteForce => Ok(brute_force::solve(instance, budget)),
            Algorithm::Dynamic => dynamic::solve(instance, budget),
            Algorithm::Greedy => Ok(Outcome::Completed(greedy::solve(instance))),
            Algorithm::Backtracking => Ok(backtracking::solve(instance, budget)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Result of a single solver call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The solver ran to completion and found this profit
    Completed(Profit),
    /// The solver was stopped because its [`Budget`] ran out
    Exceeded,
}

impl Outcome {
    pub fn profit(&self) -> Option<Profit> {
        match self {
            Outcome::Completed(p) => Some(*p),
            Outcome::Exceeded => None,
        }
    }
}

/// Wall-clock budget for a single solver call
#[derive(Clone, Copy, Debug)]
pub struct Budget {
    deadline: Option<Instant>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self { deadline: None }
    }

    pub fn from_now(limit: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + limit),
        }
    }

    /// Budget starting now, unlimited if `limit` is `None`
    pub fn maybe_from_now(limit: Option<Duration>) -> Self {
        match limit {
            Some(limit) => Self::from_now(limit),
            None => Self::unlimited(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    #[test]
    fn exact_solvers_gated_by_item_count() {
        for algo in Algorithm::ALL {
            assert!(algo.is_applicable(0));
            assert!(algo.is_applicable(EXACT_ITEM_LIMIT));
            let always = matches!(algo, Algorithm::Dynamic | Algorithm::Greedy);
            assert_eq!(algo.is_applicable(EXACT_ITEM_LIMIT + 1), always, "{algo}");
        }
    }

    #[test]
    fn zero_budget_is_exhausted() {
        assert!(Budget::from_now(Duration::ZERO).is_exhausted());
        assert!(!Budget::unlimited().is_exhausted());
        assert!(!Budget::maybe_from_now(None).is_exhausted());
    }

    #[test]
    fn dispatch_agrees_on_small_instance() {
        let instance = KPInstance::new(
            vec![Item::new(2, 3.0), Item::new(3, 4.0), Item::new(4, 5.0), Item::new(5, 6.0)],
            5,
        );
        for algo in Algorithm::ALL {
            let outcome = algo.solve(&instance, Budget::unlimited()).unwrap();
            assert_eq!(outcome, Outcome::Completed(Profit::from_f64(7.0)), "{algo}");
        }
    }
}
