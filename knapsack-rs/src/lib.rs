//! Exact and approximate solvers for the 0/1 knapsack problem.

/// Entities to model 0/1 knapsack problem instances
pub mod entities;

/// Random generation of problem instances
pub mod generator;

/// The four solving strategies: brute force, dynamic programming, greedy and backtracking
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;
