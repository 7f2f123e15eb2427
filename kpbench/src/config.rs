use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, ensure};
use knapsack_rs::generator::ItemGenConfig;
use serde::{Deserialize, Serialize};

/// Configuration of a benchmark run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Folder in which the results and appendix files are written, created if it does not exist
    pub output_dir: PathBuf,
    /// Name of the results file, appended to across runs
    pub results_file: String,
    /// Name of the appendix file, overwritten every run
    pub appendix_file: String,
    /// Number of items of the instance exported to the appendix file. If undefined, no appendix is written
    pub appendix_n: Option<usize>,
    /// Problem sizes (number of items) to benchmark, outer loop of the grid
    pub n_values: Vec<usize>,
    /// Knapsack capacities to benchmark, inner loop of the grid
    pub capacities: Vec<u64>,
    /// Seed for the PRNG. If undefined, instances are generated in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Wall-clock budget per solver call in milliseconds. If undefined, every solver runs to completion
    pub solver_time_limit_ms: Option<u64>,
    /// Upper bound on the estimated working memory of a single grid cell in megabytes
    pub memory_limit_mb: Option<u64>,
    /// Configuration of the item generator
    pub item_gen: ItemGenConfig,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.n_values.is_empty(), "no problem sizes configured");
        ensure!(!self.capacities.is_empty(), "no capacities configured");
        ensure!(!self.results_file.is_empty(), "results file name is empty");
        if self.appendix_n.is_some() {
            ensure!(!self.appendix_file.is_empty(), "appendix file name is empty");
        }
        Ok(())
    }

    pub fn results_path(&self) -> PathBuf {
        self.output_dir.join(&self.results_file)
    }

    pub fn appendix_path(&self) -> PathBuf {
        self.output_dir.join(&self.appendix_file)
    }

    pub fn solver_time_limit(&self) -> Option<Duration> {
        self.solver_time_limit_ms.map(Duration::from_millis)
    }

    pub fn memory_limit_bytes(&self) -> Option<u64> {
        self.memory_limit_mb.map(|mb| mb.saturating_mul(1024 * 1024))
    }

    /// All `(n, capacity)` cells of the grid, in benchmark order
    pub fn grid(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.n_values
            .iter()
            .flat_map(|&n| self.capacities.iter().map(move |&c| (n, c)))
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            results_file: "results.csv".to_string(),
            appendix_file: "appendix_data.csv".to_string(),
            appendix_n: Some(1000),
            n_values: vec![
                5, 10, 15, 20, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10_000,
                20_000, 40_000, 80_000, 160_000, 320_000,
            ],
            capacities: vec![10_000, 100_000, 1_000_000],
            prng_seed: None,
            solver_time_limit_ms: None,
            memory_limit_mb: None,
            item_gen: ItemGenConfig::default(),
        }
    }
}
