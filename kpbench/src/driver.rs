use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use knapsack_rs::entities::{KPInstance, estimated_footprint};
use knapsack_rs::generator::ItemGenerator;
use knapsack_rs::solvers::{Algorithm, Budget, Outcome};
use log::{info, warn};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::BenchConfig;
use crate::io;
use crate::io::appendix::write_appendix;
use crate::io::results::{BenchmarkRow, ResultsWriter, SolverRecord};
use crate::time::TimeStamp;

/// What a single grid cell will cost, computed without generating anything
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlan {
    pub n: usize,
    pub capacity: u64,
    /// Estimated working memory in bytes
    pub footprint: u64,
    pub algorithms: Vec<Algorithm>,
}

/// Plans every cell of the configured grid, in benchmark order
pub fn plan(config: &BenchConfig) -> Vec<CellPlan> {
    config
        .grid()
        .map(|(n, capacity)| CellPlan {
            n,
            capacity,
            footprint: estimated_footprint(n, capacity),
            algorithms: Algorithm::ALL
                .into_iter()
                .filter(|a| a.is_applicable(n))
                .collect(),
        })
        .collect()
}

/// Logs the plan of every grid cell and returns the number of cells exceeding the memory limit
pub fn dry_run(config: &BenchConfig) -> usize {
    let limit = config.memory_limit_bytes();
    let plans = plan(config);
    let mut n_too_large = 0;

    for p in &plans {
        let algorithms = p.algorithms.iter().map(|a| a.tag()).join(", ");
        info!(
            "[PLAN] n={} cap={} ~{} KiB [{}]",
            p.n,
            p.capacity,
            (p.footprint / 1024).separate_with_commas(),
            algorithms
        );
        if limit.is_some_and(|l| p.footprint > l) {
            warn!("[PLAN] n={} cap={} exceeds the memory limit", p.n, p.capacity);
            n_too_large += 1;
        }
    }

    let peak = plans.iter().map(|p| p.footprint).max().unwrap_or(0);
    info!(
        "[PLAN] {} cells, peak footprint ~{} KiB, {} over the memory limit",
        plans.len(),
        (peak / 1024).separate_with_commas(),
        n_too_large
    );
    n_too_large
}

#[derive(Debug, Clone)]
pub struct BenchSummary {
    pub n_rows: usize,
    pub n_exceeded: usize,
    pub results_path: PathBuf,
}

/// Runs every solver on a freshly generated instance for each `(n, capacity)` cell of the grid.
pub struct Benchmark {
    pub config: BenchConfig,
    pub generator: ItemGenerator,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    n_exceeded: usize,
}

impl Benchmark {
    pub fn new(config: BenchConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let generator = ItemGenerator::new(config.item_gen)?;
        Ok(Self {
            config,
            generator,
            rng,
            n_exceeded: 0,
        })
    }

    pub fn run(&mut self) -> Result<BenchSummary> {
        let start = TimeStamp::now();
        io::prepare_output_dir(&self.config.output_dir)?;
        let mut sink = ResultsWriter::open(&self.config.results_path())?;

        let grid = self.config.grid().collect_vec();
        for (i, &(n, capacity)) in grid.iter().enumerate() {
            info!("[BENCH] cell {}/{}: n={n} cap={capacity}", i + 1, grid.len());
            let row = self.run_cell(n, capacity)?;
            sink.append(&row)?;
        }

        let n_rows = sink.n_rows();
        let results_path = sink.finish()?;

        info!(
            "[BENCH] finished {} cells in {:.3}s ({} solver calls exceeded their budget)",
            n_rows,
            start.elapsed().as_secs_f64(),
            self.n_exceeded
        );

        Ok(BenchSummary {
            n_rows,
            n_exceeded: self.n_exceeded,
            results_path,
        })
    }

    /// Generates an instance of `n` items and runs every applicable solver on it
    pub fn run_cell(&mut self, n: usize, capacity: u64) -> Result<BenchmarkRow> {
        if let Some(limit) = self.config.memory_limit_bytes() {
            let footprint = estimated_footprint(n, capacity);
            if footprint > limit {
                bail!(
                    "instance too large: n={n} cap={capacity} needs ~{} KiB, limit is {} KiB",
                    (footprint / 1024).separate_with_commas(),
                    (limit / 1024).separate_with_commas()
                );
            }
        }

        let items = self
            .generator
            .generate(n, &mut self.rng)
            .with_context(|| format!("could not generate instance n={n} cap={capacity}"))?;
        let instance = KPInstance::new(items, capacity);

        if self.config.appendix_n == Some(n) {
            write_appendix(&instance.items, &self.config.appendix_path())?;
        }

        let mut row = BenchmarkRow::new(n, capacity);
        for algo in Algorithm::ALL {
            if algo.is_applicable(n) {
                let record = self.time_solver(algo, &instance)?;
                row.records.push((algo, record));
            }
        }
        Ok(row)
    }

    fn time_solver(&mut self, algo: Algorithm, instance: &KPInstance) -> Result<SolverRecord> {
        let budget = Budget::maybe_from_now(self.config.solver_time_limit());

        let start = TimeStamp::now();
        let outcome = algo.solve(instance, budget).with_context(|| {
            format!(
                "{algo} failed on n={} cap={}",
                instance.n_items(),
                instance.capacity
            )
        })?;
        let end = TimeStamp::now();
        let time_ms = TimeStamp::since_ms(&start, &end);

        let tag = format!("[{}]", algo.tag());
        match outcome {
            Outcome::Completed(profit) => info!(
                "{tag:<11} n={} cap={} val={profit} time={time_ms:.2}ms",
                instance.n_items(),
                instance.capacity
            ),
            Outcome::Exceeded => {
                self.n_exceeded += 1;
                warn!(
                    "{tag:<11} n={} cap={} val=exceeded time={time_ms:.2}ms",
                    instance.n_items(),
                    instance.capacity
                )
            }
        }

        Ok(SolverRecord { outcome, time_ms })
    }
}
