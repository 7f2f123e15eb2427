use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use knapsack_rs::entities::Profit;
use knapsack_rs::solvers::{Algorithm, Outcome};
use log::info;

/// Measurement of a single solver call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverRecord {
    pub outcome: Outcome,
    pub time_ms: f64,
}

/// Results of all solvers for one `(n, capacity)` cell of the benchmark grid
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub n: usize,
    pub capacity: u64,
    pub records: Vec<(Algorithm, SolverRecord)>,
}

impl BenchmarkRow {
    pub fn new(n: usize, capacity: u64) -> Self {
        Self {
            n,
            capacity,
            records: vec![],
        }
    }

    pub fn record(&self, algo: Algorithm) -> Option<&SolverRecord> {
        self.records.iter().find(|(a, _)| *a == algo).map(|(_, r)| r)
    }

    /// Header line of the results file
    pub fn csv_header() -> String {
        let solver_columns = Algorithm::ALL
            .iter()
            .map(|a| format!("{0}_result,{0}_time", a.column_name()))
            .join(",");
        format!("n,capacity,{solver_columns}")
    }

    /// Values and times with two decimals.
    /// Solvers that did not run, or exceeded their budget, are reported with a value of `0.00`.
    /// Only the time field tells them apart: `0.00` for a solver that did not run,
    /// the time spent before giving up for one that exceeded its budget.
    pub fn to_csv(&self) -> String {
        let mut line = format!("{},{}", self.n, self.capacity);
        for algo in Algorithm::ALL {
            let (value, time_ms) = match self.record(algo) {
                Some(r) => (r.outcome.profit().unwrap_or(Profit::ZERO), r.time_ms),
                None => (Profit::ZERO, 0.0),
            };
            write!(line, ",{value},{time_ms:.2}").expect("writing to a String cannot fail");
        }
        line
    }
}

/// Sink for [`BenchmarkRow`]s.
///
/// The results file is opened in append mode, the header is only written when the file is created.
/// Every row is flushed as soon as it is appended.
pub struct ResultsWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    n_rows: usize,
}

impl ResultsWriter {
    pub fn open(path: &Path) -> Result<Self> {
        let write_header = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("could not open results file: {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        if write_header {
            writeln!(writer, "{}", BenchmarkRow::csv_header())?;
            writer.flush()?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            n_rows: 0,
        })
    }

    pub fn append(&mut self, row: &BenchmarkRow) -> Result<()> {
        writeln!(self.writer, "{}", row.to_csv())
            .and_then(|_| self.writer.flush())
            .with_context(|| format!("could not write to results file: {}", self.path.display()))?;
        self.n_rows += 1;
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Flushes and closes the results file
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        info!(
            "[IO] {} rows appended to {}",
            self.n_rows,
            self.path.display()
        );
        Ok(self.path)
    }
}
