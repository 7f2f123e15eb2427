use anyhow::{Result, bail};
use clap::Parser as ClapParser;
use kpbench::config::BenchConfig;
use kpbench::driver::{self, Benchmark};
use kpbench::io;
use kpbench::io::cli::Cli;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    if let Some(output_folder) = args.output_folder {
        config.output_dir = output_folder;
    }
    config.validate()?;

    info!("[MAIN] Successfully parsed BenchConfig: {config:?}");

    if args.dry_run {
        let n_too_large = driver::dry_run(&config);
        if n_too_large > 0 {
            bail!("{n_too_large} grid cells exceed the memory limit");
        }
        return Ok(());
    }

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let summary = Benchmark::new(config, rng)?.run()?;
    info!(
        "[MAIN] Finished writing {}",
        summary.results_path.display()
    );

    Ok(())
}
