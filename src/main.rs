mod aggregation;
mod cli;
mod config;
mod enficc;
mod error;
mod groups;
mod models;
mod monte_carlo;
mod outage;
mod pipeline;
mod reporting;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use groups::GroupSpec;
use models::SimulationConfig;
use pipeline::run_all;
use reporting::{display_group_result, display_header, display_summary};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_toml_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    config.validate().context("invalid simulation config")?;

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build the trial worker pool")?;
    }

    let groups: Vec<GroupSpec> = if args.groups.is_empty() {
        GroupSpec::all()
    } else {
        args.groups.iter().copied().map(GroupSpec::for_id).collect()
    };
    info!(
        groups = groups.len(),
        trials = config.trials,
        threads = rayon::current_num_threads(),
        seed = args.seed,
        "starting simulation"
    );

    let results = run_all(&config, &groups, args.seed).context("simulation aborted")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    display_header(&config, args.seed);
    for result in &results {
        display_group_result(result);
    }
    display_summary(&results);

    Ok(())
}
