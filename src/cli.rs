use std::path::PathBuf;

use clap::Parser;

use crate::groups::GroupId;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// TOML simulation config; the 300 MW reference case is used when absent
    #[clap(long, env = "SMR_ENFICC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the number of Monte Carlo trials per group
    #[clap(long)]
    pub trials: Option<usize>,

    /// Master random seed
    #[clap(long, default_value_t = 42)]
    pub seed: u64,

    /// Worker threads for the trial pool (defaults to all cores)
    #[clap(long)]
    pub threads: Option<usize>,

    /// Groups to simulate, in order (A1, A2, B); all when omitted
    #[clap(long = "group")]
    pub groups: Vec<GroupId>,

    /// Print results as JSON instead of tables
    #[clap(long)]
    pub json: bool,

    /// Print the effective configuration as TOML and exit
    #[clap(long)]
    pub dump_config: bool,
}
