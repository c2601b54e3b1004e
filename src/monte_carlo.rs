/// Monte Carlo driver
/// Repeats outage generation and monthly aggregation for every trial of a group

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::aggregation::aggregate;
use crate::error::ConfigError;
use crate::models::{MonthlyEnergyRow, SimulationConfig, TrialMatrix};
use crate::outage::OutageSampler;

/// Random stream of one trial.
///
/// Every trial shares the group seed but reads its own ChaCha stream, so the
/// draws do not depend on which worker runs the trial or in what order.
pub fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

/// Seed for the `index`-th group run from a master seed (splitmix64 finalizer)
pub fn derive_seed(master: u64, index: u64) -> u64 {
    let mut z = master.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Runs all trials of one group and collects the trials x months energy matrix.
///
/// The configuration is validated before any trial starts. Month derating is
/// applied per trial here; scalar derating belongs to the reducer.
pub fn run_group(
    config: &SimulationConfig,
    apply_month_derating: bool,
    seed: u64,
) -> Result<TrialMatrix, ConfigError> {
    config.validate()?;
    let month_derating = if apply_month_derating {
        Some(
            config
                .hydrological_derating
                .as_deref()
                .ok_or(ConfigError::MissingFactor("monthly derating"))?,
        )
    } else {
        None
    };
    let sampler = OutageSampler::new(config)?;

    debug!(trials = config.trials, apply_month_derating, seed, "running trials");
    let rows: Vec<MonthlyEnergyRow> = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = trial_rng(seed, trial);
            let trace = sampler.generate_trace(&mut rng);
            aggregate(&trace, config, month_derating)
        })
        .collect();
    debug!(trials = rows.len(), "trials finished");

    Ok(TrialMatrix::from(rows))
}
