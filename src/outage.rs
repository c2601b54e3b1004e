/// Outage generation module
/// Draws one simulated year of hourly availability from scheduled maintenance and SCRAM events

use rand::Rng;
use rand_distr::{Distribution, Poisson};
use tracing::trace;

use crate::error::ConfigError;
use crate::models::{AvailabilityTrace, SimulationConfig};

/// Outage distributions of one group, built once and shared read-only by every trial
#[derive(Clone, Debug)]
pub struct OutageSampler {
    hours_per_year: usize,
    maintenance_hours: usize,
    /// `None` when the SCRAM rate is zero: no events are ever drawn
    scram_count: Option<Poisson<f64>>,
    scram_duration_min: usize,
    scram_duration_max: usize,
}

impl OutageSampler {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let hours_per_year = config.calendar.hours_per_year;
        let outages = &config.outages;

        if hours_per_year == 0 {
            return Err(ConfigError::EmptyYear);
        }
        if outages.maintenance_hours > hours_per_year {
            return Err(ConfigError::MaintenanceTooLong {
                maintenance_hours: outages.maintenance_hours,
                hours_per_year,
            });
        }
        if outages.scram_duration_min_hours > outages.scram_duration_max_hours {
            return Err(ConfigError::ScramDurationBounds {
                min: outages.scram_duration_min_hours,
                max: outages.scram_duration_max_hours,
            });
        }

        let rate = outages.scram_rate_per_year;
        let scram_count = if rate == 0.0 {
            None
        } else {
            Some(Poisson::new(rate).map_err(|_| ConfigError::ScramRate(rate))?)
        };

        Ok(OutageSampler {
            hours_per_year,
            maintenance_hours: outages.maintenance_hours,
            scram_count,
            scram_duration_min: outages.scram_duration_min_hours,
            scram_duration_max: outages.scram_duration_max_hours,
        })
    }

    /// Draws one year: exactly one maintenance window, then a Poisson number of SCRAMs
    pub fn generate_trace<R: Rng + ?Sized>(&self, rng: &mut R) -> AvailabilityTrace {
        let mut trace = AvailabilityTrace::all_available(self.hours_per_year);

        // Inclusive upper bound keeps the whole window inside the year
        let maintenance_start = rng.gen_range(0..=self.hours_per_year - self.maintenance_hours);
        trace.mark_unavailable(maintenance_start, maintenance_start + self.maintenance_hours);

        let n_scrams = match &self.scram_count {
            Some(poisson) => poisson.sample(rng) as usize,
            None => 0,
        };
        for _ in 0..n_scrams {
            let start = rng.gen_range(0..self.hours_per_year);
            let duration = rng.gen_range(self.scram_duration_min..=self.scram_duration_max);
            // Clipped at year end, no wraparound
            trace.mark_unavailable(start, start + duration);
        }

        trace!(maintenance_start, n_scrams, down_hours = trace.unavailable_hours(), "generated trace");
        trace
    }
}
