/// Simulation configuration: reference case, TOML loading and validation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ConfigError;
use crate::models::{CalendarConfig, OutageConfig, PlantConfig, SimulationConfig, MONTHS, MONTHS_PER_YEAR};

const DAYS_PER_MONTH: [usize; MONTHS_PER_YEAR] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Freshwater-cooled plant: seasonal river flow and temperature limits
const HYDROLOGICAL_DERATING: [f64; MONTHS_PER_YEAR] =
    [0.95, 0.92, 0.88, 0.90, 0.87, 0.85, 0.86, 0.89, 0.91, 0.94, 0.96, 0.97];

/// Seawater-cooled plant
const THERMAL_FACTOR: f64 = 0.97;

impl Default for SimulationConfig {
    /// 300 MW SMR on a non-leap year
    fn default() -> Self {
        SimulationConfig {
            plant: PlantConfig { capacity_mw: 300.0 },
            calendar: CalendarConfig {
                hours_per_year: 8760,
                month_hours: DAYS_PER_MONTH.iter().map(|days| days * 24).collect(),
            },
            outages: OutageConfig {
                maintenance_hours: 25 * 24,
                scram_rate_per_year: 0.5,
                scram_duration_min_hours: 36,
                scram_duration_max_hours: 60,
            },
            trials: 10_000,
            hydrological_derating: Some(HYDROLOGICAL_DERATING.to_vec()),
            thermal_factor: Some(THERMAL_FACTOR),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("failed to parse simulation config")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize simulation config")
    }

    /// Checks every invariant the generator and aggregator rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let calendar = &self.calendar;
        if calendar.hours_per_year == 0 {
            return Err(ConfigError::EmptyYear);
        }
        if calendar.month_hours.len() != MONTHS_PER_YEAR {
            return Err(ConfigError::MonthCount {
                expected: MONTHS_PER_YEAR,
                actual: calendar.month_hours.len(),
            });
        }
        let sum: usize = calendar.month_hours.iter().sum();
        if sum != calendar.hours_per_year {
            return Err(ConfigError::CalendarPartition { sum, hours_per_year: calendar.hours_per_year });
        }

        let capacity = self.plant.capacity_mw;
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(ConfigError::Capacity(capacity));
        }

        let outages = &self.outages;
        if outages.maintenance_hours > calendar.hours_per_year {
            return Err(ConfigError::MaintenanceTooLong {
                maintenance_hours: outages.maintenance_hours,
                hours_per_year: calendar.hours_per_year,
            });
        }
        if outages.scram_duration_min_hours > outages.scram_duration_max_hours {
            return Err(ConfigError::ScramDurationBounds {
                min: outages.scram_duration_min_hours,
                max: outages.scram_duration_max_hours,
            });
        }
        let rate = outages.scram_rate_per_year;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::ScramRate(rate));
        }

        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }

        if let Some(factors) = &self.hydrological_derating {
            if factors.len() != MONTHS_PER_YEAR {
                return Err(ConfigError::DeratingCount { expected: MONTHS_PER_YEAR, actual: factors.len() });
            }
            for (&month, &value) in MONTHS.iter().zip(factors) {
                if !is_unit_factor(value) {
                    return Err(ConfigError::DeratingFactor { month, value });
                }
            }
        }
        if let Some(factor) = self.thermal_factor {
            if !is_unit_factor(factor) {
                return Err(ConfigError::ThermalFactor(factor));
            }
        }

        Ok(())
    }
}

/// (0, 1]
fn is_unit_factor(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}
