/// Configuration errors, raised before any simulation work begins

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("calendar must have {expected} months, got {actual}")]
    MonthCount { expected: usize, actual: usize },

    #[error("month lengths sum to {sum} h, but the year has {hours_per_year} h")]
    CalendarPartition { sum: usize, hours_per_year: usize },

    #[error("hours per year must be positive")]
    EmptyYear,

    #[error("maintenance window of {maintenance_hours} h does not fit in a {hours_per_year} h year")]
    MaintenanceTooLong { maintenance_hours: usize, hours_per_year: usize },

    #[error("SCRAM duration bounds are inverted: min {min} h > max {max} h")]
    ScramDurationBounds { min: usize, max: usize },

    #[error("SCRAM rate must be a finite non-negative number, got {0}")]
    ScramRate(f64),

    #[error("plant capacity must be a finite non-negative number, got {0} MW")]
    Capacity(f64),

    #[error("trial count must be positive")]
    NoTrials,

    #[error("expected {expected} monthly derating factors, got {actual}")]
    DeratingCount { expected: usize, actual: usize },

    #[error("derating factor for {month} must lie in (0, 1], got {value}")]
    DeratingFactor { month: &'static str, value: f64 },

    #[error("thermal factor must lie in (0, 1], got {0}")]
    ThermalFactor(f64),

    #[error("{0} is required but the configuration does not define it")]
    MissingFactor(&'static str),
}
