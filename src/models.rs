/// Data model shared by the outage generator, aggregator, driver and reducer

use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: usize = 12;

/// Calendar month labels, in the order the calendar partition is consumed
pub const MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Nameplate data of the reactor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantConfig {
    /// Net electrical output in MW
    pub capacity_mw: f64,
}

/// Simulated year, split into 12 contiguous months
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    pub hours_per_year: usize,
    /// Month lengths in hours; must sum to `hours_per_year`
    pub month_hours: Vec<usize>,
}

/// Scheduled and forced outage inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutageConfig {
    /// Length of the single refuelling/maintenance window per year
    pub maintenance_hours: usize,
    /// Mean number of SCRAM events per year (Poisson)
    pub scram_rate_per_year: f64,
    /// Inclusive bounds of a SCRAM outage duration
    pub scram_duration_min_hours: usize,
    pub scram_duration_max_hours: usize,
}

/// Immutable simulation parameters for one group run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    pub trials: usize,
    /// Per-month derating applied to every trial before reduction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrological_derating: Option<Vec<f64>>,
    /// Scalar derating applied to the reduced P5 curve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_factor: Option<f64>,
    pub plant: PlantConfig,
    pub calendar: CalendarConfig,
    pub outages: OutageConfig,
}

/// Hourly availability of one simulated year: `true` = full output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityTrace {
    hours: Vec<bool>,
}

impl AvailabilityTrace {
    pub fn all_available(hours_per_year: usize) -> Self {
        AvailabilityTrace { hours: vec![true; hours_per_year] }
    }

    /// Marks `[start, end)` unavailable, clipped at year end.
    /// Hours already down stay down.
    pub fn mark_unavailable(&mut self, start: usize, end: usize) {
        let end = end.min(self.hours.len());
        if start < end {
            self.hours[start..end].fill(false);
        }
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn hours(&self) -> &[bool] {
        &self.hours
    }

    /// Number of available hours in `[start, end)`
    pub fn available_hours(&self, start: usize, end: usize) -> usize {
        self.hours()[start..end].iter().filter(|&&up| up).count()
    }

    pub fn unavailable_hours(&self) -> usize {
        self.hours().iter().filter(|&&up| !up).count()
    }
}

/// Monthly effective energy (MWh) of one trial
pub type MonthlyEnergyRow = [f64; MONTHS_PER_YEAR];

/// 5th-percentile monthly energy across trials
pub type P5Curve = [f64; MONTHS_PER_YEAR];

/// Trials x months energy matrix; rows are in trial order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrialMatrix {
    rows: Vec<MonthlyEnergyRow>,
}

impl TrialMatrix {
    pub fn rows(&self) -> &[MonthlyEnergyRow] {
        &self.rows
    }

    pub fn num_trials(&self) -> usize {
        self.rows.len()
    }

    /// All trial values of one month
    pub fn column(&self, month: usize) -> Vec<f64> {
        self.rows().iter().map(|row| row[month]).collect()
    }
}

impl From<Vec<MonthlyEnergyRow>> for TrialMatrix {
    fn from(rows: Vec<MonthlyEnergyRow>) -> Self {
        TrialMatrix { rows }
    }
}

/// Distribution of one month's energy across trials
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Everything the reporting layer needs for one configuration group
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupResult {
    pub group: String,
    pub title: String,
    pub num_trials: usize,
    pub months: Vec<String>,
    pub p5_curve: P5Curve,
    pub enficc: f64,
    pub monthly: Vec<MonthlySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_unavailable_clips_at_year_end() {
        let mut trace = AvailabilityTrace::all_available(10);
        trace.mark_unavailable(8, 15);

        assert_eq!(trace.len(), 10);
        assert_eq!(trace.unavailable_hours(), 2);
        assert!(!trace.hours()[9]);
    }

    #[test]
    fn test_overlapping_windows_are_not_double_counted() {
        let mut trace = AvailabilityTrace::all_available(100);
        trace.mark_unavailable(10, 30);
        trace.mark_unavailable(20, 40);

        assert_eq!(trace.unavailable_hours(), 30);
        assert_eq!(trace.available_hours(0, 100), 70);
    }

    #[test]
    fn test_empty_window_is_a_no_op() {
        let mut trace = AvailabilityTrace::all_available(24);
        trace.mark_unavailable(5, 5);
        trace.mark_unavailable(30, 40);

        assert_eq!(trace.unavailable_hours(), 0);
    }

    #[test]
    fn test_matrix_columns_follow_trial_order() {
        let mut first = [0.0; MONTHS_PER_YEAR];
        first[3] = 1.0;
        let mut second = [0.0; MONTHS_PER_YEAR];
        second[3] = 2.0;

        let matrix = TrialMatrix::from(vec![first, second]);

        assert_eq!(matrix.num_trials(), 2);
        assert_eq!(matrix.column(3), vec![1.0, 2.0]);
    }
}
