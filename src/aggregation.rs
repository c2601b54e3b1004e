/// Monthly aggregation module
/// Reduces an hourly availability trace to 12 monthly energy values

use crate::models::{AvailabilityTrace, MonthlyEnergyRow, SimulationConfig, MONTHS_PER_YEAR};

/// Monthly energy (MWh) of one trace.
///
/// Months are consumed in calendar order as contiguous segments that cover the
/// whole trace. `month_derating`, when given, scales each month by its own factor.
pub fn aggregate(
    trace: &AvailabilityTrace,
    config: &SimulationConfig,
    month_derating: Option<&[f64]>,
) -> MonthlyEnergyRow {
    let month_hours = &config.calendar.month_hours;
    debug_assert_eq!(month_hours.len(), MONTHS_PER_YEAR);
    debug_assert_eq!(month_hours.iter().sum::<usize>(), trace.len());

    let mut row = [0.0; MONTHS_PER_YEAR];
    let mut hour_index = 0;
    for (month, &hours) in month_hours.iter().enumerate() {
        let effective_hours = trace.available_hours(hour_index, hour_index + hours);
        let mut energy = effective_hours as f64 * config.plant.capacity_mw;
        if let Some(factors) = month_derating {
            energy *= factors[month];
        }
        row[month] = energy;
        hour_index += hours;
    }

    row
}
