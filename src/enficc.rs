/// Percentile and ENFICC reduction
/// Turns a trial matrix into the monthly firm-energy curve and its worst month

use crate::models::{MonthlySummary, P5Curve, TrialMatrix, MONTHS, MONTHS_PER_YEAR};

/// Lower-tail percentile defining firm energy: 95% of trials exceed it
pub const FIRM_PERCENTILE: f64 = 5.0;

/// Percentile by linear interpolation between order statistics.
///
/// Sorts `values` in place. An empty slice yields 0.
pub fn percentile(values: &mut [f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 1 {
        return values[0];
    }

    let rank = (p / 100.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let weight = rank - lower as f64;

    values[lower] + (values[upper] - values[lower]) * weight
}

/// P5 curve of every month, then ENFICC as its minimum.
///
/// `scalar_factor` multiplies the already-reduced curve once; it is never
/// applied to individual trials.
pub fn reduce(matrix: &TrialMatrix, scalar_factor: Option<f64>) -> (P5Curve, f64) {
    let mut p5_curve = [0.0; MONTHS_PER_YEAR];
    for (month, p5) in p5_curve.iter_mut().enumerate() {
        let mut column = matrix.column(month);
        *p5 = percentile(&mut column, FIRM_PERCENTILE);
    }

    if let Some(factor) = scalar_factor {
        for p5 in &mut p5_curve {
            *p5 *= factor;
        }
    }

    let enficc = p5_curve.iter().copied().fold(f64::INFINITY, f64::min);
    (p5_curve, enficc)
}

/// Mean, spread and extremes of each month across trials
pub fn summarize(matrix: &TrialMatrix) -> Vec<MonthlySummary> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(month, label)| {
            let mut column = matrix.column(month);
            let n = column.len().max(1) as f64;
            let mean = column.iter().sum::<f64>() / n;
            let variance = column.iter().map(|energy| (energy - mean).powi(2)).sum::<f64>() / n;
            let median = percentile(&mut column, 50.0);

            MonthlySummary {
                month: (*label).to_string(),
                mean,
                std_dev: variance.sqrt(),
                min: column.first().copied().unwrap_or(0.0),
                median,
                max: column.last().copied().unwrap_or(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyEnergyRow;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn matrix_from_column(values: &[f64]) -> TrialMatrix {
        let rows: Vec<MonthlyEnergyRow> = values
            .iter()
            .map(|&value| {
                let mut row = [0.0; MONTHS_PER_YEAR];
                for (month, energy) in row.iter_mut().enumerate() {
                    *energy = value + month as f64;
                }
                row
            })
            .collect();
        TrialMatrix::from(rows)
    }

    #[test]
    fn test_percentile_interpolates_between_points() {
        let mut values = vec![4.0, 1.0, 3.0, 2.0];
        assert_abs_diff_eq!(percentile(&mut values, 25.0), 1.75);
        assert_abs_diff_eq!(percentile(&mut values, 0.0), 1.0);
        assert_abs_diff_eq!(percentile(&mut values, 100.0), 4.0);
    }

    #[test]
    fn test_fifth_percentile_of_one_to_hundred_and_one() {
        let mut values: Vec<f64> = (1..=101).map(f64::from).collect();
        assert_abs_diff_eq!(percentile(&mut values, 5.0), 6.0);

        let mut values: Vec<f64> = (1..=100).map(f64::from).collect();
        // rank 4.95 between 5 and 6
        assert_abs_diff_eq!(percentile(&mut values, 5.0), 5.95, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_of_degenerate_inputs() {
        assert_eq!(percentile(&mut [], 5.0), 0.0);
        assert_eq!(percentile(&mut [42.0], 5.0), 42.0);
    }

    #[test]
    fn test_enficc_is_the_weakest_month() {
        let matrix = matrix_from_column(&[10.0, 20.0, 30.0]);
        let (p5_curve, enficc) = reduce(&matrix, None);

        assert_abs_diff_eq!(p5_curve[0], 11.0);
        assert_abs_diff_eq!(p5_curve[11], 22.0);
        assert_abs_diff_eq!(enficc, 11.0);
    }

    #[test]
    fn test_scalar_factor_scales_curve_and_enficc_exactly() {
        let matrix = matrix_from_column(&[5.0, 9.0, 1.0, 7.0, 3.0]);
        let (plain, plain_enficc) = reduce(&matrix, None);
        let (scaled, scaled_enficc) = reduce(&matrix, Some(0.97));

        for month in 0..MONTHS_PER_YEAR {
            assert_eq!(scaled[month], plain[month] * 0.97);
        }
        assert_eq!(scaled_enficc, plain_enficc * 0.97);
    }

    #[test]
    fn test_summary_matches_column() {
        let matrix = matrix_from_column(&[2.0, 4.0, 6.0, 8.0]);
        let summary = summarize(&matrix);

        assert_eq!(summary.len(), MONTHS_PER_YEAR);
        assert_eq!(summary[0].month, "Jan");
        assert_abs_diff_eq!(summary[0].mean, 5.0);
        assert_abs_diff_eq!(summary[0].median, 5.0);
        assert_abs_diff_eq!(summary[0].min, 2.0);
        assert_abs_diff_eq!(summary[0].max, 8.0);
        assert_abs_diff_eq!(summary[0].std_dev, 5.0_f64.sqrt());
        assert_abs_diff_eq!(summary[3].mean, 8.0);
    }

    proptest! {
        #[test]
        fn p5_lies_between_min_and_median(
            values in proptest::collection::vec(0.0f64..1.0e6, 1..200),
        ) {
            let matrix = matrix_from_column(&values);
            let (p5_curve, enficc) = reduce(&matrix, None);

            for (month, stats) in summarize(&matrix).iter().enumerate() {
                prop_assert!(p5_curve[month] >= stats.min);
                prop_assert!(p5_curve[month] <= stats.median);
                prop_assert!(stats.median <= stats.max);
                prop_assert!(enficc <= p5_curve[month]);
            }
        }
    }
}
