/// Reporting and output formatting module
/// Handles all console output and result presentation

use comfy_table::{presets, Cell, CellAlignment, Color, Table};

use crate::models::{GroupResult, SimulationConfig};

const MWH_PER_GWH: f64 = 1000.0;

pub fn to_gwh(mwh: f64) -> f64 {
    mwh / MWH_PER_GWH
}

/// ENFICC in GWh rounded to two decimals
pub fn enficc_gwh(result: &GroupResult) -> f64 {
    (to_gwh(result.enficc) * 100.0).round() / 100.0
}

/// Display the simulation banner and the inputs shared by every group
pub fn display_header(config: &SimulationConfig, seed: u64) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                 SMR FIRM ENERGY (ENFICC) MONTE CARLO SIMULATION              ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!(
        "Plant: {:.0} MW | Year: {} h | Maintenance: {} h | SCRAM: {:.2}/yr, {}-{} h",
        config.plant.capacity_mw,
        config.calendar.hours_per_year,
        config.outages.maintenance_hours,
        config.outages.scram_rate_per_year,
        config.outages.scram_duration_min_hours,
        config.outages.scram_duration_max_hours,
    );
    println!("Trials per group: {} | Seed: {}\n", config.trials, seed);
}

/// Monthly firm energy of one group
pub fn build_group_table(result: &GroupResult) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Month", "P5 (GWh)", "Mean (GWh)", "Min (GWh)", "Max (GWh)"]);

    for (month, (p5, stats)) in result.months.iter().zip(result.p5_curve.iter().zip(&result.monthly)) {
        let p5_cell = Cell::new(format!("{:.1}", to_gwh(*p5))).set_alignment(CellAlignment::Right);
        let p5_cell = if *p5 == result.enficc { p5_cell.fg(Color::Red) } else { p5_cell };
        table.add_row(vec![
            Cell::new(month),
            p5_cell,
            Cell::new(format!("{:.1}", to_gwh(stats.mean))).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", to_gwh(stats.min))).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", to_gwh(stats.max))).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// ENFICC of every group side by side
pub fn build_summary_table(results: &[GroupResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Group", "Configuration", "Trials", "ENFICC (GWh)"]);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.group),
            Cell::new(&result.title),
            Cell::new(result.num_trials).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", enficc_gwh(result))).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Display the monthly firm energy of one group
pub fn display_group_result(result: &GroupResult) {
    println!("=== Group {} - {} ===", result.group, result.title);
    println!("{}", build_group_table(result));
    println!("  ENFICC: {:.2} GWh\n", enficc_gwh(result));
}

/// Display the ENFICC comparison of all groups
pub fn display_summary(results: &[GroupResult]) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                           ENFICC VALUES (GWh)                                ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
    println!("{}", build_summary_table(results));
}
