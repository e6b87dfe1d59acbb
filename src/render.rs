use comfy_table::{Cell, Color, Table, modifiers, presets};
use dayahead::{action::Action, comparator::Comparison, report::SimulationResult};

#[must_use]
pub fn render_result(result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Hour", "Solar\nkWh", "Load\nkWh", "Action", "SOC", "Import\nkWh", "Export\nkWh", "Cost"]);
    for report in &result.hourly {
        let action_color = match report.action {
            Action::ChargeBattery => Color::Green,
            Action::DischargeBattery => Color::Yellow,
            Action::SellToGrid => Color::Cyan,
            Action::UseGrid => Color::Red,
            Action::Idle => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(report.hour),
            Cell::new(format!("{:.2}", report.solar_kwh.0)),
            Cell::new(format!("{:.2}", report.load_kwh.0)),
            Cell::new(format!("{:?}", report.action)).fg(action_color),
            Cell::new(format!("{:.0}%", report.battery_soc * 100.0)),
            Cell::new(format!("{:.2}", report.grid_import_kwh.0)),
            Cell::new(format!("{:.2}", report.grid_export_kwh.0)),
            Cell::new(format!("{:+.3}", report.cost.0))
                .fg(if report.cost.0 > 0.0 { Color::Red } else { Color::Green }),
        ]);
    }
    table
}

#[must_use]
pub fn render_comparison(comparison: &Comparison) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Rule total cost", &format!("{:+.3}", comparison.rule_result.total_cost.0)]);
    table.add_row(vec!["MILP total cost", &format!("{:+.3}", comparison.milp_result.total_cost.0)]);
    table.add_row(vec!["Cost savings", &format!("{:+.3}", comparison.cost_savings.0)]);
    table.add_row(vec!["Improvement", &format!("{:.1}%", comparison.improvement_percent)]);
    table.add_row(vec!["Different decisions", &comparison.different_decisions.to_string()]);
    table
}
