//! Savings report rendering

use crate::model::{CalculationResult, FleetSegments, GlobalAssumptions};

/// Insert a comma every three digits of an unsigned integer string
fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format an amount as pounds with thousands separators (e.g. "£1,234.56")
pub fn format_gbp(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, pence) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // "-0.00" should not carry a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}£{}.{}", sign, group_thousands(whole), pence)
}

fn format_miles(miles: f64) -> String {
    let whole = format!("{:.0}", miles.abs());
    let sign = if miles < 0.0 && whole != "0" { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&whole))
}

pub fn generate_savings_report(
    segments: &FleetSegments,
    diesel_price_per_litre: f64,
    assumptions: &GlobalAssumptions,
    result: &CalculationResult,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("        Fleet Tyre Maintenance Savings Report       \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!(
        "  Diesel price:                {}/litre\n\n",
        format_gbp(diesel_price_per_litre)
    ));

    report.push_str("[Fleet Composition & Mileage]\n");
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<20} {:>8} {:>12} {:>12} {:>14}\n",
        "Class", "Count", "Miles/yr", "Per 10k", "Annual"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for (class, segment) in segments {
        if !segment.is_active() {
            report.push_str(&format!(
                "{:<20} {:>8} {:>12} {:>12} {:>14}\n",
                class.name(),
                segment.vehicle_count,
                format_miles(segment.annual_miles),
                "-",
                "-"
            ));
            continue;
        }
        let unit = result.unit_saving(*class).unwrap_or(0.0);
        let annual = result.annual_saving(*class).unwrap_or(0.0);
        report.push_str(&format!(
            "{:<20} {:>8} {:>12} {:>12} {:>14}\n",
            class.name(),
            segment.vehicle_count,
            format_miles(segment.annual_miles),
            format_gbp(unit),
            format_gbp(annual)
        ));
    }
    report.push('\n');

    if result.has_savings() {
        report.push_str("[Total Estimated Annual Savings]\n");
        report.push_str(&format!(
            "  Total potential savings:     {}\n\n",
            format_gbp(result.total_annual_saving)
        ));
        report.push_str(&format!(
            "  Maintaining correct tyre pressures could save your fleet an estimated\n  {} per year in reduced fuel and tyre replacement costs.\n\n",
            format_gbp(result.total_annual_saving)
        ));

        let summary: Vec<String> = result
            .savings_summary()
            .into_iter()
            .map(|(class, unit)| format!("{}: {}", class.name(), format_gbp(unit)))
            .collect();
        report.push_str("  Savings per 10,000 miles: ");
        report.push_str(&summary.join("; "));
        report.push_str("\n\n");
    } else {
        report.push_str("[No Savings Calculated]\n");
        report.push_str("  Enter vehicle counts and mileage to calculate potential savings.\n\n");
    }

    report.push_str(&format!(
        "Estimate based on average MPG differences, budget tyre costs and a\n{} mile tyre lifespan. Actual savings vary with driving conditions,\nmaintenance, tyre type and fuel prices.\n",
        format_miles(assumptions.tyre_lifespan_miles)
    ));
    report.push_str("==================================================\n");
    report
}
