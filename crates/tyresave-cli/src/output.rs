//! Output formatting module

use tyresave_app::app::{ClassBreakdown, SavingsOutcome};
use tyresave_domain::service::{format_gbp, generate_savings_report};
use tyresave_types::{OutputFormat, Result};

pub fn output_savings(output_format: OutputFormat, outcome: &SavingsOutcome) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(outcome)?;
            println!("{}", content);
        }
        OutputFormat::Table => {
            let report = generate_savings_report(
                &outcome.request.segments,
                outcome.request.diesel_price_per_litre,
                &outcome.assumptions,
                &outcome.result,
            );
            println!("{}", report);
        }
    }
    Ok(())
}

pub fn output_classes(
    output_format: OutputFormat,
    diesel_price_per_litre: f64,
    breakdown: &[ClassBreakdown],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(breakdown)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nSavings per 10,000 miles at {}/litre", format_gbp(diesel_price_per_litre));
    println!("{}", "=".repeat(84));
    println!(
        "{:<20} {:>7} {:>7} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Class", "MPG", "MPG(u)", "Tyres", "Tyres(u)", "Fuel", "Tyre", "Total"
    );
    println!("{}", "-".repeat(84));
    for entry in breakdown {
        let spec = &entry.spec;
        let saving = &entry.saving_per_10k;
        println!(
            "{:<20} {:>7.1} {:>7.1} {:>9} {:>9} {:>9} {:>9} {:>9}",
            spec.name(),
            spec.mpg_standard,
            spec.mpg_underinflated,
            format_gbp(spec.tyre_cost_standard),
            format_gbp(spec.tyre_cost_underinflated),
            format_gbp(saving.fuel),
            format_gbp(saving.tyre),
            format_gbp(saving.total())
        );
    }
    println!("{}", "=".repeat(84));

    Ok(())
}
