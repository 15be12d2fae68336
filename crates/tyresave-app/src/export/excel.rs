//! Excel export functionality

use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::info;
use tyresave_types::{Error, Result};

use crate::app::SavingsOutcome;

const CURRENCY_FORMAT: &str = "£#,##0.00";

/// Export a savings calculation to an Excel file
pub fn export_to_excel(outcome: &SavingsOutcome, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, outcome)?;

    // Add breakdown sheet
    let breakdown_sheet = workbook.add_worksheet();
    write_breakdown_sheet(breakdown_sheet, outcome)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    info!(path = %output_path.display(), "workbook saved");
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, outcome: &SavingsOutcome) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let currency_format = Format::new().set_num_format(CURRENCY_FORMAT);

    sheet
        .write_string_with_format(0, 0, "Fleet Tyre Maintenance Savings", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let labels = [
        "Generated:",
        "Diesel price (£/litre):",
        "Tyre lifespan (miles):",
        "Total annual saving:",
    ];
    for (i, label) in labels.iter().enumerate() {
        sheet
            .write_string(2 + i as u32, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .write_string(2, 1, Utc::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number_with_format(3, 1, outcome.request.diesel_price_per_litre, &currency_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, outcome.assumptions.tyre_lifespan_miles)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number_with_format(
            5,
            1,
            outcome.result.total_annual_saving,
            &currency_format.clone().set_bold(),
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 26)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_breakdown_sheet(sheet: &mut Worksheet, outcome: &SavingsOutcome) -> Result<()> {
    sheet
        .set_name("Breakdown")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let currency_format = Format::new().set_num_format(CURRENCY_FORMAT);
    let miles_format = Format::new().set_num_format("#,##0");

    let headers = [
        "Class",
        "Vehicles",
        "Annual Miles",
        "Saving per 10k Miles",
        "Annual Saving",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, (class, segment)) in outcome.request.segments.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let unit = outcome.result.unit_saving(*class).unwrap_or(0.0);
        let annual = outcome.result.annual_saving(*class).unwrap_or(0.0);

        sheet
            .write_string(row, 0, class.name())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, f64::from(segment.vehicle_count))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 2, segment.annual_miles, &miles_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 3, unit, &currency_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 4, annual, &currency_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let total_row = (outcome.request.segments.len() + 1) as u32;
    sheet
        .write_string_with_format(total_row, 0, "Total", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number_with_format(
            total_row,
            4,
            outcome.result.total_annual_saving,
            &currency_format.clone().set_bold(),
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 22)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 22)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(4, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
