//! CSV emission of pipeline output to caller-supplied writers.

use std::io::Write;

use crate::domain::{AggregatedRecord, CanonicalSize, StyleSummary};
use crate::error::Result;

/// Fixed column order of the printer-ready wide table
pub const SUMMARY_HEADER: [&str; 11] = [
    "SKU",
    "Description",
    "Ink Color",
    "XS",
    "S",
    "M",
    "L",
    "XL",
    "2XL",
    "3XL",
    "4XL",
];

/// Column order of the aggregate sheet used for review follow-up
pub const AGGREGATE_HEADER: [&str; 4] = [
    "Full SKU (SKU-Size)",
    "Total Quantity",
    "Size",
    "Validation Status",
];

/// Write the wide-format summary table as CSV.
pub fn write_summary_csv<W: Write>(writer: W, summaries: &[StyleSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SUMMARY_HEADER)?;
    for summary in summaries {
        let mut record = Vec::with_capacity(SUMMARY_HEADER.len());
        record.push(summary.style.clone());
        record.push(summary.description.clone());
        record.push(summary.ink_color.clone());
        for size in CanonicalSize::ALL {
            record.push(summary.quantity(size).to_string());
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the aggregated stream as CSV, status included.
pub fn write_aggregates_csv<W: Write>(writer: W, aggregates: &[AggregatedRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(AGGREGATE_HEADER)?;
    for aggregate in aggregates {
        csv_writer.write_record([
            aggregate.composite_key.clone(),
            aggregate.total_quantity.to_string(),
            aggregate.size.to_string(),
            aggregate.status.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
