//! Order ingestion: parse CSV sources into order lines and merge batches.
//!
//! The caller owns file discovery and opening; this module only consumes
//! `Read` sources it is handed.

use std::io::Read;

use serde::Deserialize;
use tracing::info;

use crate::domain::OrderLine;
use crate::error::{PipelineError, Result};

pub const STYLE_COLUMN: &str = "Vendor Style";
pub const SIZE_COLUMN: &str = "Size";
pub const QUANTITY_COLUMN: &str = "Quantity";

/// One CSV row as exported by the order system. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    #[serde(rename = "Vendor Style")]
    style: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Quantity")]
    quantity: Option<String>,
}

/// Parse one CSV source into order lines.
///
/// The `Vendor Style` and `Size` columns must be present in the header;
/// a source missing either fails the whole batch. Blank cell values are
/// ordinary row data and flow on to validation.
pub fn read_order_lines<R: Read>(source: R) -> Result<Vec<OrderLine>> {
    let mut reader = csv::Reader::from_reader(source);

    let headers = reader.headers()?.clone();
    for required in [STYLE_COLUMN, SIZE_COLUMN] {
        if !headers.iter().any(|header| header == required) {
            return Err(PipelineError::MissingColumn(required.to_string()));
        }
    }

    let mut lines = Vec::new();
    for row in reader.deserialize::<RawOrderRow>() {
        let row = row?;
        lines.push(OrderLine {
            style: row.style,
            raw_size: row.size,
            quantity: row.quantity,
        });
    }

    info!(rows = lines.len(), "loaded order rows from source");
    Ok(lines)
}

/// Parse and concatenate multiple CSV sources, preserving source order.
pub fn combine<R: Read>(sources: impl IntoIterator<Item = R>) -> Result<Vec<OrderLine>> {
    let mut combined = Vec::new();
    let mut source_count = 0;
    for source in sources {
        combined.extend(read_order_lines(source)?);
        source_count += 1;
    }
    info!(
        sources = source_count,
        rows = combined.len(),
        "combined order sources"
    );
    Ok(combined)
}

/// Merge batches of already-parsed order lines, preserving batch order.
pub fn combine_batches(batches: impl IntoIterator<Item = Vec<OrderLine>>) -> Vec<OrderLine> {
    batches.into_iter().flatten().collect()
}
