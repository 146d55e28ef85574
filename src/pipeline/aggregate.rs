//! Quantity aggregation over validated records, grouped by composite key.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::info;

use crate::domain::{AggregatedRecord, ValidatedRecord, ValidationStatus};

/// Coerce a raw quantity value to a non-negative count.
///
/// Absent, blank, and non-numeric values all coerce to 0; rows are never
/// dropped or rejected over a bad quantity. Negative values clamp to 0.
pub fn coerce_quantity(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(count) = trimmed.parse::<i64>() {
        return count.clamp(0, u32::MAX as i64) as u32;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.round() as u32,
        _ => 0,
    }
}

/// Group validated records by composite key, summing quantities.
///
/// A group is REVIEW if any contributing row was REVIEW; a key with only
/// REVIEW rows still produces a record for manual follow-up. Output is
/// sorted ascending by key.
pub fn aggregate(records: &[ValidatedRecord]) -> Vec<AggregatedRecord> {
    let mut groups: BTreeMap<String, AggregatedRecord> = BTreeMap::new();

    for record in records {
        let quantity = coerce_quantity(record.quantity.as_deref());
        match groups.entry(record.final_key.clone()) {
            Entry::Occupied(mut entry) => {
                let group = entry.get_mut();
                group.total_quantity += quantity;
                if record.status == ValidationStatus::Review {
                    group.status = ValidationStatus::Review;
                }
            }
            Entry::Vacant(entry) => {
                // All rows behind one key share a resolved size, so the
                // first member's size stands for the group
                entry.insert(AggregatedRecord {
                    composite_key: record.final_key.clone(),
                    total_quantity: quantity,
                    size: record.final_size.clone(),
                    status: record.status,
                });
            }
        }
    }

    let aggregated: Vec<AggregatedRecord> = groups.into_values().collect();
    info!(
        rows = records.len(),
        keys = aggregated.len(),
        "aggregated order rows into unique style-size combinations"
    );
    aggregated
}
