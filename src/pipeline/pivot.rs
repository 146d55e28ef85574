//! Wide-format reshaping: one row per style, one column per canonical size.

use std::collections::BTreeMap;

use tracing::info;

use super::identifier;
use crate::domain::{AggregatedRecord, StyleInfoSource, StyleSummary};

/// Reshape aggregated style-size rows into one summary per style.
///
/// Every summary carries all eight size slots, zero-filled. Only canonical
/// sizes write a slot; an aggregate whose size is fallback text still
/// creates its style row (the quantity stays visible in the aggregate
/// stream, which is where review follow-up happens), since the wide table
/// only ever has the canonical columns.
///
/// Description and ink color come from the optional caller-supplied lookup;
/// misses yield empty strings. Output is sorted by style ascending.
pub fn format(
    aggregates: &[AggregatedRecord],
    style_info: Option<&dyn StyleInfoSource>,
) -> Vec<StyleSummary> {
    let mut by_style: BTreeMap<String, StyleSummary> = BTreeMap::new();

    for aggregate in aggregates {
        let style = identifier::style_of(&aggregate.composite_key);
        if !by_style.contains_key(style) {
            let info = style_info
                .and_then(|source| source.lookup(style))
                .unwrap_or_default();
            by_style.insert(style.to_string(), StyleSummary::new(style, info));
        }
        if let (Some(summary), Some(size)) =
            (by_style.get_mut(style), aggregate.size.as_canonical())
        {
            *summary.quantity_by_size.entry(size).or_insert(0) += aggregate.total_quantity;
        }
    }

    let summaries: Vec<StyleSummary> = by_style.into_values().collect();
    info!(styles = summaries.len(), "built wide-format style summaries");
    summaries
}
