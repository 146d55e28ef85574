// Order processing pipeline: combine, validate, aggregate, pivot

use std::io::Read;

use tracing::info;

use crate::domain::{
    AggregatedRecord, OrderLine, StyleInfoSource, StyleSummary, ValidatedRecord, ValidationStatus,
};
use crate::error::{PipelineError, Result};

pub mod aggregate;
pub mod combine;
pub mod identifier;
pub mod normalize;
pub mod pivot;
pub mod validate;

/// Everything one pipeline run produced.
///
/// The validated and aggregated streams stay available alongside the wide
/// summaries: the pivoted table alone cannot reconstruct which cells came
/// from REVIEW rows.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub validated: Vec<ValidatedRecord>,
    pub aggregated: Vec<AggregatedRecord>,
    pub summaries: Vec<StyleSummary>,
    pub stats: RunStats,
}

/// OK/REVIEW split for one run, for operator visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total_rows: usize,
    pub ok_count: usize,
    pub review_count: usize,
}

/// Run the full pipeline over a combined batch of order lines.
///
/// An empty batch is a fatal precondition failure; per-row ambiguity never
/// is, it flows through as REVIEW records instead.
pub fn run(
    lines: &[OrderLine],
    style_info: Option<&dyn StyleInfoSource>,
) -> Result<PipelineRun> {
    if lines.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }

    let validated = validate::validate_batch(lines);
    let review_count = validated
        .iter()
        .filter(|record| record.status == ValidationStatus::Review)
        .count();
    let stats = RunStats {
        total_rows: validated.len(),
        ok_count: validated.len() - review_count,
        review_count,
    };

    let aggregated = aggregate::aggregate(&validated);
    let summaries = pivot::format(&aggregated, style_info);

    info!(
        rows = stats.total_rows,
        keys = aggregated.len(),
        styles = summaries.len(),
        "pipeline run complete"
    );

    Ok(PipelineRun {
        validated,
        aggregated,
        summaries,
        stats,
    })
}

/// Convenience entry point: combine CSV sources, then run the pipeline.
pub fn run_sources<R: Read>(
    sources: impl IntoIterator<Item = R>,
    style_info: Option<&dyn StyleInfoSource>,
) -> Result<PipelineRun> {
    let lines = combine::combine(sources)?;
    run(&lines, style_info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_empty_batch() {
        let result = run(&[], None);
        assert!(matches!(result, Err(PipelineError::EmptyBatch)));
    }

    #[test]
    fn test_run_counts_ok_and_review_rows() {
        let lines = vec![
            OrderLine::new("TEE-101", "M", Some("3".to_string())),
            OrderLine::new("TEE-101", "purple", Some("1".to_string())),
        ];
        let run = run(&lines, None).unwrap();
        assert_eq!(run.stats.total_rows, 2);
        assert_eq!(run.stats.ok_count, 1);
        assert_eq!(run.stats.review_count, 1);
        // Review visibility survives into the aggregate stream
        assert!(run
            .aggregated
            .iter()
            .any(|record| record.status == ValidationStatus::Review));
    }
}
