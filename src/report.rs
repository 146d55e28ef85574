//! Serializable run report for the manual-review workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ValidationStatus;
use crate::error::Result;
use crate::pipeline::{aggregate, PipelineRun};

/// Summary of one pipeline run: totals, the OK/REVIEW split, and every
/// flagged row with enough original text to reconcile it by hand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total_rows: usize,
    pub unique_keys: usize,
    pub style_count: usize,
    pub ok_count: usize,
    pub review_count: usize,
    pub flagged: Vec<FlaggedRow>,
}

/// One REVIEW row, preserving what the source actually said
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedRow {
    pub composite_key: String,
    pub original_style: String,
    pub original_size: String,
    /// The fallback text that stood in for a size
    pub resolved_size: String,
    pub quantity: u32,
}

impl Report {
    pub fn from_run(run: &PipelineRun) -> Self {
        let flagged = run
            .validated
            .iter()
            .filter(|record| record.status == ValidationStatus::Review)
            .map(|record| FlaggedRow {
                composite_key: record.final_key.clone(),
                original_style: record.original_style.clone(),
                original_size: record.original_size.clone(),
                resolved_size: record.final_size.to_string(),
                quantity: aggregate::coerce_quantity(record.quantity.as_deref()),
            })
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total_rows: run.stats.total_rows,
            unique_keys: run.aggregated.len(),
            style_count: run.summaries.len(),
            ok_count: run.stats.ok_count,
            review_count: run.stats.review_count,
            flagged,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
