use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal used in place of a size when a row's size cannot be determined
/// from either the size column or the composite key
pub const UNKNOWN_SIZE: &str = "UNKNOWN";

/// A single order line as it arrives from a tabular source.
///
/// The quantity stays in its raw textual form until aggregation; sources
/// routinely deliver it as a bare number, a padded string, or nothing at all,
/// and coercion policy belongs to the aggregation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Vendor style code identifying the product, independent of size
    pub style: String,
    /// Size label exactly as it appeared in the source
    pub raw_size: String,
    /// Ordered quantity, verbatim; absent when the source had no value
    pub quantity: Option<String>,
}

impl OrderLine {
    pub fn new(
        style: impl Into<String>,
        raw_size: impl Into<String>,
        quantity: impl Into<Option<String>>,
    ) -> Self {
        Self {
            style: style.into(),
            raw_size: raw_size.into(),
            quantity: quantity.into(),
        }
    }
}

/// The closed set of size tokens allowed in final output.
///
/// Declaration order is the output column order; `Ord` follows it, so sorted
/// containers keyed by size iterate XS through 4XL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalSize {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "2XL")]
    TwoXl,
    #[serde(rename = "3XL")]
    ThreeXl,
    #[serde(rename = "4XL")]
    FourXl,
}

impl CanonicalSize {
    /// All canonical sizes in output column order
    pub const ALL: [CanonicalSize; 8] = [
        CanonicalSize::Xs,
        CanonicalSize::S,
        CanonicalSize::M,
        CanonicalSize::L,
        CanonicalSize::Xl,
        CanonicalSize::TwoXl,
        CanonicalSize::ThreeXl,
        CanonicalSize::FourXl,
    ];

    /// The label used in keys, column headers, and serialized output
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalSize::Xs => "XS",
            CanonicalSize::S => "S",
            CanonicalSize::M => "M",
            CanonicalSize::L => "L",
            CanonicalSize::Xl => "XL",
            CanonicalSize::TwoXl => "2XL",
            CanonicalSize::ThreeXl => "3XL",
            CanonicalSize::FourXl => "4XL",
        }
    }
}

impl fmt::Display for CanonicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A size after validation: either one of the canonical tokens, or the
/// original text carried forward on rows that need manual review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedSize {
    Canonical(CanonicalSize),
    Fallback(String),
}

impl ResolvedSize {
    pub fn as_canonical(&self) -> Option<CanonicalSize> {
        match self {
            ResolvedSize::Canonical(size) => Some(*size),
            ResolvedSize::Fallback(_) => None,
        }
    }
}

impl fmt::Display for ResolvedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedSize::Canonical(size) => f.write_str(size.label()),
            ResolvedSize::Fallback(text) => f.write_str(text),
        }
    }
}

/// Validation outcome for a row or an aggregate of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// Size resolved to a canonical token, directly or from the key
    #[serde(rename = "OK")]
    Ok,
    /// Size could not be resolved; the row needs human reconciliation
    #[serde(rename = "REVIEW")]
    Review,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::Ok => f.write_str("OK"),
            ValidationStatus::Review => f.write_str("REVIEW"),
        }
    }
}

/// An order line after size resolution, carrying both the corrected
/// identity and the original text for the review trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    /// Composite key rebuilt from the resolved size, used for aggregation
    pub final_key: String,
    pub final_style: String,
    pub final_size: ResolvedSize,
    pub status: ValidationStatus,
    /// Quantity still in raw form; coerced during aggregation
    pub quantity: Option<String>,
    pub original_style: String,
    pub original_size: String,
}

/// Summed quantities for one unique style-size key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    pub composite_key: String,
    pub total_quantity: u32,
    pub size: ResolvedSize,
    /// REVIEW if any contributing row was REVIEW
    pub status: ValidationStatus,
}

/// Caller-supplied details for a style, used to enrich the wide table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInfo {
    pub description: String,
    pub ink_color: String,
}

/// Read-only lookup of style details supplied by the caller
pub trait StyleInfoSource {
    fn lookup(&self, style: &str) -> Option<StyleInfo>;
}

impl StyleInfoSource for HashMap<String, StyleInfo> {
    fn lookup(&self, style: &str) -> Option<StyleInfo> {
        self.get(style).cloned()
    }
}

/// One row of the wide-format output: a style with a quantity for every
/// canonical size, zero-filled where no orders exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub style: String,
    pub description: String,
    pub ink_color: String,
    /// Always holds all eight canonical sizes
    pub quantity_by_size: BTreeMap<CanonicalSize, u32>,
}

impl StyleSummary {
    /// Create a summary with every size slot zeroed
    pub fn new(style: impl Into<String>, info: StyleInfo) -> Self {
        Self {
            style: style.into(),
            description: info.description,
            ink_color: info.ink_color,
            quantity_by_size: CanonicalSize::ALL.iter().map(|&size| (size, 0)).collect(),
        }
    }

    pub fn quantity(&self, size: CanonicalSize) -> u32 {
        self.quantity_by_size.get(&size).copied().unwrap_or(0)
    }
}
