//! Row validation: size resolution with fallback recovery from the
//! composite key, tagging each record OK or REVIEW.

use tracing::{info, warn};

use super::{identifier, normalize};
use crate::domain::{
    CanonicalSize, OrderLine, ResolvedSize, ValidatedRecord, ValidationStatus, UNKNOWN_SIZE,
};

/// Outcome of the multi-step size resolution, first success wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeResolution {
    /// The size column itself normalized
    Direct(CanonicalSize),
    /// The size column was unusable but the composite key still encoded a
    /// valid size
    RecoveredFromKey(CanonicalSize),
    /// Neither source yielded a size; carries the original text, or
    /// `UNKNOWN` when the column was empty
    Unresolved(String),
}

/// Resolve a final size for a row from its size column and composite key.
pub fn resolve_size(original_size: &str, composite_key: &str) -> SizeResolution {
    if let Some(size) = normalize::normalize(original_size) {
        return SizeResolution::Direct(size);
    }

    if let Some(size) = normalize::extract_size_from_key(composite_key) {
        info!(
            key = composite_key,
            size = %size,
            "recovered size from composite key for row with missing or invalid size"
        );
        return SizeResolution::RecoveredFromKey(size);
    }

    warn!(
        key = composite_key,
        original_size, "could not determine size for row"
    );
    let fallback = if original_size.is_empty() {
        UNKNOWN_SIZE.to_string()
    } else {
        original_size.to_string()
    };
    SizeResolution::Unresolved(fallback)
}

/// Validate one order line, rebuilding its composite key from whatever
/// size the resolution settled on.
pub fn validate(line: &OrderLine) -> ValidatedRecord {
    let composite_key = identifier::build_key(&line.style, &line.raw_size);

    let (final_size, status) = match resolve_size(&line.raw_size, &composite_key) {
        SizeResolution::Direct(size) | SizeResolution::RecoveredFromKey(size) => {
            (ResolvedSize::Canonical(size), ValidationStatus::Ok)
        }
        SizeResolution::Unresolved(text) => {
            (ResolvedSize::Fallback(text), ValidationStatus::Review)
        }
    };

    // A corrected size must propagate into the key used for aggregation
    let final_key = if line.style.is_empty() {
        composite_key
    } else {
        identifier::build_key(&line.style, &final_size.to_string())
    };

    ValidatedRecord {
        final_key,
        final_style: line.style.clone(),
        final_size,
        status,
        quantity: line.quantity.clone(),
        original_style: line.style.clone(),
        original_size: line.raw_size.clone(),
    }
}

/// Validate a batch of order lines and log the OK/REVIEW split.
pub fn validate_batch(lines: &[OrderLine]) -> Vec<ValidatedRecord> {
    let records: Vec<ValidatedRecord> = lines.iter().map(validate).collect();

    let review_count = records
        .iter()
        .filter(|record| record.status == ValidationStatus::Review)
        .count();
    info!(
        ok = records.len() - review_count,
        review = review_count,
        "validation complete"
    );
    if review_count > 0 {
        warn!(review = review_count, "rows require manual review");
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direct_match_wins() {
        assert_eq!(
            resolve_size("Medium", "TEE-101-Medium"),
            SizeResolution::Direct(CanonicalSize::M)
        );
    }

    #[test]
    fn test_resolve_recovers_size_from_key() {
        assert_eq!(
            resolve_size("", "TEE-101-L"),
            SizeResolution::RecoveredFromKey(CanonicalSize::L)
        );
    }

    #[test]
    fn test_resolve_preserves_unresolvable_text() {
        assert_eq!(
            resolve_size("purple", "TEE-101-purple"),
            SizeResolution::Unresolved("purple".to_string())
        );
    }

    #[test]
    fn test_resolve_empty_size_becomes_unknown() {
        assert_eq!(
            resolve_size("", "TEE-101-"),
            SizeResolution::Unresolved(UNKNOWN_SIZE.to_string())
        );
    }

    #[test]
    fn test_validate_rebuilds_key_from_resolved_size() {
        let line = OrderLine::new("TEE-101", "Medium", Some("3".to_string()));
        let record = validate(&line);
        assert_eq!(record.final_key, "TEE-101-M");
        assert_eq!(record.final_size, ResolvedSize::Canonical(CanonicalSize::M));
        assert_eq!(record.status, ValidationStatus::Ok);
        assert_eq!(record.original_size, "Medium");
    }

    #[test]
    fn test_validate_recovers_from_junk_prefixed_size() {
        // "Slim-L" fails direct normalization, but the key it produces
        // ends in a valid size segment
        let line = OrderLine::new("TEE-101", "Slim-L", Some("1".to_string()));
        let record = validate(&line);
        assert_eq!(record.final_size, ResolvedSize::Canonical(CanonicalSize::L));
        assert_eq!(record.status, ValidationStatus::Ok);
        assert_eq!(record.final_key, "TEE-101-L");
    }

    #[test]
    fn test_validate_flags_unresolvable_row_for_review() {
        let line = OrderLine::new("TEE-101", "purple", None);
        let record = validate(&line);
        assert_eq!(
            record.final_size,
            ResolvedSize::Fallback("purple".to_string())
        );
        assert_eq!(record.status, ValidationStatus::Review);
        assert_eq!(record.final_key, "TEE-101-purple");
    }

    #[test]
    fn test_validate_batch_keeps_every_row() {
        let lines = vec![
            OrderLine::new("TEE-101", "M", Some("3".to_string())),
            OrderLine::new("TEE-101", "purple", Some("1".to_string())),
        ];
        let records = validate_batch(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, ValidationStatus::Ok);
        assert_eq!(records[1].status, ValidationStatus::Review);
    }
}
