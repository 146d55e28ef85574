//! Size-label normalization onto the canonical size set.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use super::identifier;
use crate::domain::CanonicalSize;

/// Accepted spellings for each canonical size, matched case-insensitively
/// after trimming
static SIZE_VARIANTS: &[(CanonicalSize, &[&str])] = &[
    (
        CanonicalSize::Xs,
        &["xs", "extra small", "extra-small", "x-small"],
    ),
    (CanonicalSize::S, &["s", "small"]),
    (CanonicalSize::M, &["m", "medium", "med"]),
    (CanonicalSize::L, &["l", "large"]),
    (
        CanonicalSize::Xl,
        &["xl", "extra large", "extra-large", "x-large"],
    ),
    (
        CanonicalSize::TwoXl,
        &["2xl", "xxl", "2x", "xx-large", "double xl"],
    ),
    (CanonicalSize::ThreeXl, &["3xl", "xxxl", "3x", "triple xl"]),
    (CanonicalSize::FourXl, &["4xl", "xxxxl", "4x"]),
];

/// Flattened variant table, built once at first use
static VARIANT_LOOKUP: Lazy<HashMap<&'static str, CanonicalSize>> = Lazy::new(|| {
    let mut lookup = HashMap::new();
    for (size, variants) in SIZE_VARIANTS {
        for variant in *variants {
            lookup.insert(*variant, *size);
        }
    }
    lookup
});

/// Matches labels like "2xl" or "3 XL" at the start of the input
static NUMERIC_XL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*xl").unwrap());

/// Normalize a size label to its canonical token.
///
/// Resolution order: exact canonical name, variant table, `<digit> xl`
/// pattern, then substring heuristics for the double/triple-XL spellings.
/// Empty input returns `None` silently; any other unmatched input returns
/// `None` after logging a warning.
pub fn normalize(raw: &str) -> Option<CanonicalSize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Direct match against a canonical name
    if let Some(size) = CanonicalSize::ALL
        .iter()
        .copied()
        .find(|size| size.label().eq_ignore_ascii_case(trimmed))
    {
        return Some(size);
    }

    // Check variant spellings
    let lowered = trimmed.to_lowercase();
    if let Some(&size) = VARIANT_LOOKUP.get(lowered.as_str()) {
        return Some(size);
    }

    // Numeric sizes like "2XL" or "2 XL"
    if let Some(captures) = NUMERIC_XL.captures(&lowered) {
        match &captures[1] {
            "2" => return Some(CanonicalSize::TwoXl),
            "3" => return Some(CanonicalSize::ThreeXl),
            "4" => return Some(CanonicalSize::FourXl),
            _ => {}
        }
    }

    // "XXL" buried in a longer label; the 2XL check runs first
    if lowered.contains("xxl") || lowered.contains("2xl") {
        return Some(CanonicalSize::TwoXl);
    }
    if lowered.contains("xxxl") || lowered.contains("3xl") {
        return Some(CanonicalSize::ThreeXl);
    }

    warn!(size = raw, "could not normalize size label");
    None
}

/// Extract a canonical size from the trailing segment of a composite key.
///
/// Returns `None` when the key has no separator or the segment does not
/// normalize.
pub fn extract_size_from_key(key: &str) -> Option<CanonicalSize> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let (_, candidate) = identifier::split_trailing(key)?;
    normalize(candidate)
}
