//! Composite key construction and decomposition.
//!
//! A composite key is `style-size`. Style codes may themselves contain the
//! separator, so decomposition only ever touches the trailing segment.

/// Separator between the style portion and the size portion of a key
pub const KEY_SEPARATOR: char = '-';

/// Build a composite key from a style code and a size label
pub fn build_key(style: &str, size: &str) -> String {
    format!("{style}{KEY_SEPARATOR}{size}")
}

/// Split a key into its style portion and trailing segment.
///
/// Returns `None` when the key has no separator at all.
pub fn split_trailing(key: &str) -> Option<(&str, &str)> {
    key.rsplit_once(KEY_SEPARATOR)
}

/// The style portion of a key: everything before the trailing segment.
///
/// A key with no separator is returned whole.
pub fn style_of(key: &str) -> &str {
    match split_trailing(key) {
        Some((style, _)) => style,
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key() {
        assert_eq!(build_key("TEE-101", "M"), "TEE-101-M");
    }

    #[test]
    fn test_split_trailing_takes_last_segment_only() {
        assert_eq!(split_trailing("HOOD-330-2XL"), Some(("HOOD-330", "2XL")));
        assert_eq!(split_trailing("TEE-101"), Some(("TEE", "101")));
        assert_eq!(split_trailing("PLAIN"), None);
    }

    #[test]
    fn test_style_of_keeps_embedded_separators() {
        assert_eq!(style_of("HOOD-330-2XL"), "HOOD-330");
        assert_eq!(style_of("TEE-101-UNKNOWN"), "TEE-101");
        assert_eq!(style_of("PLAIN"), "PLAIN");
    }
}
