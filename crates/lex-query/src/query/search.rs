//! Case-insensitive substring matching shared by list views and quick find.

/// Whether `haystack` contains `needle_lower`, ignoring case.
///
/// `needle_lower` must already be lowercased; callers fold the term once per
/// query rather than once per record.
#[must_use]
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::contains_folded;

    #[test]
    fn ignores_case_of_haystack() {
        assert!(contains_folded("Alpha Case", "case"));
        assert!(contains_folded("ÁGUA Viva", "água"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(contains_folded("anything", ""));
    }

    #[test]
    fn substring_must_be_contiguous() {
        assert!(!contains_folded("Gamma", "case"));
        assert!(!contains_folded("c-a-s-e", "case"));
    }
}
