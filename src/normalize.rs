use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Canonical form used for all tag comparison: NFKC fold, trim, lowercase.
/// Synonyms are intentionally not resolved; "js" and "javascript" stay
/// distinct tags.
pub fn normalize_tag(tag: &str) -> String {
    tag.nfkc().collect::<String>().trim().to_lowercase()
}

/// Tag list as a normalized set for membership checks.
pub fn normalize_tag_set(tags: &[String]) -> HashSet<String> {
    tags.iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tag list normalized, sorted, and deduplicated. Matched/missing lists are
/// built from this so output ordering never depends on input ordering.
pub fn normalize_tags_vec(tags: &[String]) -> Vec<String> {
    let mut result: Vec<String> = tags
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect();
    result.sort();
    result.dedup();
    result
}
