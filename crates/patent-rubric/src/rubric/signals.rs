use super::tables::{ALGORITHM_PATTERNS, REFERENCE_NUMERAL_PATTERN, SPEEDUP_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

// Patterns that fail to compile are dropped and count as zero matches.
static ALGORITHM_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ALGORITHM_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

static REFERENCE_NUMERAL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(REFERENCE_NUMERAL_PATTERN).ok());

static SPEEDUP_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(SPEEDUP_PATTERN).ok());

/// Total non-overlapping occurrences of every keyword in `text`.
pub(crate) fn count_occurrences(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .map(|keyword| text.matches(keyword).count())
        .sum()
}

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

pub(crate) fn count_algorithm_markers(text: &str) -> usize {
    ALGORITHM_RES
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum()
}

/// True when the text carries a three-digit reference numeral such as `102`.
pub(crate) fn has_reference_numeral(text: &str) -> bool {
    REFERENCE_NUMERAL_RE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
}

pub(crate) fn has_speedup_claim(text: &str) -> bool {
    SPEEDUP_RE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
