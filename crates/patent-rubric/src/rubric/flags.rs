use super::normalizer::NormalizedDocument;
use super::outcome::{Bonus, RedFlag};
use super::signals::{contains_any, has_reference_numeral, has_speedup_claim};
use super::tables::{
    BENCHMARK_MARKER, EMBODIMENT_TERM, HARDWARE_PRESENCE_TERMS, INFORMAL_CLAIMS_MINIMUM,
    MARKETING_TERMS, MULTIPLE_EMBODIMENTS_MINIMUM, SPECIFIC_AI_TERMS, VAGUE_AI_TERMS,
    WORKAROUND_TERMS,
};
use std::collections::BTreeMap;

/// Detects every applicable red flag. Flags are independent and stack.
pub(crate) fn detect_red_flags(document: &NormalizedDocument<'_>) -> BTreeMap<RedFlag, i32> {
    let mut flags = Vec::new();

    if contains_any(&document.full_text, MARKETING_TERMS) {
        flags.push(RedFlag::MarketingLanguage);
    }

    if !document.has_figures() {
        flags.push(RedFlag::NoDrawings);
    }

    let vague_ai = contains_any(&document.full_text, VAGUE_AI_TERMS);
    let specific_ai = contains_any(&document.full_text, SPECIFIC_AI_TERMS);
    if vague_ai && !specific_ai {
        flags.push(RedFlag::VagueAiMl);
    }

    if !contains_any(&document.description_lower, HARDWARE_PRESENCE_TERMS) {
        flags.push(RedFlag::NoHardwareContext);
    }

    if !has_reference_numeral(document.description) {
        flags.push(RedFlag::MissingReferenceNumerals);
    }

    flags
        .into_iter()
        .map(|flag| (flag, flag.deduction()))
        .collect()
}

/// Detects quality signals. The cap is applied during aggregation.
pub(crate) fn detect_bonuses(document: &NormalizedDocument<'_>) -> BTreeMap<Bonus, i32> {
    let mut bonuses = Vec::new();
    let description = document.description_lower.as_str();

    if document.claims.len() >= INFORMAL_CLAIMS_MINIMUM {
        bonuses.push(Bonus::InformalClaims);
    }

    if description.matches(EMBODIMENT_TERM).count() >= MULTIPLE_EMBODIMENTS_MINIMUM {
        bonuses.push(Bonus::MultipleEmbodiments);
    }

    if document.description.contains(BENCHMARK_MARKER) || has_speedup_claim(description) {
        bonuses.push(Bonus::PerformanceBenchmarks);
    }

    if contains_any(description, WORKAROUND_TERMS) {
        bonuses.push(Bonus::CompetitiveWorkaround);
    }

    bonuses
        .into_iter()
        .map(|bonus| (bonus, bonus.points()))
        .collect()
}
