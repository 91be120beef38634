//! Heuristic 100-point rubric for provisional patent drafts.
//!
//! Six independent category scorers read the same normalized text, red flags
//! subtract fixed deductions, bonuses add up to ten points, and the total is
//! clamped to `0..=100` before a grade tier is assigned.

mod document;
mod flags;
mod normalizer;
mod outcome;
mod rules;
mod signals;
mod tables;

pub use document::{FigureRef, PatentDocumentView};
pub use outcome::{
    Bonus, Category, CategoryResult, Criterion, Grade, RedFlag, ScoringResult,
};

use normalizer::NormalizedDocument;
use outcome::{capped_bonus, RECOMMENDATION_LIMIT};
use std::collections::BTreeMap;
use tracing::debug;

/// Stateless scorer applying the fixed rubric tables to a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubricScorer;

impl RubricScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, document: &PatentDocumentView) -> ScoringResult {
        let normalized = NormalizedDocument::new(document);

        let mut categories = BTreeMap::new();
        let mut recommendations = Vec::new();
        for category_score in rules::score_categories(&normalized) {
            recommendations.extend(
                category_score
                    .recommendations
                    .into_iter()
                    .map(str::to_string),
            );
            categories.insert(category_score.category, category_score.result);
        }
        recommendations.truncate(RECOMMENDATION_LIMIT);

        let deductions = flags::detect_red_flags(&normalized);
        let bonuses = flags::detect_bonuses(&normalized);

        let base: i64 = categories
            .values()
            .map(|result: &CategoryResult| i64::from(result.score))
            .sum();
        let deduction_total: i64 = deductions.values().map(|points| i64::from(*points)).sum();
        let bonus_total = i64::from(capped_bonus(bonuses.values().sum()));
        let total_score = (base + deduction_total + bonus_total).clamp(0, 100) as u8;
        let grade = Grade::from_score(total_score);

        debug!(
            total_score,
            base,
            deduction_total,
            bonus_total,
            grade = grade.label(),
            "scored patent document"
        );

        ScoringResult {
            total_score,
            grade,
            categories,
            deductions,
            bonuses,
            recommendations,
        }
    }
}

/// Scores a document with the standard rubric.
pub fn score(document: &PatentDocumentView) -> ScoringResult {
    RubricScorer::new().score(document)
}
