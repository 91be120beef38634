mod ledger;

pub use ledger::{BatchLedger, LedgerEntry};

use crate::rubric::{Bonus, Category, Criterion, Grade, RedFlag, ScoringResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_NAME: &str = "score_report.json";
const TEXT_RECOMMENDATIONS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write ledger: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScoreView {
    pub label: String,
    pub score: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<Criterion, u32>>,
}

/// Persisted and served form of a [`ScoringResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub score: u8,
    pub grade: String,
    pub tier: Grade,
    pub category_scores: BTreeMap<Category, CategoryScoreView>,
    pub deductions: BTreeMap<RedFlag, i32>,
    pub bonuses: BTreeMap<Bonus, i32>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    pub fn from_result(result: &ScoringResult, title: Option<&str>) -> Self {
        Self::from_result_at(result, title, Utc::now())
    }

    pub fn from_result_at(
        result: &ScoringResult,
        title: Option<&str>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let category_scores = result
            .categories
            .iter()
            .map(|(category, outcome)| {
                (
                    *category,
                    CategoryScoreView {
                        label: category.label().to_string(),
                        score: outcome.score,
                        max: outcome.max,
                        details: Some(outcome.breakdown.clone()),
                    },
                )
            })
            .collect();

        Self {
            title: title
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(str::to_string),
            score: result.total_score,
            grade: result.grade.label().to_string(),
            tier: result.grade,
            category_scores,
            deductions: result.deductions.clone(),
            bonuses: result.bonuses.clone(),
            recommendations: result.recommendations.clone(),
            generated_at,
        }
    }

    /// Drops the per-criterion details, keeping category totals.
    pub fn without_breakdown(mut self) -> Self {
        for view in self.category_scores.values_mut() {
            view.details = None;
        }
        self
    }

    /// Writes `score_report.json` into `dir`, creating the directory first.
    pub fn write_json<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ReportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(REPORT_FILE_NAME);
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, body)?;
        tracing::info!(path = %path.display(), score = self.score, "wrote score report");
        Ok(path)
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("Score: {}/100 - {}", self.score, self.grade)];
        if let Some(title) = &self.title {
            lines.push(format!("Title: {title}"));
        }

        lines.push("\nCategories:".to_string());
        lines.extend(
            self.category_scores
                .values()
                .map(|view| format!("  {}: {}/{}", view.label, view.score, view.max)),
        );

        if !self.deductions.is_empty() {
            lines.push("\nDeductions:".to_string());
            lines.extend(
                self.deductions
                    .iter()
                    .map(|(flag, points)| format!("  {}: {}", flag.label(), points)),
            );
        }

        if !self.bonuses.is_empty() {
            lines.push("\nBonuses:".to_string());
            lines.extend(
                self.bonuses
                    .iter()
                    .map(|(bonus, points)| format!("  {}: +{}", bonus.label(), points)),
            );
        }

        if !self.recommendations.is_empty() {
            lines.push("\nTop Recommendations:".to_string());
            lines.extend(
                self.recommendations
                    .iter()
                    .take(TEXT_RECOMMENDATIONS)
                    .map(|recommendation| format!("  - {recommendation}")),
            );
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::{score, FigureRef, PatentDocumentView};
    use chrono::TimeZone;

    fn sparse_result() -> ScoringResult {
        score(&PatentDocumentView {
            title: "Widget".to_string(),
            summary: "A revolutionary widget.".to_string(),
            figures: vec![FigureRef::new("Overview")],
            claims: (1..=5).map(|n| format!("{n}. A widget.")).collect(),
            ..PatentDocumentView::default()
        })
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn report_mirrors_scoring_result() {
        let result = sparse_result();
        let report = ScoreReport::from_result_at(&result, Some("  Widget "), fixed_time());

        assert_eq!(report.title.as_deref(), Some("Widget"));
        assert_eq!(report.score, result.total_score);
        assert_eq!(report.grade, result.grade.label());
        assert_eq!(report.category_scores.len(), 6);
        assert_eq!(report.deductions.get(&RedFlag::MarketingLanguage), Some(&-10));
        assert_eq!(report.bonuses.get(&Bonus::InformalClaims), Some(&3));
        assert!(report
            .category_scores
            .values()
            .all(|view| view.details.is_some()));
    }

    #[test]
    fn blank_title_is_omitted() {
        let report = ScoreReport::from_result_at(&sparse_result(), Some("   "), fixed_time());
        assert!(report.title.is_none());
    }

    #[test]
    fn json_uses_snake_case_keys_and_drops_details_on_request() {
        let report = ScoreReport::from_result_at(&sparse_result(), None, fixed_time())
            .without_breakdown();
        let value = serde_json::to_value(&report).expect("serialize");

        assert!(value.get("title").is_none());
        assert_eq!(value["tier"], "major_rework_required");
        assert_eq!(value["category_scores"]["drawings_figures"]["max"], 20);
        assert!(value["category_scores"]["drawings_figures"]
            .get("details")
            .is_none());
        assert_eq!(value["deductions"]["marketing_language"], -10);
        assert_eq!(value["generated_at"], "2026-03-01T09:30:00Z");
    }

    #[test]
    fn write_json_creates_directory_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("nested").join("reports");
        let report = ScoreReport::from_result_at(&sparse_result(), Some("Widget"), fixed_time());

        let path = report.write_json(&target).expect("write report");

        assert_eq!(path, target.join(REPORT_FILE_NAME));
        let written = std::fs::read_to_string(&path).expect("read back");
        let parsed: ScoreReport = serde_json::from_str(&written).expect("parse back");
        assert_eq!(parsed, report);
    }

    #[test]
    fn text_summary_lists_categories_and_top_recommendations() {
        let report = ScoreReport::from_result_at(&sparse_result(), Some("Widget"), fixed_time());
        let text = report.render_text();

        assert!(text.starts_with(&format!("Score: {}/100 - ", report.score)));
        assert!(text.contains("Title: Widget"));
        assert!(text.contains("  Drawings & Figures: "));
        assert!(text.contains("  marketing language: -10"));
        assert!(text.contains("  informal claims: +3"));
        assert_eq!(text.matches("\n  - ").count(), TEXT_RECOMMENDATIONS);
        assert!(text.ends_with('\n'));
        assert!(text.contains("\n\nCategories:\n"));
    }
}
