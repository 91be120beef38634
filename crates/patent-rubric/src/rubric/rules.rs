use super::normalizer::NormalizedDocument;
use super::outcome::{Category, CategoryResult, Criterion};
use super::signals::{contains_any, count_algorithm_markers, count_occurrences, word_count};
use super::tables::*;
use std::collections::BTreeMap;

/// Result of one category scorer together with its improvement notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryScore {
    pub(crate) category: Category,
    pub(crate) result: CategoryResult,
    pub(crate) recommendations: Vec<&'static str>,
}

/// Accumulates criterion points and recommendations for a category.
struct Tally {
    category: Category,
    breakdown: BTreeMap<Criterion, u32>,
    recommendations: Vec<&'static str>,
}

impl Tally {
    fn new(category: Category) -> Self {
        Self {
            category,
            breakdown: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    fn award(&mut self, criterion: Criterion, points: u32) {
        debug_assert_eq!(criterion.category(), self.category);
        self.breakdown.insert(criterion, points);
    }

    fn recommend(&mut self, recommendation: &'static str) {
        self.recommendations.push(recommendation);
    }

    fn apply_keywords(&mut self, rule: &KeywordRule, text: &str) {
        let count = count_occurrences(text, rule.keywords);
        self.award(rule.criterion, rule.tiers.points(count));
        if rule.tiers.is_floor(count) {
            if let Some(recommendation) = rule.recommendation {
                self.recommend(recommendation);
            }
        }
    }

    fn finish(self) -> CategoryScore {
        CategoryScore {
            category: self.category,
            result: CategoryResult::from_breakdown(self.category, self.breakdown),
            recommendations: self.recommendations,
        }
    }
}

pub(crate) fn score_categories(document: &NormalizedDocument<'_>) -> Vec<CategoryScore> {
    vec![
        technical_disclosure(document),
        drawings_figures(document),
        novelty_differentiation(document),
        scope_protection(document),
        implementation_details(document),
        ai_specific(document),
    ]
}

pub(crate) fn technical_disclosure(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::TechnicalDisclosure);
    let text = document.description_lower.as_str();

    tally.apply_keywords(&HOW_NOT_WHAT, text);
    tally.apply_keywords(&HARDWARE_CONTEXT, text);

    let algorithm_markers = count_algorithm_markers(text);
    tally.award(
        Criterion::AlgorithmDisclosure,
        ALGORITHM_TIERS.points(algorithm_markers),
    );
    if ALGORITHM_TIERS.is_floor(algorithm_markers) {
        tally.recommend(ALGORITHM_RECOMMENDATION);
    }

    let words = word_count(document.description);
    let mut enablement = ENABLEMENT_WORD_TIERS.points(words);
    if ENABLEMENT_WORD_TIERS.is_floor(words) {
        tally.recommend(ENABLEMENT_WORDS_RECOMMENDATION);
    }
    if contains_any(text, ENABLEMENT_EXAMPLE_TERMS) {
        enablement += ENABLEMENT_SIGNAL_POINTS;
    } else {
        tally.recommend(ENABLEMENT_EXAMPLES_RECOMMENDATION);
    }
    if contains_any(text, ENABLEMENT_FIGURE_TERMS) {
        enablement += ENABLEMENT_SIGNAL_POINTS;
    } else {
        tally.recommend(ENABLEMENT_FIGURES_RECOMMENDATION);
    }
    tally.award(
        Criterion::Enablement,
        enablement.min(Criterion::Enablement.max_points()),
    );

    tally.finish()
}

pub(crate) fn drawings_figures(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::DrawingsFigures);

    if !document.has_figures() {
        tally.recommend(NO_FIGURES_RECOMMENDATION);
        return tally.finish();
    }

    let titles = &document.figure_titles;
    let any_title = |terms: &[&str]| titles.iter().any(|title| contains_any(title, terms));

    if any_title(SYSTEM_FIGURE_TERMS) {
        tally.award(Criterion::SystemDiagram, 5);
    } else {
        tally.award(Criterion::SystemDiagram, 0);
        tally.recommend(SYSTEM_FIGURE_RECOMMENDATION);
    }

    if any_title(HARDWARE_FIGURE_TERMS) {
        tally.award(Criterion::HardwareBlockDiagram, 4);
    } else {
        tally.award(Criterion::HardwareBlockDiagram, 0);
        tally.recommend(HARDWARE_FIGURE_RECOMMENDATION);
    }

    let flowcharts = titles
        .iter()
        .filter(|title| contains_any(title, FLOWCHART_FIGURE_TERMS))
        .count();
    tally.award(Criterion::MethodFlowcharts, FLOWCHART_TIERS.points(flowcharts));
    if FLOWCHART_TIERS.is_floor(flowcharts) {
        tally.recommend(FLOWCHART_FIGURE_RECOMMENDATION);
    }

    let interface_points = if any_title(INTERFACE_FIGURE_TERMS) {
        INTERFACE_FIGURE_POINTS
    } else {
        INTERFACE_FIGURE_FALLBACK
    };
    tally.award(Criterion::InterfaceMockups, interface_points);

    if any_title(DATA_FLOW_FIGURE_TERMS) {
        tally.award(Criterion::DataFlowDiagram, 2);
    } else {
        tally.award(Criterion::DataFlowDiagram, 0);
        tally.recommend(DATA_FLOW_FIGURE_RECOMMENDATION);
    }

    tally.finish()
}

pub(crate) fn novelty_differentiation(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::NoveltyDifferentiation);
    let text = document.full_text.as_str();

    tally.apply_keywords(&PRIOR_ART_AWARENESS, text);
    tally.apply_keywords(&POINT_OF_DIFFERENCE, text);

    let has_problem = contains_any(text, PROBLEM_TERMS);
    let has_solution = contains_any(text, SOLUTION_TERMS);
    let points = match (has_problem, has_solution) {
        (true, true) => 5,
        (true, false) | (false, true) => 3,
        (false, false) => {
            tally.recommend(PROBLEM_SOLUTION_RECOMMENDATION);
            1
        }
    };
    tally.award(Criterion::ProblemSolution, points);

    tally.finish()
}

pub(crate) fn scope_protection(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::ScopeProtection);
    let text = document.description_lower.as_str();

    tally.apply_keywords(&WORKAROUNDS_VARIATIONS, text);
    tally.apply_keywords(&FUTURE_VARIATIONS, text);

    let has_broad = contains_any(text, BROAD_TERMS);
    let has_narrow = contains_any(text, NARROW_TERMS);
    let points = if has_broad && has_narrow {
        3
    } else if has_broad || text.contains(PARTIAL_BROAD_TERM) {
        2
    } else {
        tally.recommend(BROAD_TO_NARROW_RECOMMENDATION);
        0
    };
    tally.award(Criterion::BroadToNarrow, points);

    tally.finish()
}

pub(crate) fn implementation_details(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::ImplementationDetails);
    let text = document.description_lower.as_str();

    tally.apply_keywords(&DEPLOYMENT_ARCHITECTURE, text);
    tally.apply_keywords(&TECHNOLOGY_STACK, text);

    let use_points = if contains_any(text, REAL_WORLD_USE_TERMS) {
        REAL_WORLD_USE_POINTS
    } else {
        REAL_WORLD_USE_FALLBACK
    };
    tally.award(Criterion::RealWorldUse, use_points);

    tally.finish()
}

pub(crate) fn ai_specific(document: &NormalizedDocument<'_>) -> CategoryScore {
    let mut tally = Tally::new(Category::AiSpecific);
    let text = document.description_lower.as_str();

    tally.apply_keywords(&PRACTICAL_APPLICATION, text);

    let has_processor = text.contains("processor");
    let has_memory = text.contains("memory");
    let points = if has_processor && has_memory {
        3
    } else if has_processor || text.contains("computing device") {
        2
    } else {
        tally.recommend(NOT_ABSTRACT_RECOMMENDATION);
        0
    };
    tally.award(Criterion::NotAbstract, points);

    // Inventorship records live outside the draft and are assumed present.
    tally.award(
        Criterion::InventorshipDocumentation,
        INVENTORSHIP_DOCUMENTATION_POINTS,
    );

    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::document::{FigureRef, PatentDocumentView};

    fn with_description(text: &str) -> PatentDocumentView {
        PatentDocumentView {
            detailed_description: text.to_string(),
            ..PatentDocumentView::default()
        }
    }

    fn points(score: &CategoryScore, criterion: Criterion) -> u32 {
        score.result.breakdown.get(&criterion).copied().unwrap_or_default()
    }

    #[test]
    fn how_not_what_reaches_top_tier_at_thirty_verbs() {
        let description = "step process receive transmit generate ".repeat(6);
        let document = with_description(&description);
        let score = technical_disclosure(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::HowNotWhat), 8);
        assert!(!score
            .recommendations
            .contains(&HOW_NOT_WHAT.recommendation.unwrap_or_default()));
    }

    #[test]
    fn sparse_description_floors_technical_disclosure() {
        let document = with_description("A widget.");
        let score = technical_disclosure(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::HowNotWhat), 2);
        assert_eq!(points(&score, Criterion::HardwareContext), 0);
        assert_eq!(points(&score, Criterion::AlgorithmDisclosure), 2);
        assert_eq!(points(&score, Criterion::Enablement), 1);
        assert_eq!(score.result.score, 5);
        assert_eq!(score.recommendations.len(), 6);
    }

    #[test]
    fn enablement_combines_length_examples_and_figures() {
        let mut description = "word ".repeat(2000);
        description.push_str("For example, as shown in FIG. 1");
        let document = with_description(&description);
        let score = technical_disclosure(&NormalizedDocument::new(&document));

        // 3 for 2000+ words, 2 for examples, 2 for figure references
        assert_eq!(points(&score, Criterion::Enablement), 7);
    }

    #[test]
    fn enablement_is_capped() {
        let mut description = "word ".repeat(3100);
        description.push_str("embodiment figure");
        let document = with_description(&description);
        let score = technical_disclosure(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::Enablement), 8);
    }

    #[test]
    fn zero_figures_short_circuits_drawings() {
        let document = PatentDocumentView::default();
        let score = drawings_figures(&NormalizedDocument::new(&document));

        assert_eq!(score.result.score, 0);
        assert!(score.result.breakdown.is_empty());
        assert_eq!(score.recommendations, vec![NO_FIGURES_RECOMMENDATION]);
    }

    #[test]
    fn figure_titles_are_classified_by_keyword() {
        let document = PatentDocumentView {
            figures: vec![
                FigureRef::new("System Architecture"),
                FigureRef::new("Hardware Block Diagram"),
                FigureRef::new("Method Flowchart"),
                FigureRef::new("Training Process"),
                FigureRef::new("User Interface Screen"),
                FigureRef::new("Data Flow Pipeline"),
            ],
            ..PatentDocumentView::default()
        };
        let score = drawings_figures(&NormalizedDocument::new(&document));

        assert_eq!(score.result.score, 20);
        assert!(score.recommendations.is_empty());
    }

    #[test]
    fn missing_interface_figure_keeps_one_point() {
        let document = PatentDocumentView {
            figures: vec![
                FigureRef::new("System Architecture"),
                FigureRef::new("Hardware Block Diagram"),
                FigureRef::new("Method Flowchart"),
            ],
            ..PatentDocumentView::default()
        };
        let score = drawings_figures(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::SystemDiagram), 5);
        assert_eq!(points(&score, Criterion::HardwareBlockDiagram), 4);
        assert_eq!(points(&score, Criterion::MethodFlowcharts), 4);
        assert_eq!(points(&score, Criterion::InterfaceMockups), 1);
        assert_eq!(points(&score, Criterion::DataFlowDiagram), 0);
        assert_eq!(score.result.score, 14);
        assert_eq!(score.recommendations, vec![DATA_FLOW_FIGURE_RECOMMENDATION]);
    }

    #[test]
    fn novelty_reads_summary_and_background() {
        let document = PatentDocumentView {
            summary: "Unlike conventional tools, the novel approach offers an advantage \
                      and improvement that is better, superior, unique and different."
                .to_string(),
            background: "Existing, traditional and prior systems have a known limitation. \
                         The invention provides a solution."
                .to_string(),
            ..PatentDocumentView::default()
        };
        let score = novelty_differentiation(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::PriorArtAwareness), 5);
        assert_eq!(points(&score, Criterion::PointOfDifference), 5);
        assert_eq!(points(&score, Criterion::ProblemSolution), 5);
        assert!(score.recommendations.is_empty());
    }

    #[test]
    fn broad_language_without_narrowing_scores_partially() {
        let document = with_description("In some embodiments the device is portable.");
        let score = scope_protection(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::BroadToNarrow), 2);
    }

    #[test]
    fn broad_and_narrow_language_scores_fully() {
        let document =
            with_description("In various embodiments it moves; in particular it slides.");
        let score = scope_protection(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::BroadToNarrow), 3);
    }

    #[test]
    fn implementation_without_use_case_keeps_one_point() {
        let document = with_description("A cloud server cluster deployed via a REST API.");
        let score = implementation_details(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::DeploymentArchitecture), 3);
        assert_eq!(points(&score, Criterion::TechnologyStack), 2);
        assert_eq!(points(&score, Criterion::RealWorldUse), 1);
    }

    #[test]
    fn ai_specific_always_credits_inventorship() {
        let document = PatentDocumentView::default();
        let score = ai_specific(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::InventorshipDocumentation), 3);
        assert_eq!(points(&score, Criterion::NotAbstract), 0);
        assert_eq!(score.result.score, 3);
    }

    #[test]
    fn processor_alone_is_partial_hardware_tie_in() {
        let document = with_description("The processor executes instructions.");
        let score = ai_specific(&NormalizedDocument::new(&document));

        assert_eq!(points(&score, Criterion::NotAbstract), 2);
    }

    #[test]
    fn categories_are_returned_in_rubric_order() {
        let document = PatentDocumentView::default();
        let order: Vec<Category> = score_categories(&NormalizedDocument::new(&document))
            .into_iter()
            .map(|score| score.category)
            .collect();

        assert_eq!(order, Category::ALL.to_vec());
    }
}
