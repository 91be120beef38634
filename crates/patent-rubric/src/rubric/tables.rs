//! Fixed rubric vocabularies, thresholds and recommendation texts.
//!
//! Scores produced by the rubric are compared across drafts, so these tables
//! are treated as behavioral constants. Thresholds are inclusive.

use super::outcome::Criterion;

/// Descending `(minimum count, points)` steps with a floor below every step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tiers {
    pub(crate) steps: &'static [(usize, u32)],
    pub(crate) floor: u32,
}

impl Tiers {
    pub(crate) fn points(&self, count: usize) -> u32 {
        self.steps
            .iter()
            .find(|(minimum, _)| count >= *minimum)
            .map(|(_, points)| *points)
            .unwrap_or(self.floor)
    }

    pub(crate) fn is_floor(&self, count: usize) -> bool {
        self.steps.iter().all(|(minimum, _)| count < *minimum)
    }
}

/// Keyword frequency criterion scored through [`Tiers`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordRule {
    pub(crate) criterion: Criterion,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) tiers: Tiers,
    /// Emitted when the count falls to the floor.
    pub(crate) recommendation: Option<&'static str>,
}

// Technical disclosure

pub(crate) const HOW_NOT_WHAT: KeywordRule = KeywordRule {
    criterion: Criterion::HowNotWhat,
    keywords: &[
        "step",
        "process",
        "method",
        "comprise",
        "perform",
        "execute",
        "receive",
        "transmit",
        "generate",
        "transform",
        "calculate",
    ],
    tiers: Tiers {
        steps: &[(25, 8), (15, 6), (8, 4)],
        floor: 2,
    },
    recommendation: Some(
        "Add more HOW details - describe step-by-step processes, not just outcomes",
    ),
};

pub(crate) const HARDWARE_CONTEXT: KeywordRule = KeywordRule {
    criterion: Criterion::HardwareContext,
    keywords: &[
        "processor",
        "memory",
        "cpu",
        "gpu",
        "tpu",
        "storage",
        "network interface",
        "computing device",
        "server",
        "client",
    ],
    tiers: Tiers {
        steps: &[(15, 6), (8, 4), (3, 2)],
        floor: 0,
    },
    recommendation: Some("Add hardware context - mention processor, memory, storage, network"),
};

pub(crate) const ALGORITHM_PATTERNS: &[&str] = &[
    r"step \d+",
    r"at step",
    r"block \d+",
    r"at block",
    r"algorithm",
    r"pseudocode",
    r"input.*output",
];

pub(crate) const ALGORITHM_TIERS: Tiers = Tiers {
    steps: &[(12, 8), (6, 6), (3, 4)],
    floor: 2,
};

pub(crate) const ALGORITHM_RECOMMENDATION: &str =
    "Add step-by-step algorithm descriptions with numbered steps";

pub(crate) const ENABLEMENT_WORD_TIERS: Tiers = Tiers {
    steps: &[(3000, 4), (2000, 3), (1000, 2)],
    floor: 1,
};
pub(crate) const ENABLEMENT_EXAMPLE_TERMS: &[&str] = &["example", "embodiment"];
pub(crate) const ENABLEMENT_FIGURE_TERMS: &[&str] = &["fig.", "figure"];
pub(crate) const ENABLEMENT_SIGNAL_POINTS: u32 = 2;
pub(crate) const ENABLEMENT_WORDS_RECOMMENDATION: &str =
    "Expand detailed description to 2000+ words";
pub(crate) const ENABLEMENT_EXAMPLES_RECOMMENDATION: &str =
    "Add concrete examples to aid enablement";
pub(crate) const ENABLEMENT_FIGURES_RECOMMENDATION: &str =
    "Reference figures throughout detailed description";

// Drawings & figures

pub(crate) const NO_FIGURES_RECOMMENDATION: &str =
    "CRITICAL: Add at least 3-5 figures (system, hardware, flowchart)";

pub(crate) const SYSTEM_FIGURE_TERMS: &[&str] = &["system", "architecture", "network"];
pub(crate) const SYSTEM_FIGURE_RECOMMENDATION: &str = "Add system architecture diagram (FIG. 1)";

pub(crate) const HARDWARE_FIGURE_TERMS: &[&str] = &["hardware", "block", "computing"];
pub(crate) const HARDWARE_FIGURE_RECOMMENDATION: &str =
    "Add hardware block diagram showing processor, memory, etc.";

pub(crate) const FLOWCHART_FIGURE_TERMS: &[&str] = &["flowchart", "method", "process"];
pub(crate) const FLOWCHART_TIERS: Tiers = Tiers {
    steps: &[(2, 6), (1, 4)],
    floor: 0,
};
pub(crate) const FLOWCHART_FIGURE_RECOMMENDATION: &str =
    "Add method flowchart(s) showing process steps";

pub(crate) const INTERFACE_FIGURE_TERMS: &[&str] = &["interface", "ui", "screen", "mockup", "display"];
pub(crate) const INTERFACE_FIGURE_POINTS: u32 = 3;
/// Interface mockups are not always applicable, so their absence keeps a point.
pub(crate) const INTERFACE_FIGURE_FALLBACK: u32 = 1;

pub(crate) const DATA_FLOW_FIGURE_TERMS: &[&str] = &["data flow", "data", "pipeline"];
pub(crate) const DATA_FLOW_FIGURE_RECOMMENDATION: &str = "Consider adding data flow diagram";

// Novelty & differentiation

pub(crate) const PRIOR_ART_AWARENESS: KeywordRule = KeywordRule {
    criterion: Criterion::PriorArtAwareness,
    keywords: &[
        "conventional",
        "existing",
        "prior",
        "traditional",
        "known",
        "previous",
        "current systems",
    ],
    tiers: Tiers {
        steps: &[(5, 5), (2, 3)],
        floor: 1,
    },
    recommendation: Some("Acknowledge prior art and existing approaches"),
};

pub(crate) const POINT_OF_DIFFERENCE: KeywordRule = KeywordRule {
    criterion: Criterion::PointOfDifference,
    keywords: &[
        "improvement",
        "novel",
        "unique",
        "different",
        "unlike",
        "advantage",
        "better",
        "superior",
        "overcome",
    ],
    tiers: Tiers {
        steps: &[(8, 5), (4, 3)],
        floor: 1,
    },
    recommendation: Some("Clearly state what makes this invention different/better"),
};

pub(crate) const PROBLEM_TERMS: &[&str] = &["problem", "challenge", "limitation", "need", "issue"];
pub(crate) const SOLUTION_TERMS: &[&str] = &["solution", "address", "overcome", "provide", "solve"];
pub(crate) const PROBLEM_SOLUTION_RECOMMENDATION: &str =
    "Clearly frame the technical problem and how invention solves it";

// Scope & protection

pub(crate) const WORKAROUNDS_VARIATIONS: KeywordRule = KeywordRule {
    criterion: Criterion::WorkaroundsVariations,
    keywords: &[
        "embodiment",
        "alternative",
        "variation",
        "optionally",
        "in some",
        "in various",
        "in another",
        "additionally",
    ],
    tiers: Tiers {
        steps: &[(20, 8), (12, 6), (6, 4)],
        floor: 2,
    },
    recommendation: Some("Add more alternative embodiments and variations"),
};

pub(crate) const FUTURE_VARIATIONS: KeywordRule = KeywordRule {
    criterion: Criterion::FutureVariations,
    keywords: &[
        "future",
        "extension",
        "enhancement",
        "further",
        "additionally",
        "moreover",
        "second generation",
    ],
    tiers: Tiers {
        steps: &[(4, 4), (2, 2)],
        floor: 0,
    },
    recommendation: Some("Describe future improvements and extensions"),
};

pub(crate) const BROAD_TERMS: &[&str] = &["various embodiments", "in general"];
pub(crate) const NARROW_TERMS: &[&str] = &["specific embodiment", "in particular"];
pub(crate) const PARTIAL_BROAD_TERM: &str = "some embodiments";
pub(crate) const BROAD_TO_NARROW_RECOMMENDATION: &str = "Use broad-to-narrow language pattern";

// Implementation details

pub(crate) const DEPLOYMENT_ARCHITECTURE: KeywordRule = KeywordRule {
    criterion: Criterion::DeploymentArchitecture,
    keywords: &[
        "deploy",
        "server",
        "cloud",
        "infrastructure",
        "architecture",
        "distributed",
        "hosted",
        "cluster",
    ],
    tiers: Tiers {
        steps: &[(6, 5), (3, 3)],
        floor: 1,
    },
    recommendation: Some("Describe deployment architecture and infrastructure"),
};

pub(crate) const TECHNOLOGY_STACK: KeywordRule = KeywordRule {
    criterion: Criterion::TechnologyStack,
    keywords: &[
        "api",
        "database",
        "framework",
        "protocol",
        "json",
        "http",
        "rest",
        "queue",
        "cache",
    ],
    tiers: Tiers {
        steps: &[(5, 3), (2, 2)],
        floor: 0,
    },
    recommendation: Some("Mention technology stack components"),
};

pub(crate) const REAL_WORLD_USE_TERMS: &[&str] =
    &["example", "use case", "walkthrough", "scenario", "user"];
pub(crate) const REAL_WORLD_USE_POINTS: u32 = 2;
pub(crate) const REAL_WORLD_USE_FALLBACK: u32 = 1;

// AI-specific requirements

pub(crate) const PRACTICAL_APPLICATION: KeywordRule = KeywordRule {
    criterion: Criterion::PracticalApplication,
    keywords: &[
        "improvement",
        "reduce",
        "increase",
        "optimize",
        "enhance",
        "faster",
        "more efficient",
        "less memory",
    ],
    tiers: Tiers {
        steps: &[(6, 4), (3, 2)],
        floor: 0,
    },
    recommendation: Some("Emphasize practical technical improvements"),
};

pub(crate) const NOT_ABSTRACT_RECOMMENDATION: &str =
    "Tie software to hardware (processor, memory) to avoid abstract idea issues";
pub(crate) const INVENTORSHIP_DOCUMENTATION_POINTS: u32 = 3;

// Red flags

pub(crate) const MARKETING_TERMS: &[&str] = &[
    "revolutionary",
    "best",
    "amazing",
    "groundbreaking",
    "world-class",
    "cutting-edge",
    "game-changing",
];
pub(crate) const VAGUE_AI_TERMS: &[&str] = &["uses ai", "uses machine learning", "leverages ai"];
pub(crate) const SPECIFIC_AI_TERMS: &[&str] =
    &["neural network", "transformer", "model", "training", "inference"];
pub(crate) const HARDWARE_PRESENCE_TERMS: &[&str] =
    &["processor", "memory", "cpu", "gpu", "computing device"];
pub(crate) const REFERENCE_NUMERAL_PATTERN: &str = r"\b[1-9]\d{2}\b";

// Bonuses

pub(crate) const INFORMAL_CLAIMS_MINIMUM: usize = 5;
pub(crate) const EMBODIMENT_TERM: &str = "embodiment";
pub(crate) const MULTIPLE_EMBODIMENTS_MINIMUM: usize = 5;
pub(crate) const BENCHMARK_MARKER: &str = "%";
pub(crate) const SPEEDUP_PATTERN: &str = r"\d+x faster";
pub(crate) const WORKAROUND_TERMS: &[&str] = &["workaround", "design around"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_pick_first_satisfied_step() {
        let tiers = HOW_NOT_WHAT.tiers;
        assert_eq!(tiers.points(30), 8);
        assert_eq!(tiers.points(25), 8);
        assert_eq!(tiers.points(24), 6);
        assert_eq!(tiers.points(15), 6);
        assert_eq!(tiers.points(8), 4);
        assert_eq!(tiers.points(7), 2);
        assert!(tiers.is_floor(7));
        assert!(!tiers.is_floor(8));
    }

    #[test]
    fn every_rule_tops_out_at_its_criterion_maximum() {
        let rules = [
            HOW_NOT_WHAT,
            HARDWARE_CONTEXT,
            PRIOR_ART_AWARENESS,
            POINT_OF_DIFFERENCE,
            WORKAROUNDS_VARIATIONS,
            FUTURE_VARIATIONS,
            DEPLOYMENT_ARCHITECTURE,
            TECHNOLOGY_STACK,
            PRACTICAL_APPLICATION,
        ];

        for rule in rules {
            assert_eq!(
                rule.tiers.points(usize::MAX),
                rule.criterion.max_points(),
                "{:?}",
                rule.criterion
            );
        }
    }
}
