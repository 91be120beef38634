use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scoring dimensions of the rubric, declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalDisclosure,
    DrawingsFigures,
    NoveltyDifferentiation,
    ScopeProtection,
    ImplementationDetails,
    AiSpecific,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TechnicalDisclosure,
        Category::DrawingsFigures,
        Category::NoveltyDifferentiation,
        Category::ScopeProtection,
        Category::ImplementationDetails,
        Category::AiSpecific,
    ];

    pub const fn max_points(self) -> u32 {
        match self {
            Self::TechnicalDisclosure => 30,
            Self::DrawingsFigures => 20,
            Self::NoveltyDifferentiation | Self::ScopeProtection => 15,
            Self::ImplementationDetails | Self::AiSpecific => 10,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::TechnicalDisclosure => "technical_disclosure",
            Self::DrawingsFigures => "drawings_figures",
            Self::NoveltyDifferentiation => "novelty_differentiation",
            Self::ScopeProtection => "scope_protection",
            Self::ImplementationDetails => "implementation_details",
            Self::AiSpecific => "ai_specific",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechnicalDisclosure => "Technical Disclosure",
            Self::DrawingsFigures => "Drawings & Figures",
            Self::NoveltyDifferentiation => "Novelty & Differentiation",
            Self::ScopeProtection => "Scope & Protection",
            Self::ImplementationDetails => "Implementation Details",
            Self::AiSpecific => "AI-Specific Requirements",
        }
    }
}

/// Individual rubric criteria. Each belongs to exactly one [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    HowNotWhat,
    HardwareContext,
    AlgorithmDisclosure,
    Enablement,
    SystemDiagram,
    HardwareBlockDiagram,
    MethodFlowcharts,
    InterfaceMockups,
    DataFlowDiagram,
    PriorArtAwareness,
    PointOfDifference,
    ProblemSolution,
    WorkaroundsVariations,
    FutureVariations,
    BroadToNarrow,
    DeploymentArchitecture,
    TechnologyStack,
    RealWorldUse,
    PracticalApplication,
    NotAbstract,
    InventorshipDocumentation,
}

impl Criterion {
    pub const fn category(self) -> Category {
        match self {
            Self::HowNotWhat
            | Self::HardwareContext
            | Self::AlgorithmDisclosure
            | Self::Enablement => Category::TechnicalDisclosure,
            Self::SystemDiagram
            | Self::HardwareBlockDiagram
            | Self::MethodFlowcharts
            | Self::InterfaceMockups
            | Self::DataFlowDiagram => Category::DrawingsFigures,
            Self::PriorArtAwareness | Self::PointOfDifference | Self::ProblemSolution => {
                Category::NoveltyDifferentiation
            }
            Self::WorkaroundsVariations | Self::FutureVariations | Self::BroadToNarrow => {
                Category::ScopeProtection
            }
            Self::DeploymentArchitecture | Self::TechnologyStack | Self::RealWorldUse => {
                Category::ImplementationDetails
            }
            Self::PracticalApplication | Self::NotAbstract | Self::InventorshipDocumentation => {
                Category::AiSpecific
            }
        }
    }

    /// Highest number of points the criterion can contribute.
    pub const fn max_points(self) -> u32 {
        match self {
            Self::HowNotWhat | Self::AlgorithmDisclosure | Self::Enablement => 8,
            Self::WorkaroundsVariations => 8,
            Self::HardwareContext | Self::MethodFlowcharts => 6,
            Self::SystemDiagram
            | Self::PriorArtAwareness
            | Self::PointOfDifference
            | Self::ProblemSolution
            | Self::DeploymentArchitecture => 5,
            Self::HardwareBlockDiagram | Self::FutureVariations | Self::PracticalApplication => 4,
            Self::InterfaceMockups
            | Self::BroadToNarrow
            | Self::TechnologyStack
            | Self::NotAbstract
            | Self::InventorshipDocumentation => 3,
            Self::DataFlowDiagram | Self::RealWorldUse => 2,
        }
    }
}

/// Points awarded for a single category along with the per-criterion trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub score: u32,
    pub max: u32,
    pub breakdown: BTreeMap<Criterion, u32>,
}

impl CategoryResult {
    pub(crate) fn from_breakdown(category: Category, breakdown: BTreeMap<Criterion, u32>) -> Self {
        let max = category.max_points();
        let score = breakdown.values().sum::<u32>().min(max);
        Self {
            score,
            max,
            breakdown,
        }
    }

    pub fn is_full_marks(&self) -> bool {
        self.score == self.max
    }
}

/// Anti-patterns that carry a fixed deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlag {
    MarketingLanguage,
    NoDrawings,
    VagueAiMl,
    NoHardwareContext,
    MissingReferenceNumerals,
}

impl RedFlag {
    pub const fn deduction(self) -> i32 {
        match self {
            Self::MarketingLanguage | Self::NoDrawings | Self::NoHardwareContext => -10,
            Self::VagueAiMl => -8,
            Self::MissingReferenceNumerals => -3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MarketingLanguage => "marketing language",
            Self::NoDrawings => "no drawings",
            Self::VagueAiMl => "vague AI/ML description",
            Self::NoHardwareContext => "no hardware context",
            Self::MissingReferenceNumerals => "missing reference numerals",
        }
    }
}

/// Positive quality signals that add a small bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bonus {
    InformalClaims,
    MultipleEmbodiments,
    PerformanceBenchmarks,
    CompetitiveWorkaround,
}

impl Bonus {
    pub const fn points(self) -> i32 {
        match self {
            Self::InformalClaims | Self::MultipleEmbodiments => 3,
            Self::PerformanceBenchmarks | Self::CompetitiveWorkaround => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InformalClaims => "informal claims",
            Self::MultipleEmbodiments => "multiple embodiments",
            Self::PerformanceBenchmarks => "performance benchmarks",
            Self::CompetitiveWorkaround => "competitive workaround analysis",
        }
    }
}

/// Quality tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    TransactionReady,
    Excellent,
    GoodPassing,
    NeedsImprovement,
    Insufficient,
    MajorReworkRequired,
}

impl Grade {
    /// Tiers in descending threshold order.
    pub const TIERS: [Grade; 6] = [
        Grade::TransactionReady,
        Grade::Excellent,
        Grade::GoodPassing,
        Grade::NeedsImprovement,
        Grade::Insufficient,
        Grade::MajorReworkRequired,
    ];

    /// Minimum score (inclusive) required for the tier.
    pub const fn threshold(self) -> u8 {
        match self {
            Self::TransactionReady => 95,
            Self::Excellent => 85,
            Self::GoodPassing => 75,
            Self::NeedsImprovement => 65,
            Self::Insufficient => 50,
            Self::MajorReworkRequired => 0,
        }
    }

    pub fn from_score(score: u8) -> Self {
        Self::TIERS
            .into_iter()
            .find(|grade| score >= grade.threshold())
            .unwrap_or(Self::MajorReworkRequired)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TransactionReady => "Transaction Ready",
            Self::Excellent => "Excellent",
            Self::GoodPassing => "Good (Passing)",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Insufficient => "Insufficient",
            Self::MajorReworkRequired => "Major Rework Required",
        }
    }
}

/// Complete result of scoring one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub total_score: u8,
    pub grade: Grade,
    pub categories: BTreeMap<Category, CategoryResult>,
    pub deductions: BTreeMap<RedFlag, i32>,
    pub bonuses: BTreeMap<Bonus, i32>,
    pub recommendations: Vec<String>,
}

impl ScoringResult {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.get(&category)
    }

    /// Sum of category scores before deductions and bonuses.
    pub fn base_score(&self) -> u32 {
        self.categories.values().map(|result| result.score).sum()
    }

    pub fn deduction_total(&self) -> i32 {
        self.deductions.values().sum()
    }

    /// Bonus contribution after the global cap.
    pub fn bonus_total(&self) -> i32 {
        capped_bonus(self.bonuses.values().sum())
    }
}

pub(crate) const BONUS_CAP: i32 = 10;
pub(crate) const RECOMMENDATION_LIMIT: usize = 10;

pub(crate) fn capped_bonus(raw: i32) -> i32 {
    raw.min(BONUS_CAP)
}
