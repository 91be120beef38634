use super::normalizer::normalize_heading;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Sections a drafted application is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DraftSection {
    Title,
    Field,
    Background,
    Summary,
    BriefDrawings,
    DetailedDescription,
    Claims,
    Abstract,
}

static HEADING_MAP: OnceLock<HashMap<String, DraftSection>> = OnceLock::new();

pub(crate) fn section_for_normalized(heading: &str) -> Option<DraftSection> {
    heading_map().get(heading).copied()
}

fn heading_map() -> &'static HashMap<String, DraftSection> {
    HEADING_MAP.get_or_init(|| {
        const HEADINGS: &[(&str, DraftSection)] = &[
            ("Title", DraftSection::Title),
            ("Title of the Invention", DraftSection::Title),
            ("Field", DraftSection::Field),
            ("Field of the Invention", DraftSection::Field),
            ("Technical Field", DraftSection::Field),
            ("Background", DraftSection::Background),
            ("Background of the Invention", DraftSection::Background),
            ("Summary", DraftSection::Summary),
            ("Summary of the Invention", DraftSection::Summary),
            ("Brief Description of the Drawings", DraftSection::BriefDrawings),
            ("Brief Description of Drawings", DraftSection::BriefDrawings),
            ("Description of the Drawings", DraftSection::BriefDrawings),
            ("Figures", DraftSection::BriefDrawings),
            ("Detailed Description", DraftSection::DetailedDescription),
            (
                "Detailed Description of the Invention",
                DraftSection::DetailedDescription,
            ),
            (
                "Detailed Description of the Preferred Embodiments",
                DraftSection::DetailedDescription,
            ),
            ("Claims", DraftSection::Claims),
            ("Informal Claims", DraftSection::Claims),
            ("What is Claimed is", DraftSection::Claims),
            ("Abstract", DraftSection::Abstract),
            ("Abstract of the Disclosure", DraftSection::Abstract),
        ];

        HEADINGS
            .iter()
            .map(|(heading, section)| (normalize_heading(heading), *section))
            .collect()
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(heading: &str) -> Option<DraftSection> {
    section_for_normalized(&normalize_heading(heading))
}
