mod mapping;
mod normalizer;
mod parser;

use crate::rubric::PatentDocumentView;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Source shape of a draft on disk or over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    Json,
    Text,
}

impl DraftFormat {
    /// `.json` files are structured drafts; everything else is read as text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DraftFormat::Json,
            _ => DraftFormat::Text,
        }
    }
}

impl FromStr for DraftFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DraftFormat::Json),
            "text" | "txt" | "md" | "markdown" => Ok(DraftFormat::Text),
            other => Err(format!("unknown draft format '{other}'")),
        }
    }
}

#[derive(Debug)]
pub enum DraftImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NoSections,
}

impl std::fmt::Display for DraftImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftImportError::Io(err) => write!(f, "failed to read draft: {}", err),
            DraftImportError::Json(err) => write!(f, "invalid draft JSON: {}", err),
            DraftImportError::NoSections => {
                write!(f, "draft text contains no recognized section headings")
            }
        }
    }
}

impl std::error::Error for DraftImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DraftImportError::Io(err) => Some(err),
            DraftImportError::Json(err) => Some(err),
            DraftImportError::NoSections => None,
        }
    }
}

impl From<std::io::Error> for DraftImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DraftImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub struct DraftImporter;

impl DraftImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PatentDocumentView, DraftImportError> {
        let format = DraftFormat::from_path(&path);
        Self::from_path_with_format(path, format)
    }

    pub fn from_path_with_format<P: AsRef<Path>>(
        path: P,
        format: DraftFormat,
    ) -> Result<PatentDocumentView, DraftImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(
        mut reader: R,
        format: DraftFormat,
    ) -> Result<PatentDocumentView, DraftImportError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_str(&contents, format)
    }

    pub fn from_str(
        contents: &str,
        format: DraftFormat,
    ) -> Result<PatentDocumentView, DraftImportError> {
        debug!(?format, bytes = contents.len(), "importing draft");
        match format {
            DraftFormat::Json => Ok(serde_json::from_str(contents)?),
            DraftFormat::Text => {
                let parsed = parser::parse_sections(contents);
                if parsed.section_count() == 0 {
                    return Err(DraftImportError::NoSections);
                }
                debug!(sections = parsed.section_count(), "parsed draft text");
                Ok(parsed.into_document())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapping::DraftSection;
    use std::io::Cursor;

    const SAMPLE_DRAFT: &str = "\
Inventor notes that precede any heading.

Title: Adaptive Cache Eviction

## Background
Conventional caches evict by recency alone.

## Summary
A learned policy ranks entries.

## Brief Description of the Drawings
FIG. 1 is a system architecture diagram.
FIG. 2 - Method flowchart
FIGURE 3: User interface screen.
The drawings are illustrative.

## Detailed Description
The processor 102 scores each entry.
### Implementation Notes
Entries are stored in memory 104.

## Claims
1. A method comprising:
   ranking cache entries.
2. The method of claim 1, wherein the ranking is learned.

10. A system comprising a processor.

**Abstract:**
A cache that learns what to keep.
";

    #[test]
    fn normalize_heading_strips_markup_and_case() {
        let source = "\u{feff}##  **Brief   Description of the Drawings:**  ";
        let normalized = normalizer::normalize_for_tests(source);
        assert_eq!(normalized, "brief description of the drawings");
    }

    #[test]
    fn mapping_recognizes_heading_variants() {
        assert_eq!(
            mapping::lookup_for_tests("# DETAILED DESCRIPTION"),
            Some(DraftSection::DetailedDescription)
        );
        assert_eq!(
            mapping::lookup_for_tests("What is claimed is:"),
            Some(DraftSection::Claims)
        );
        assert_eq!(
            mapping::lookup_for_tests("Field of the Invention"),
            Some(DraftSection::Field)
        );
        assert_eq!(mapping::lookup_for_tests("Implementation Notes"), None);
    }

    #[test]
    fn figure_titles_drop_number_and_separator() {
        assert_eq!(
            parser::figure_title_for_tests("FIG. 1 is a block diagram."),
            Some("a block diagram".to_string())
        );
        assert_eq!(
            parser::figure_title_for_tests("- Fig. 4A: Training flowchart"),
            Some("Training flowchart".to_string())
        );
        assert_eq!(
            parser::figure_title_for_tests("Figure 12 \u{2014} Screen"),
            Some("Screen".to_string())
        );
        assert_eq!(parser::figure_title_for_tests("Figures are attached"), None);
        assert_eq!(parser::figure_title_for_tests("FIG. shows nothing"), None);
    }

    #[test]
    fn claims_split_on_numbered_lines() {
        let claims = parser::split_claims(
            "Preamble text.\n1. A method.\n   with a step.\n\n2. A system.\n",
        );
        assert_eq!(
            claims,
            vec!["1. A method.\nwith a step.".to_string(), "2. A system.".to_string()]
        );
        assert!(parser::split_claims("No numbered claims here.").is_empty());
    }

    #[test]
    fn text_draft_populates_every_section() {
        let document =
            DraftImporter::from_str(SAMPLE_DRAFT, DraftFormat::Text).expect("draft parses");

        assert_eq!(document.title, "Adaptive Cache Eviction");
        assert_eq!(
            document.background,
            "Conventional caches evict by recency alone."
        );
        assert_eq!(document.summary, "A learned policy ranks entries.");
        assert!(document
            .detailed_description
            .contains("### Implementation Notes"));
        assert!(document.detailed_description.contains("memory 104"));
        assert_eq!(document.claims.len(), 3);
        assert!(document.claims[2].starts_with("10. A system"));
        assert_eq!(
            document
                .figures
                .iter()
                .map(|figure| figure.title.as_str())
                .collect::<Vec<_>>(),
            vec![
                "a system architecture diagram",
                "Method flowchart",
                "User interface screen"
            ]
        );
        assert_eq!(document.abstract_text, "A cache that learns what to keep.");
        assert!(!document.background.contains("Inventor notes"));
    }

    #[test]
    fn labelled_prose_inside_a_section_does_not_switch_sections() {
        let text = "## Detailed Description\n\
                    The processor 102 runs.\n\
                    Summary: the cache evicts entries.\n\
                    Background: older caches used recency.\n\
                    The memory 104 stores entries.\n";
        let document = DraftImporter::from_str(text, DraftFormat::Text).expect("draft parses");

        assert!(document.summary.is_empty());
        assert!(document.background.is_empty());
        assert!(document
            .detailed_description
            .contains("Summary: the cache evicts entries."));
        assert!(document.detailed_description.contains("memory 104"));
    }

    #[test]
    fn bare_section_heading_with_colon_still_switches() {
        let text = "## Detailed Description\nThe processor 102 runs.\nSummary:\nA short summary.\n";
        let document = DraftImporter::from_str(text, DraftFormat::Text).expect("draft parses");

        assert_eq!(document.detailed_description, "The processor 102 runs.");
        assert_eq!(document.summary, "A short summary.");
    }

    #[test]
    fn text_without_headings_is_rejected() {
        let error = DraftImporter::from_str("just some prose\nwith no sections", DraftFormat::Text)
            .expect_err("no sections");
        assert!(matches!(error, DraftImportError::NoSections));
    }

    #[test]
    fn json_reader_accepts_lenient_shape() {
        let json = r#"{"title": "Widget", "claims": "1. A widget.", "figures": ["Flowchart"]}"#;
        let document = DraftImporter::from_reader(Cursor::new(json), DraftFormat::Json)
            .expect("json parses");

        assert_eq!(document.title, "Widget");
        assert_eq!(document.claims, vec!["1. A widget.".to_string()]);
        assert_eq!(document.figures.len(), 1);
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = DraftImporter::from_str("{\"title\": ", DraftFormat::Json)
            .expect_err("invalid json");
        assert!(matches!(error, DraftImportError::Json(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error =
            DraftImporter::from_path("./does-not-exist.md").expect_err("expected io error");

        match error {
            DraftImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn format_follows_extension_and_name() {
        assert_eq!(DraftFormat::from_path("draft.JSON"), DraftFormat::Json);
        assert_eq!(DraftFormat::from_path("draft.md"), DraftFormat::Text);
        assert_eq!(DraftFormat::from_path("draft"), DraftFormat::Text);
        assert_eq!("markdown".parse::<DraftFormat>(), Ok(DraftFormat::Text));
        assert!("pdf".parse::<DraftFormat>().is_err());
    }
}
