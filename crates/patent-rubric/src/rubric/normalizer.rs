use super::document::PatentDocumentView;

/// Text views shared by every scorer for a single document.
#[derive(Debug)]
pub(crate) struct NormalizedDocument<'a> {
    /// Lowercased description, summary and background joined by spaces.
    pub(crate) full_text: String,
    /// Description as written; numeral and `%` checks read this.
    pub(crate) description: &'a str,
    pub(crate) description_lower: String,
    pub(crate) claims: &'a [String],
    pub(crate) figure_titles: Vec<String>,
}

impl<'a> NormalizedDocument<'a> {
    pub(crate) fn new(document: &'a PatentDocumentView) -> Self {
        let full_text = format!(
            "{} {} {}",
            document.detailed_description, document.summary, document.background
        )
        .to_lowercase();

        Self {
            full_text,
            description: &document.detailed_description,
            description_lower: document.detailed_description.to_lowercase(),
            claims: &document.claims,
            figure_titles: document
                .figures
                .iter()
                .map(|figure| figure.title.to_lowercase())
                .collect(),
        }
    }

    pub(crate) fn has_figures(&self) -> bool {
        !self.figure_titles.is_empty()
    }
}
