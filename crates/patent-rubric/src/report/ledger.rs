use super::ReportError;
use crate::drafts::DraftImporter;
use crate::rubric::RubricScorer;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DRAFT_EXTENSIONS: &[&str] = &["json", "md", "txt"];
const LEDGER_COLUMNS: [&str; 7] = [
    "source",
    "title",
    "score",
    "grade",
    "deductions",
    "bonuses",
    "error",
];

/// One ledger row. Failed imports carry `error` and no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub source: String,
    pub title: String,
    pub score: Option<u8>,
    pub grade: String,
    pub deductions: i32,
    pub bonuses: i32,
    pub error: Option<String>,
}

impl LedgerEntry {
    /// Imports and scores the draft at `path`, recording any import failure.
    pub fn score(path: &Path, scorer: &RubricScorer) -> Self {
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match DraftImporter::from_path(path) {
            Ok(document) => {
                let result = scorer.score(&document);
                Self {
                    source,
                    title: document.title,
                    score: Some(result.total_score),
                    grade: result.grade.label().to_string(),
                    deductions: result.deduction_total(),
                    bonuses: result.bonus_total(),
                    error: None,
                }
            }
            Err(err) => {
                warn!(source = %source, error = %err, "skipping draft");
                Self {
                    source,
                    title: String::new(),
                    score: None,
                    grade: String::new(),
                    deductions: 0,
                    bonuses: 0,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchLedger {
    entries: Vec<LedgerEntry>,
}

impl BatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every draft file in `dir`, in file-name order.
    pub fn score_directory<P: AsRef<Path>>(
        dir: P,
        scorer: &RubricScorer,
    ) -> Result<Self, ReportError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && is_draft_file(path))
            .collect();
        paths.sort();

        let mut ledger = Self::new();
        for path in &paths {
            ledger.score_path(path, scorer);
        }

        info!(
            drafts = ledger.entries.len(),
            failed = ledger.failures(),
            "scored draft directory"
        );
        Ok(ledger)
    }

    /// Imports and scores one draft; an import failure becomes an error row.
    pub fn score_path(&mut self, path: &Path, scorer: &RubricScorer) -> LedgerEntry {
        let entry = LedgerEntry::score(path, scorer);
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.error.is_some())
            .count()
    }

    /// Writes the header row, even for an empty batch, then one row per draft.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(LEDGER_COLUMNS)?;
        for entry in &self.entries {
            csv_writer.serialize(entry)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.write_csv(file)?;
        info!(path = %path.display(), rows = self.entries.len(), "wrote batch ledger");
        Ok(())
    }
}

fn is_draft_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DRAFT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
