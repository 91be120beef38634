use clap::Args;
use patent_rubric::config::AppConfig;
use patent_rubric::drafts::{DraftFormat, DraftImporter};
use patent_rubric::error::AppError;
use patent_rubric::report::{BatchLedger, ReportError, ScoreReport};
use patent_rubric::rubric::RubricScorer;
use patent_rubric::telemetry::{self, LogTarget};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Draft to score (.json, .md or .txt)
    pub(crate) path: PathBuf,
    /// Override the format inferred from the file extension (json or text)
    #[arg(long)]
    pub(crate) format: Option<DraftFormat>,
    /// Write score_report.json to the report directory
    #[arg(long)]
    pub(crate) write_report: bool,
    /// Report directory (defaults to RUBRIC_REPORT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Directory holding .json, .md and .txt drafts
    pub(crate) dir: PathBuf,
    /// Destination of the CSV ledger
    #[arg(long)]
    pub(crate) ledger: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        path,
        format,
        write_report,
        output_dir,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_with_target(&config.telemetry, LogTarget::Stderr)?;

    let document = match format {
        Some(format) => DraftImporter::from_path_with_format(&path, format)?,
        None => DraftImporter::from_path(&path)?,
    };
    let result = RubricScorer::new().score(&document);
    let report = ScoreReport::from_result(&result, Some(&document.title));

    print_report(&report, json)?;

    if write_report {
        let dir = output_dir.unwrap_or(config.reports.output_dir);
        let written = report.write_json(dir)?;
        if !json {
            println!("\nReport written to {}", written.display());
        }
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_target(&config.telemetry, LogTarget::Stderr)?;

    let ledger = BatchLedger::score_directory(&args.dir, &RubricScorer::new())?;
    ledger.write_to_path(&args.ledger)?;

    for entry in ledger.entries() {
        match (&entry.score, &entry.error) {
            (Some(score), _) => println!("  {}: {}/100 - {}", entry.source, score, entry.grade),
            (None, Some(error)) => println!("  {}: failed ({})", entry.source, error),
            (None, None) => println!("  {}: not scored", entry.source),
        }
    }
    println!(
        "Scored {} drafts ({} failed); ledger written to {}",
        ledger.entries().len() - ledger.failures(),
        ledger.failures(),
        args.ledger.display()
    );

    Ok(())
}

pub(crate) fn print_report(report: &ScoreReport, json: bool) -> Result<(), AppError> {
    if json {
        let body = serde_json::to_string_pretty(report).map_err(ReportError::from)?;
        println!("{body}");
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
