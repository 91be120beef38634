use crate::commands::print_report;
use clap::Args;
use patent_rubric::drafts::{DraftFormat, DraftImporter};
use patent_rubric::error::AppError;
use patent_rubric::report::ScoreReport;
use patent_rubric::rubric::RubricScorer;

const SAMPLE_DRAFT: &str = "\
Title: Adaptive Data Processing System

## Background
Existing systems have limitations in processing speed.

## Summary
The invention provides improvements over conventional systems.

## Brief Description of the Drawings
FIG. 1 is a system architecture diagram.
FIG. 2 is a hardware block diagram.
FIG. 3 is a method flowchart.

## Detailed Description
The present invention provides a system 100 for processing data using
machine learning techniques. In various embodiments, the system comprises
a processor 101, memory 102, and storage 103.

At step 302, the system receives input data via network interface 104.
At step 304, the processor 101 preprocesses the data using neural network
techniques. At step 306, the processed data is analyzed.

In some embodiments, the system may alternatively use GPU acceleration.
In another embodiment, distributed processing may be employed.

## Claims
1. A method comprising receiving input data at a processor.
2. A system comprising a processor and memory.
3. A non-transitory computer-readable medium storing instructions.
4. The method of claim 1, wherein the data is preprocessed.
5. The system of claim 2, further comprising a network interface.

## Abstract
A system for data processing.
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let report = sample_report()?;
    if !args.json {
        println!("Patent rubric demo (built-in sample draft)\n");
    }
    print_report(&report, args.json)
}

fn sample_report() -> Result<ScoreReport, AppError> {
    let document = DraftImporter::from_str(SAMPLE_DRAFT, DraftFormat::Text)?;
    let result = RubricScorer::new().score(&document);
    Ok(ScoreReport::from_result(&result, Some(&document.title)))
}
