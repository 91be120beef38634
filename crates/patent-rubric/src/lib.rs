pub mod config;
pub mod drafts;
pub mod error;
pub mod report;
pub mod rubric;
pub mod telemetry;
