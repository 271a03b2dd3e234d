// Conversion pipeline: workbook ingestion, processing, and JSON output

pub mod ingestion;
pub mod orchestrator;
pub mod output;
pub mod processing;

// Re-export the entry point
pub use orchestrator::{run, PipelineResult};
