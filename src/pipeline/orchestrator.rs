use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::{
    DAILY_COLUMNS, DAILY_SALES_FILE, MONTHLY_SUMMARY_FILE, PLATFORM_SUMMARY_FILE, TITLE_COLUMNS,
    TITLE_MASTER_FILE, TITLE_SUMMARY_FILE,
};
use crate::error::Result;
use crate::pipeline::ingestion::Workbook;
use crate::pipeline::output::{write_json, WrittenFile};
use crate::pipeline::processing::normalize::{catalog_entries, normalize_sales};
use crate::pipeline::processing::{ChannelNormalizer, DashboardViews, NormalizeReport};

/// Result of a complete conversion run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub normalize: NormalizeReport,
    pub catalog_rows: usize,
    pub files: Vec<WrittenFile>,
}

/// Load the workbook, clean it, aggregate, and write every dashboard document.
///
/// Fails before touching the output directory when the input is missing.
/// Outputs are written one by one, so a failure part-way leaves earlier
/// files in place.
#[instrument(skip(config), fields(input = %config.input_path.display()))]
pub fn run(config: &Config) -> Result<PipelineResult> {
    let started = Instant::now();

    info!("Reading {} from: {}", config.daily_sheet.name, config.input_path.display());
    let mut workbook = Workbook::open(&config.input_path)?;
    fs::create_dir_all(&config.output_dir)?;

    let channels = ChannelNormalizer::from_aliases(&config.channel_aliases);

    let daily_table = workbook.read_table(&config.daily_sheet, DAILY_COLUMNS)?;
    let (records, report) = normalize_sales(&daily_table, &channels);

    info!("Reading {} sheet ...", config.title_sheet.name);
    let title_table = workbook.read_table(&config.title_sheet, TITLE_COLUMNS)?;
    let catalog = catalog_entries(&title_table, &channels);

    let views = DashboardViews::build(&records, &catalog);

    let out = config.output_dir.as_path();
    let files = vec![
        write_json(out, DAILY_SALES_FILE, &views.daily)?,
        write_json(out, MONTHLY_SUMMARY_FILE, &views.monthly)?,
        write_json(out, TITLE_SUMMARY_FILE, &views.titles)?,
        write_json(out, PLATFORM_SUMMARY_FILE, &views.platforms)?,
        write_json(out, TITLE_MASTER_FILE, &views.master)?,
    ];

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "All JSON files written to: {}",
        config.output_dir.display()
    );

    Ok(PipelineResult {
        input_path: workbook.path().to_path_buf(),
        output_dir: config.output_dir.clone(),
        normalize: report,
        catalog_rows: catalog.len(),
        files,
    })
}
