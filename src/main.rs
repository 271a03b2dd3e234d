use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use sales_dashboard::{logging, pipeline, Config};

#[derive(Parser)]
#[command(name = "sales_dashboard")]
#[command(about = "Convert the weekly sales workbook into dashboard JSON files")]
#[command(version = "0.1.0")]
struct Cli {
    /// Workbook to read (defaults to the configured input path)
    input: Option<PathBuf>,

    /// TOML config file (defaults to ./dashboard.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the JSON files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Also write JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    let mut config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_env_overrides();
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }
    config.validate()?;

    let _log_guard = logging::init_logging(config.log_dir.as_deref());

    let result = match pipeline::run(&config) {
        Ok(result) => result,
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e.into());
        }
    };

    println!("\n📊 Conversion results:");
    println!("   Daily rows read: {}", result.normalize.total_rows);
    println!("   Dropped (invalid date): {}", result.normalize.invalid_dates);
    println!("   Dropped (sales <= 0): {}", result.normalize.non_positive_sales);
    println!("   Records kept: {}", result.normalize.kept_rows);
    println!("   Catalog rows: {}", result.catalog_rows);
    for file in &result.files {
        println!("   {} ({} bytes)", file.name, file.bytes);
    }
    println!("\n✅ Done! All JSON files written to:\n   {}", result.output_dir.display());

    Ok(())
}
