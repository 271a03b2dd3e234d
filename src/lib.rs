//! Converts the weekly sales workbook into the JSON documents read by the
//! sales dashboard.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use config::Config;
pub use error::{DashboardError, Result};
pub use pipeline::{run, PipelineResult};
