use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Input workbook not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{sheet}' not found in workbook (available: {available})")]
    MissingSheet { sheet: String, available: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
