use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::error::{DashboardError, Result};

/// Runtime settings for a conversion run.
///
/// Built from defaults, then an optional TOML file, then environment
/// variables; the binary applies CLI arguments last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Directory for rolling JSON log files; console only when unset
    pub log_dir: Option<PathBuf>,
    pub daily_sheet: SheetConfig,
    pub title_sheet: SheetConfig,
    /// Canonical channel name -> raw spellings seen in the workbook
    pub channel_aliases: BTreeMap<String, Vec<String>>,
}

/// Location of a table inside the workbook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetConfig {
    pub name: String,
    /// Zero-based worksheet row holding the column headers
    pub header_row: u32,
}

impl Default for Config {
    fn default() -> Self {
        let channel_aliases = constants::default_channel_aliases()
            .into_iter()
            .map(|(canonical, spellings)| {
                (
                    canonical.to_string(),
                    spellings.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();

        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            log_dir: None,
            daily_sheet: SheetConfig {
                name: constants::DAILY_SHEET.to_string(),
                header_row: constants::DAILY_HEADER_ROW,
            },
            title_sheet: SheetConfig {
                name: constants::TITLE_SHEET.to_string(),
                header_row: constants::TITLE_HEADER_ROW,
            },
            channel_aliases,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `dashboard.toml` when it exists.
    ///
    /// An explicitly requested file must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(constants::DEFAULT_CONFIG_PATH), false),
        };

        if !config_path.exists() {
            if required {
                return Err(DashboardError::Config(format!(
                    "Config file '{}' does not exist",
                    config_path.display()
                )));
            }
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        debug!("Loaded config from {}", config_path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DASHBOARD_INPUT`, `DASHBOARD_OUTPUT_DIR` and `DASHBOARD_LOG_DIR`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = non_empty_env("DASHBOARD_INPUT") {
            self.input_path = PathBuf::from(v);
        }
        if let Some(v) = non_empty_env("DASHBOARD_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty_env("DASHBOARD_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(v));
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        for sheet in [&self.daily_sheet, &self.title_sheet] {
            if sheet.name.trim().is_empty() {
                return Err(DashboardError::Config("Sheet name must not be empty".into()));
            }
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(DashboardError::Config("output_dir must not be empty".into()));
        }
        for canonical in self.channel_aliases.keys() {
            if canonical.trim().is_empty() || *canonical != canonical.to_lowercase() {
                return Err(DashboardError::Config(format!(
                    "Canonical channel name '{}' must be non-empty lowercase",
                    canonical
                )));
            }
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_workbook_layout() {
        let config = Config::default();
        assert_eq!(config.daily_sheet.name, "Daily_raw");
        assert_eq!(config.daily_sheet.header_row, 1);
        assert_eq!(config.title_sheet.name, "Title");
        assert_eq!(config.title_sheet.header_row, 2);
        assert_eq!(
            config.channel_aliases.get("cmoa"),
            Some(&vec!["cmoa".to_string(), "CMOA".to_string()])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            output_dir = "out"

            [channel_aliases]
            linemanga = ["LINE Manga", "LINEマンガ"]
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.daily_sheet.name, "Daily_raw");
        assert_eq!(config.channel_aliases.len(), 1);
        assert!(config.channel_aliases.contains_key("linemanga"));
    }

    #[test]
    fn test_sheet_override() {
        let config = Config::from_toml_str(
            r#"
            [title_sheet]
            name = "Catalog"
            header_row = 0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.title_sheet,
            SheetConfig {
                name: "Catalog".to_string(),
                header_row: 0
            }
        );
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_toml_str(include_str!("../dashboard.example.toml")).unwrap();
        assert_eq!(config.title_sheet.header_row, 2);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.channel_aliases, Config::default().channel_aliases);
    }

    #[test]
    fn test_uppercase_canonical_rejected() {
        let err = Config::from_toml_str(
            r#"
            [channel_aliases]
            Piccoma = ["piccoma"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
