use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RelengError, Result};

/// Represents the complete configuration for the release tools.
///
/// Every key is optional; a missing section falls back to the built-in
/// defaults, which are what the commands use.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub extract: ExtractConfig,
}

fn default_product_prefix() -> String {
    "org.eclipse.tracecompass".to_string()
}

fn default_snapshot_suffix() -> String {
    "-SNAPSHOT".to_string()
}

fn default_report_root() -> String {
    "releases".to_string()
}

/// Settings for the POM version rewriter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RewriteConfig {
    /// Leading text of the `<artifactId>` values that anchor a root POM rewrite.
    #[serde(default = "default_product_prefix")]
    pub product_prefix: String,

    #[serde(default = "default_snapshot_suffix")]
    pub snapshot_suffix: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        RewriteConfig {
            product_prefix: default_product_prefix(),
            snapshot_suffix: default_snapshot_suffix(),
        }
    }
}

/// Settings for the download statistics extractor.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Path segment that directly precedes the release version in a download path.
    #[serde(default = "default_report_root")]
    pub report_root: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            report_root: default_report_root(),
        }
    }
}

/// Loads configuration from an explicit file.
///
/// The commands never look for a configuration file on their own and run
/// with [`Config::default`]; this is for callers driving the library with
/// their own settings. Missing keys take their defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded configuration
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(config_path: &Path) -> Result<Config> {
    log::debug!("loading configuration from {}", config_path.display());
    let config_str = fs::read_to_string(config_path)?;
    parse_config(&config_str).map_err(|e| match e {
        RelengError::Config(msg) => {
            RelengError::config(format!("{}: {}", config_path.display(), msg))
        }
        other => other,
    })
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| RelengError::config(e.to_string()))?;

    if config.rewrite.snapshot_suffix.is_empty() {
        return Err(RelengError::config("rewrite.snapshot_suffix must not be empty"));
    }
    if config.extract.report_root.is_empty() {
        return Err(RelengError::config("extract.report_root must not be empty"));
    }

    Ok(config)
}
