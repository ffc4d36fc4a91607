use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

/// Radius used when the bulletin does not state the extent of the storm,
/// a typical value for a hurricane
pub const DEFAULT_RADIUS_MI: f64 = 300.0;

/// Landfall text used when no forecast discussion states a landfall time
pub const LANDFALL_UNKNOWN: &str = "TIME OF LANDFALL UNKNOWN";

#[derive(Deserialize)]
pub struct FeedParameters {
    pub path: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExtractionParameters {
    #[serde(default = "default_radius_mi")]
    pub default_radius_mi: f64,
    #[serde(default = "landfall_unknown")]
    pub landfall_unknown: String,
}

impl Default for ExtractionParameters {
    fn default() -> Self {
        ExtractionParameters {
            default_radius_mi: DEFAULT_RADIUS_MI,
            landfall_unknown: LANDFALL_UNKNOWN.to_string(),
        }
    }
}

fn default_radius_mi() -> f64 { DEFAULT_RADIUS_MI }
fn landfall_unknown() -> String { LANDFALL_UNKNOWN.to_string() }

#[derive(Deserialize)]
pub struct Files {
    pub snapshot_dir: String,
    #[serde(default = "history_hours")]
    pub history_hours: u32,
}

fn history_hours() -> u32 { 48 }

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub feed: FeedParameters,
    #[serde(default)]
    pub extraction: ExtractionParameters,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates configuration from a toml document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if !(config.extraction.default_radius_mi > 0.0) {
        return Err(ConfigError::from("default_radius_mi must be positive"));
    }

    Ok(config)
}
