//! Configuration models and loaders for the orbit trajectory simulator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Central-body configuration parsed from the bodies catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
}

/// Scenario manifest describing one simulation run. The central body is
/// referenced by catalog name; everything else is given directly.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub central_body: String,
    pub initial_separation_m: f64,
    pub orbiting_mass_kg: f64,
    pub initial_speed_m_s: f64,
    pub time_horizon_days: f64,
    #[serde(default = "default_time_step_s")]
    pub time_step_s: f64,
}

fn default_time_step_s() -> f64 {
    orbit_core::constants::DEFAULT_TIME_STEP_S
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load the central-body catalog from a YAML file or a directory of TOML
/// records.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load a single scenario manifest from a TOML or YAML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
