use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub roster: RosterConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Roster file to load, the built-in sample is used if absent.
    pub file: Option<PathBuf>,
    /// First id handed out to members without an explicit one.
    pub first_id: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            file: None,
            first_id: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub details: bool,
    pub stats: bool,
    pub unmatched: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            details: true,
            stats: true,
            unmatched: true,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).wrap_err("cannot parse configuration")
    }
}
