use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::reagent::{self, Reagent};

/// Optional user configuration.
///
/// Loaded from `~/.config/titra/config.yaml` (or the path in
/// `$TITRA_CONFIG`); a missing file yields the defaults. The config picks a
/// default output mode and extends the reagent preset table.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// User-defined reagents, appended to the builtin table
    #[serde(default)]
    pub reagents: Vec<Reagent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Output mode used when neither --json nor --quiet is given
    #[serde(default)]
    pub output: OutputChoice,
}

/// Configured default for the output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputChoice {
    #[default]
    Human,
    Json,
    Quiet,
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Builtin reagents followed by any user-defined ones.
    pub fn reagent_table(&self) -> Vec<Reagent> {
        let mut table = reagent::builtin();
        table.extend(self.reagents.iter().cloned());
        table
    }
}

/// Returns `$TITRA_CONFIG` when set, else `~/.config/titra/config.yaml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("TITRA_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".config/titra/config.yaml"))
}
