use crate::model::ColumnId;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event polling timeout in milliseconds
    pub tick_rate_ms: u64,
    /// How many px of column width one terminal cell represents
    pub px_per_cell: u32,
    /// Only one row may show its detail panel at a time
    pub exclusive_expansion: bool,
    /// Default width overrides in px, keyed by column id
    pub column_widths: HashMap<ColumnId, u32>,
    /// Roster file loaded when none is given on the command line
    pub roster_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            px_per_cell: 10,
            exclusive_expansion: false,
            column_widths: HashMap::new(),
            roster_path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".roster-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from `path`, or from the default location
    ///
    /// A missing default config file yields `Ok(None)`; an explicitly given
    /// path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Option<Config>> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(None),
            },
        };

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config {}", config_path.display()))?;
        Ok(Some(config))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        let mut config: Config = serde_json::from_str(contents)?;
        // A zero scale would make every column zero cells wide
        config.px_per_cell = config.px_per_cell.max(1);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.px_per_cell, 10);
        assert!(!config.exclusive_expansion);
        assert!(config.column_widths.is_empty());
    }

    #[test]
    fn test_column_width_overrides() {
        let config = Config::from_json(
            r#"{"exclusive_expansion": true, "column_widths": {"name": 260, "mobile": 120}}"#,
        )
        .unwrap();
        assert!(config.exclusive_expansion);
        assert_eq!(config.column_widths.get(&ColumnId::Name), Some(&260));
        assert_eq!(config.column_widths.get(&ColumnId::Mobile), Some(&120));
    }

    #[test]
    fn test_zero_scale_raised() {
        let config = Config::from_json(r#"{"px_per_cell": 0}"#).unwrap();
        assert_eq!(config.px_per_cell, 1);
    }

    #[test]
    fn test_unknown_column_rejected() {
        assert!(Config::from_json(r#"{"column_widths": {"email": 100}}"#).is_err());
    }
}
