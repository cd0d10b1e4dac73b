//! Configuration management for skillgraph

use crate::error::{Result, SkillGraphError};
use crate::taxonomy::MatchMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub enrichment: EnrichmentConfig,
    pub output: OutputConfig,
}

/// Weights feeding the attainable and earned score totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub required_weight: u32,
    pub bonus_weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// `substring` preserves raw containment; `word` requires matches to be
    /// flanked by non-alphanumeric characters.
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub enabled: bool,
    /// Optional JSON file overriding the built-in signal tables.
    pub signals_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                required_weight: 10,
                bonus_weight: 5,
            },
            extraction: ExtractionConfig {
                match_mode: MatchMode::Substring,
            },
            enrichment: EnrichmentConfig {
                enabled: true,
                signals_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, creating a default config file on
    /// first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SkillGraphError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillGraphError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillgraph")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_engine_defaults() {
        let config = Config::default();
        assert_eq!(config.scoring.required_weight, 10);
        assert_eq!(config.scoring.bonus_weight, 5);
        assert_eq!(config.extraction.match_mode, MatchMode::Substring);
        assert!(config.enrichment.enabled);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_config_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.bonus_weight = 7;
        config.extraction.match_mode = MatchMode::WordBounded;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.bonus_weight, 7);
        assert_eq!(loaded.extraction.match_mode, MatchMode::WordBounded);
    }

    #[test]
    fn test_malformed_config_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = \"nope\"").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(SkillGraphError::Configuration(_))));
    }
}
