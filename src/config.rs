use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::{default_patterns, FailurePatternDef};
use crate::errors::AnalyzerError;
use crate::similarity::SimilarityThresholds;

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Reports kept in history before the oldest is evicted
    pub max_history_size: usize,

    /// Maximum closest matches per report
    pub match_limit: usize,

    /// Minimum best score for a closest match
    pub min_match_score: f64,

    /// Mean attempt duration above which searches count as slow
    pub slow_search_threshold_ms: f64,

    pub thresholds: SimilarityThresholds,

    pub patterns: Vec<FailurePatternDef>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            max_history_size: 100,
            match_limit: 10,
            min_match_score: 50.0,
            slow_search_threshold_ms: 2000.0,
            thresholds: SimilarityThresholds::default(),
            patterns: default_patterns(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AnalyzerConfig = toml::from_str(contents)
            .context("Failed to parse analyzer config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&contents)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".failsight").join("config.toml"))
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.max_history_size == 0 {
            return Err(AnalyzerError::InvalidConfig(
                "max_history_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_match_score) {
            return Err(AnalyzerError::InvalidConfig(format!(
                "min_match_score must lie in 0-100, got {}",
                self.min_match_score
            )));
        }
        if self.slow_search_threshold_ms < 0.0 || self.slow_search_threshold_ms.is_nan() {
            return Err(AnalyzerError::InvalidConfig(
                "slow_search_threshold_ms must not be negative".to_string(),
            ));
        }

        self.thresholds.validate()?;

        for pattern in &self.patterns {
            pattern.validate()?;
        }

        Ok(())
    }
}
