use crate::error::{FarmError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub calculation: CalculationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationConfig {
    /// Percentage that modifier deltas are added to
    #[serde(default = "default_baseline_percentage")]
    pub baseline_percentage: f64,
    #[serde(default)]
    pub unknown_level: UnknownLevelPolicy,
}

fn default_baseline_percentage() -> f64 {
    100.0
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            baseline_percentage: default_baseline_percentage(),
            unknown_level: UnknownLevelPolicy::default(),
        }
    }
}

/// What to do when a plant has a table for a modifier kind but no entry
/// for the environment's level label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLevelPolicy {
    /// Fail with `FarmError::UnknownLevel`
    #[default]
    Error,
    /// Contribute NaN, which carries through every downstream figure
    Propagate,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FarmError::Config(format!(
                "Config file not found at {:?}",
                path
            )));
        }

        let config_str = std::fs::read_to_string(path)?;

        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.calculation.baseline_percentage.is_finite() {
            return Err(FarmError::Config(format!(
                "baseline_percentage must be finite, got {}",
                self.calculation.baseline_percentage
            )));
        }
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FarmError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
