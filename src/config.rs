use crate::error::{GroundwatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Host-side settings applied before a request reaches the engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Rainfall (mm/yr) to recharge (L/day) proxy used when a request omits recharge.
    #[serde(default = "default_recharge_factor")]
    pub recharge_factor: f64,
    #[serde(default = "default_extraction_rate")]
    pub default_extraction_rate_l_per_day: f64,
    /// Most recent readings kept per analysis.
    #[serde(default = "default_max_readings")]
    pub max_readings: usize,
}

fn default_recharge_factor() -> f64 {
    0.3
}

fn default_extraction_rate() -> f64 {
    5000.0
}

fn default_max_readings() -> usize {
    400
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            recharge_factor: default_recharge_factor(),
            default_extraction_rate_l_per_day: default_extraction_rate(),
            max_readings: default_max_readings(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the standard locations.
    ///
    /// An explicit path must exist. Without one, the built-in defaults are
    /// used when no config file is found.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(GroundwatchError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| GroundwatchError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parse a YAML document, substituting `${VAR}` references first.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| GroundwatchError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        let xdg_config = dirs::config_dir()?.join("groundwatch").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;

        if !(analysis.recharge_factor > 0.0 && analysis.recharge_factor <= 1.0) {
            return Err(GroundwatchError::Config(format!(
                "analysis.recharge_factor must be in (0, 1], got {}",
                analysis.recharge_factor
            )));
        }

        if !(analysis.default_extraction_rate_l_per_day >= 0.0) {
            return Err(GroundwatchError::Config(format!(
                "analysis.default_extraction_rate_l_per_day must be >= 0, got {}",
                analysis.default_extraction_rate_l_per_day
            )));
        }

        if analysis.max_readings < 3 {
            return Err(GroundwatchError::Config(format!(
                "analysis.max_readings must be at least 3, got {}",
                analysis.max_readings
            )));
        }

        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
