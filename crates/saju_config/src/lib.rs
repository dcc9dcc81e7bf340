//! Configuration for the saju chart service.
//!
//! Settings are read from a TOML file. Every key is optional; missing keys
//! take the defaults shown below.
//!
//! ```toml
//! log_filter = "warn"
//!
//! [analysis]
//! level = "enhanced"          # "basic" | "enhanced"
//! fallback_to_basic = true
//!
//! [scoring]
//! identity_salt = 0
//!
//! [forecast]
//! offsets = [0, 1, 3, 5, 10]
//! ```

pub mod error;

use std::path::Path;

use saju_base::DEFAULT_FORECAST_OFFSETS;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Largest forecast offset accepted, in years.
pub const MAX_FORECAST_OFFSET: u32 = 100;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Depth of analysis the service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLevel {
    /// Pillars, Ten Gods, five elements, and yongsin/gisin.
    Basic,
    /// Basic plus month information, luck cycles, and format.
    #[default]
    Enhanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub level: AnalysisLevel,
    /// Return a basic reading, marked as degraded, when enhanced analysis fails.
    pub fallback_to_basic: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            level: AnalysisLevel::Enhanced,
            fallback_to_basic: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Caller identity folded into the fortune-score seed.
    pub identity_salt: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Years ahead of the as-of year, strictly increasing.
    pub offsets: Vec<u32>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            offsets: DEFAULT_FORECAST_OFFSETS.to_vec(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub forecast: ForecastConfig,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            analysis: AnalysisConfig::default(),
            scoring: ScoringConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl SajuConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), level = ?config.analysis.level, "config loaded");
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let offsets = &self.forecast.offsets;
        if offsets.is_empty() {
            return Err(ConfigError::Invalid("forecast.offsets must not be empty"));
        }
        if offsets.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Invalid(
                "forecast.offsets must be strictly increasing",
            ));
        }
        if offsets.iter().any(|&o| o > MAX_FORECAST_OFFSET) {
            return Err(ConfigError::Invalid(
                "forecast.offsets must not exceed 100 years",
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let c = SajuConfig::from_toml_str("").unwrap();
        assert_eq!(c, SajuConfig::default());
        assert_eq!(c.forecast.offsets, vec![0, 1, 3, 5, 10]);
        assert_eq!(c.analysis.level, AnalysisLevel::Enhanced);
        assert!(c.analysis.fallback_to_basic);
    }

    #[test]
    fn partial_sections() {
        let c = SajuConfig::from_toml_str(
            r#"
            [analysis]
            level = "basic"

            [scoring]
            identity_salt = 17
            "#,
        )
        .unwrap();
        assert_eq!(c.analysis.level, AnalysisLevel::Basic);
        assert!(c.analysis.fallback_to_basic);
        assert_eq!(c.scoring.identity_salt, 17);
        assert_eq!(c.log_filter, "warn");
    }

    #[test]
    fn rejects_unsorted_offsets() {
        let err = SajuConfig::from_toml_str("[forecast]\noffsets = [0, 3, 3]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_and_distant_offsets() {
        assert!(SajuConfig::from_toml_str("[forecast]\noffsets = []").is_err());
        assert!(SajuConfig::from_toml_str("[forecast]\noffsets = [0, 101]").is_err());
    }

    #[test]
    fn rejects_unknown_level() {
        let err = SajuConfig::from_toml_str("[analysis]\nlevel = \"expert\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let mut c = SajuConfig::default();
        c.scoring.identity_salt = 9;
        let text = c.to_toml_string().unwrap();
        assert_eq!(SajuConfig::from_toml_str(&text).unwrap(), c);
    }
}
