//! Classifier configuration.
//!
//! Defaults reproduce the stock heuristic exactly. Every field can be
//! overridden from JSON; omitted fields keep their defaults.
//!
//! ```
//! use tonecheck_core::ClassifierConfig;
//!
//! let config = ClassifierConfig::from_json_str(r#"{ "intensifier_boost": 2.0 }"#).unwrap();
//! assert_eq!(config.intensifier_boost, 2.0);
//! assert_eq!(config.label_threshold, 0.5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest agreement bonus accepted by [`ClassifierConfig::validate`].
pub const MAX_AGREEMENT_BONUS: f32 = 0.1;

/// Configuration for sentiment classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Whether classification is enabled.
    pub enabled: bool,
    /// Multiplier applied to a scoring word that follows an intensifier.
    pub intensifier_boost: f32,
    /// Lexical scores beyond `±label_threshold` are polar.
    pub label_threshold: f32,
    /// Share of the combined confidence taken from emoji (rest is lexical).
    pub emoji_weight: f32,
    /// Added to the combined confidence when emoji and words agree.
    pub agreement_bonus: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensifier_boost: 1.6,
            label_threshold: 0.5,
            emoji_weight: 0.75,
            agreement_bonus: 0.03,
        }
    }
}

impl ClassifierConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded classifier config from {:?}", path);
        Ok(config)
    }

    /// Checks that every value keeps confidences inside their bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.intensifier_boost.is_finite() && self.intensifier_boost > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "intensifier_boost must be positive, got {}",
                self.intensifier_boost
            )));
        }
        if !(self.label_threshold.is_finite() && self.label_threshold >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "label_threshold must be non-negative, got {}",
                self.label_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.emoji_weight) {
            return Err(ConfigError::Invalid(format!(
                "emoji_weight must be within [0, 1], got {}",
                self.emoji_weight
            )));
        }
        if !(0.0..=MAX_AGREEMENT_BONUS).contains(&self.agreement_bonus) {
            return Err(ConfigError::Invalid(format!(
                "agreement_bonus must be within [0, {MAX_AGREEMENT_BONUS}], got {}",
                self.agreement_bonus
            )));
        }
        Ok(())
    }
}
