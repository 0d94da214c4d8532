//! Top-level MammoAssist configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FairnessConfig, QueueConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MAMMOASSIST_*`)
/// 2. Project config (`mammoassist.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssistConfig {
    pub fairness: FairnessConfig,
    pub queue: QueueConfig,
}

impl AssistConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("mammoassist.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AssistConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.fairness.risk_threshold {
            if threshold > 100 {
                return Err(ConfigError::ValidationFailed {
                    field: "fairness.risk_threshold".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.fairness.disparity_tolerance {
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(ConfigError::ValidationFailed {
                    field: "fairness.disparity_tolerance".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(low) = config.queue.low_confidence_threshold {
            if !(0.0..=1.0).contains(&low) {
                return Err(ConfigError::ValidationFailed {
                    field: "queue.low_confidence_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AssistConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: AssistConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut AssistConfig, other: &AssistConfig) {
        if other.fairness.risk_threshold.is_some() {
            base.fairness.risk_threshold = other.fairness.risk_threshold;
        }
        if other.fairness.disparity_tolerance.is_some() {
            base.fairness.disparity_tolerance = other.fairness.disparity_tolerance;
        }
        if other.queue.low_confidence_threshold.is_some() {
            base.queue.low_confidence_threshold = other.queue.low_confidence_threshold;
        }
    }

    /// Apply `MAMMOASSIST_*` environment variable overrides.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut AssistConfig) {
        if let Ok(val) = std::env::var("MAMMOASSIST_RISK_THRESHOLD") {
            match val.parse::<u8>() {
                Ok(threshold) => config.fairness.risk_threshold = Some(threshold),
                Err(_) => {
                    tracing::warn!(value = %val, "Ignoring unparseable MAMMOASSIST_RISK_THRESHOLD")
                }
            }
        }
        if let Ok(val) = std::env::var("MAMMOASSIST_DISPARITY_TOLERANCE") {
            match val.parse::<f64>() {
                Ok(tolerance) => config.fairness.disparity_tolerance = Some(tolerance),
                Err(_) => {
                    tracing::warn!(value = %val, "Ignoring unparseable MAMMOASSIST_DISPARITY_TOLERANCE")
                }
            }
        }
        if let Ok(val) = std::env::var("MAMMOASSIST_LOW_CONFIDENCE_THRESHOLD") {
            match val.parse::<f64>() {
                Ok(low) => config.queue.low_confidence_threshold = Some(low),
                Err(_) => tracing::warn!(
                    value = %val,
                    "Ignoring unparseable MAMMOASSIST_LOW_CONFIDENCE_THRESHOLD"
                ),
            }
        }
    }
}
