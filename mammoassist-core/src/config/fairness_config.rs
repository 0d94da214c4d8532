//! Fairness engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the bias metrics engine.
///
/// Both values ship as compiled defaults matching the current clinical
/// policy, so behavior is unchanged when no config is supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FairnessConfig {
    /// High-risk decision threshold on the 0–100 risk scale. A case is
    /// selected iff `risk_score > threshold`. Default: 75.
    pub risk_threshold: Option<u8>,
    /// Disparity tolerance in rate units. A subgroup is flagged iff
    /// either rate deviation strictly exceeds this. Default: 0.10.
    pub disparity_tolerance: Option<f64>,
}

impl FairnessConfig {
    /// Returns the effective risk threshold, defaulting to 75.
    pub fn effective_risk_threshold(&self) -> u8 {
        self.risk_threshold.unwrap_or(75)
    }

    /// Returns the effective disparity tolerance, defaulting to 0.10.
    pub fn effective_disparity_tolerance(&self) -> f64 {
        self.disparity_tolerance.unwrap_or(0.10)
    }
}
