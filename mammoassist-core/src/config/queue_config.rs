//! Work queue configuration.

use serde::{Deserialize, Serialize};

/// Tunables for queue statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueueConfig {
    /// Confidence below which a case counts as low-confidence.
    /// Default: 0.60.
    pub low_confidence_threshold: Option<f64>,
}

impl QueueConfig {
    /// Returns the effective low-confidence threshold, defaulting to 0.60.
    pub fn effective_low_confidence_threshold(&self) -> f64 {
        self.low_confidence_threshold.unwrap_or(0.60)
    }
}
