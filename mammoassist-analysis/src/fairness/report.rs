//! Serializable fairness report combining both engine outputs.

use serde::{Deserialize, Serialize};

use mammoassist_core::errors::MetricsError;

use super::overall::OverallStatistics;
use super::BiasMetric;

/// Both engine outputs in one record, for export or dashboard
/// consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairnessReport {
    pub overall: OverallStatistics,
    pub metrics: Vec<BiasMetric>,
}

impl FairnessReport {
    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, MetricsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
