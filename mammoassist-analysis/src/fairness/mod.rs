//! Bias/fairness metrics engine.
//!
//! Control flow: corpus -> partitioner -> statistics calculator (once
//! per subgroup and once for the population) -> disparity flagging ->
//! per-subgroup `BiasMetric` list. The overall aggregator runs
//! independently over the whole corpus. Every call recomputes from
//! scratch; nothing is cached or mutated.

pub mod disparity;
pub mod label;
pub mod overall;
pub mod partition;
pub mod report;
pub mod stats;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mammoassist_core::config::FairnessConfig;
use mammoassist_core::errors::MetricsError;
use mammoassist_core::events::types::{MetricsComputedEvent, SubgroupFlaggedEvent};
use mammoassist_core::events::EventDispatcher;
use mammoassist_core::types::{Case, SubgroupAttribute};

pub use overall::OverallStatistics;
pub use report::FairnessReport;
pub use stats::SubgroupStats;

/// One row of the bias report: a (attribute, subgroup value) pair with
/// its statistics and disparity assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasMetric {
    /// Stable identifier, e.g. `age-band-40-49`.
    pub id: String,
    /// Display name of the attribute, e.g. `Age Band`.
    pub metric_type: String,
    /// Human-readable subgroup label, e.g. `Vendor A`.
    pub subgroup: String,
    pub total_cases: usize,
    pub selection_rate: f64,
    pub false_positive_rate: f64,
    pub false_negative_rate: f64,
    pub average_confidence: f64,
    /// Max of the FP/FN rate deviations from the population.
    pub disparity: f64,
    pub is_flagged: bool,
    /// Non-empty iff flagged.
    pub recommended_actions: Vec<String>,
}

/// The fairness engine. Holds configuration and an optional event
/// dispatcher; the computation itself is stateless.
pub struct FairnessAnalyzer {
    config: FairnessConfig,
    dispatcher: Option<Arc<EventDispatcher>>,
}

impl FairnessAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: FairnessConfig) -> Self {
        Self {
            config,
            dispatcher: None,
        }
    }

    /// Create an analyzer with default configuration (threshold 75,
    /// tolerance 0.10).
    pub fn with_defaults() -> Self {
        Self::new(FairnessConfig::default())
    }

    /// Attach an event dispatcher; `on_metrics_computed` and
    /// `on_subgroup_flagged` fire from `bias_metrics`.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Compute one `BiasMetric` per observed subgroup value, covering
    /// age band, device type, and density category in that fixed order.
    ///
    /// An empty corpus yields an empty list.
    pub fn bias_metrics(&self, cases: &[Case]) -> Vec<BiasMetric> {
        let threshold = self.config.effective_risk_threshold();
        let tolerance = self.config.effective_disparity_tolerance();

        tracing::debug!(
            corpus_size = cases.len(),
            threshold,
            tolerance,
            "Computing bias metrics"
        );

        let all_refs: Vec<&Case> = cases.iter().collect();
        let mut metrics = Vec::new();

        for attribute in SubgroupAttribute::ALL {
            // The partition is total, so the population stats for this
            // attribute are the stats of the whole corpus.
            let Some(population) = stats::subgroup_stats(&all_refs, threshold) else {
                break; // empty corpus
            };

            for (key, bucket) in partition::partition_by(cases, attribute) {
                // Buckets are observed values only, never empty.
                let Some(subgroup) = stats::subgroup_stats(&bucket, threshold) else {
                    continue;
                };
                let assessment = disparity::assess(&subgroup, &population, tolerance);

                metrics.push(BiasMetric {
                    id: format!("{}-{}", attribute.key(), key),
                    metric_type: attribute.display_name().to_string(),
                    subgroup: label::format_subgroup_label(key),
                    total_cases: bucket.len(),
                    selection_rate: subgroup.selection_rate,
                    false_positive_rate: subgroup.false_positive_rate,
                    false_negative_rate: subgroup.false_negative_rate,
                    average_confidence: subgroup.average_confidence,
                    disparity: assessment.disparity,
                    is_flagged: assessment.is_flagged,
                    recommended_actions: disparity::recommended_actions(assessment.is_flagged),
                });
            }
        }

        let flagged_count = metrics.iter().filter(|m| m.is_flagged).count();
        if let Some(ref dispatcher) = self.dispatcher {
            for metric in metrics.iter().filter(|m| m.is_flagged) {
                dispatcher.emit_subgroup_flagged(&SubgroupFlaggedEvent {
                    metric_id: metric.id.clone(),
                    subgroup: metric.subgroup.clone(),
                    disparity: metric.disparity,
                });
            }
            dispatcher.emit_metrics_computed(&MetricsComputedEvent {
                corpus_size: cases.len(),
                metric_count: metrics.len(),
                flagged_count,
            });
        }
        if flagged_count > 0 {
            tracing::info!(flagged_count, "Subgroups exceeded disparity tolerance");
        }

        metrics
    }

    /// Compute population-wide statistics for the whole corpus.
    pub fn overall_statistics(&self, cases: &[Case]) -> OverallStatistics {
        overall::overall_statistics(cases, self.config.effective_risk_threshold())
    }

    /// Compute both outputs as one serializable report.
    pub fn report(&self, cases: &[Case]) -> FairnessReport {
        FairnessReport {
            overall: self.overall_statistics(cases),
            metrics: self.bias_metrics(cases),
        }
    }
}

/// Validate every case's numeric ranges, failing on the first
/// out-of-range record. Intended for corpus providers on ingest.
pub fn validate_corpus(cases: &[Case]) -> Result<(), MetricsError> {
    for case in cases {
        case.validate()?;
    }
    Ok(())
}
