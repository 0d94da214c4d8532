//! Work-queue filtering and statistics.
//!
//! Pure corpus operations backing the review queue: filter, sort,
//! summarize. No UI state lives here.

use serde::{Deserialize, Serialize};

use mammoassist_core::config::{FairnessConfig, QueueConfig};
use mammoassist_core::types::{Case, CaseStatus};

/// Queue filter criteria. The default matches every case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueFilters {
    /// Empty means all statuses.
    pub statuses: Vec<CaseStatus>,
    /// Inclusive risk score bounds.
    pub risk_range: (u8, u8),
    /// Inclusive confidence bounds.
    pub confidence_range: (f64, f64),
    pub uncertainty_only: bool,
}

impl Default for QueueFilters {
    fn default() -> Self {
        Self {
            statuses: Vec::new(),
            risk_range: (0, 100),
            confidence_range: (0.0, 1.0),
            uncertainty_only: false,
        }
    }
}

impl QueueFilters {
    fn matches(&self, case: &Case) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&case.status) {
            return false;
        }
        if case.risk_score < self.risk_range.0 || case.risk_score > self.risk_range.1 {
            return false;
        }
        if case.confidence < self.confidence_range.0 || case.confidence > self.confidence_range.1 {
            return false;
        }
        if self.uncertainty_only && !case.uncertainty_flag {
            return false;
        }
        true
    }
}

/// Summary counters over a (filtered) queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct QueueStats {
    pub total: usize,
    /// Cases above the fairness risk threshold.
    pub high_risk: usize,
    /// Cases needing a second look: status `NeedsSecondReview` or the
    /// uncertainty flag set.
    pub needs_review: usize,
    /// Cases below the configured confidence floor.
    pub low_confidence: usize,
    pub avg_risk_score: f64,
}

/// Select the cases matching `filters`, in corpus order.
pub fn filter_cases<'a>(cases: &'a [Case], filters: &QueueFilters) -> Vec<&'a Case> {
    cases.iter().filter(|c| filters.matches(c)).collect()
}

/// Stable sort by risk score, highest first. Ties keep corpus order.
pub fn sort_by_risk_desc<'a>(mut cases: Vec<&'a Case>) -> Vec<&'a Case> {
    cases.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    cases
}

/// Summarize a case list. An empty list yields an all-zero record.
pub fn queue_stats(
    cases: &[&Case],
    fairness: &FairnessConfig,
    queue: &QueueConfig,
) -> QueueStats {
    if cases.is_empty() {
        return QueueStats::default();
    }
    let threshold = fairness.effective_risk_threshold();
    let low_confidence_threshold = queue.effective_low_confidence_threshold();

    let mut stats = QueueStats {
        total: cases.len(),
        ..QueueStats::default()
    };
    let mut risk_sum = 0u64;

    for case in cases {
        if case.risk_score > threshold {
            stats.high_risk += 1;
        }
        if case.status == CaseStatus::NeedsSecondReview || case.uncertainty_flag {
            stats.needs_review += 1;
        }
        if case.confidence < low_confidence_threshold {
            stats.low_confidence += 1;
        }
        risk_sum += u64::from(case.risk_score);
    }

    stats.avg_risk_score = risk_sum as f64 / cases.len() as f64;
    stats
}
