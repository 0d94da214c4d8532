//! Event payload types.
//!
//! Payloads carry their own RFC 3339 timestamps where the audit trail
//! needs one; the event system itself never reads a clock.

use crate::types::Verdict;

/// Payload for `on_case_viewed`.
#[derive(Debug, Clone)]
pub struct CaseViewedEvent {
    pub case_id: String,
    pub user: String,
    pub timestamp: String,
}

/// Payload for `on_decision_recorded`.
#[derive(Debug, Clone)]
pub struct DecisionRecordedEvent {
    pub case_id: String,
    pub verdict: Verdict,
    pub user_id: String,
    pub timestamp: String,
}

/// Payload for `on_metrics_computed`.
#[derive(Debug, Clone)]
pub struct MetricsComputedEvent {
    pub corpus_size: usize,
    pub metric_count: usize,
    pub flagged_count: usize,
}

/// Payload for `on_subgroup_flagged`.
#[derive(Debug, Clone)]
pub struct SubgroupFlaggedEvent {
    pub metric_id: String,
    pub subgroup: String,
    pub disparity: f64,
}

/// Payload for `on_command_parsed`.
#[derive(Debug, Clone)]
pub struct CommandParsedEvent {
    pub transcript: String,
    /// Name of the dispatch rule that matched (`"unknown"` for the
    /// fallback).
    pub rule: String,
    pub recognized: bool,
    pub user: String,
    pub timestamp: String,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
