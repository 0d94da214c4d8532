//! Metrics and reporting errors.
//!
//! Degenerate-denominator conditions are deliberately NOT errors: the
//! engine substitutes 0.0 by policy. This enum covers corpus validation
//! and report serialization only.

/// Errors raised around the fairness engine (never from the rate
/// arithmetic itself).
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Case {case_id} has out-of-range {field}: {value}")]
    OutOfRangeValue {
        case_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Failed to serialize fairness report: {0}")]
    Serialization(#[from] serde_json::Error),
}
