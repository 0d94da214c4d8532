//! Disparity flagging — subgroup rates vs population rates.

use super::stats::SubgroupStats;

/// Mitigation guidance attached to flagged subgroups. Static text, not
/// case-specific.
pub const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Review training data distribution for this subgroup",
    "Consider rebalancing dataset or applying fairness constraints",
    "Conduct expert review of cases in this subgroup",
    "Monitor closely in future evaluations",
];

/// Outcome of comparing a subgroup's error rates against the
/// population's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisparityAssessment {
    pub fp_disparity: f64,
    pub fn_disparity: f64,
    /// Max of the two deviations, reported regardless of which one
    /// tripped the tolerance.
    pub disparity: f64,
    pub is_flagged: bool,
}

/// Compare a subgroup's rates to the population's.
///
/// Flagged iff either absolute deviation strictly exceeds `tolerance`
/// (a deviation of exactly `tolerance` is not flagged). Symmetric in
/// its two stats arguments.
pub fn assess(
    subgroup: &SubgroupStats,
    population: &SubgroupStats,
    tolerance: f64,
) -> DisparityAssessment {
    let fp_disparity = (subgroup.false_positive_rate - population.false_positive_rate).abs();
    let fn_disparity = (subgroup.false_negative_rate - population.false_negative_rate).abs();
    DisparityAssessment {
        fp_disparity,
        fn_disparity,
        disparity: fp_disparity.max(fn_disparity),
        is_flagged: fp_disparity > tolerance || fn_disparity > tolerance,
    }
}

/// The action list for a metric: the fixed four when flagged, empty
/// otherwise.
pub fn recommended_actions(is_flagged: bool) -> Vec<String> {
    if is_flagged {
        RECOMMENDED_ACTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    }
}
