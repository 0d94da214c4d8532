//! AssistEventHandler — observer trait with no-op defaults.

use super::types::*;

/// Observer of domain events. Every method has a no-op default so
/// handlers implement only what they care about.
pub trait AssistEventHandler: Send + Sync {
    fn on_case_viewed(&self, _event: &CaseViewedEvent) {}

    fn on_decision_recorded(&self, _event: &DecisionRecordedEvent) {}

    fn on_metrics_computed(&self, _event: &MetricsComputedEvent) {}

    fn on_subgroup_flagged(&self, _event: &SubgroupFlaggedEvent) {}

    fn on_command_parsed(&self, _event: &CommandParsedEvent) {}

    fn on_error(&self, _event: &ErrorEvent) {}
}
