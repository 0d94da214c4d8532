//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::AssistEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AssistEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AssistEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent
    /// handlers from receiving the event.
    fn emit<F: Fn(&dyn AssistEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("Event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_case_viewed(&self, event: &CaseViewedEvent) {
        self.emit(|h| h.on_case_viewed(event));
    }

    pub fn emit_decision_recorded(&self, event: &DecisionRecordedEvent) {
        self.emit(|h| h.on_decision_recorded(event));
    }

    pub fn emit_metrics_computed(&self, event: &MetricsComputedEvent) {
        self.emit(|h| h.on_metrics_computed(event));
    }

    pub fn emit_subgroup_flagged(&self, event: &SubgroupFlaggedEvent) {
        self.emit(|h| h.on_subgroup_flagged(event));
    }

    pub fn emit_command_parsed(&self, event: &CommandParsedEvent) {
        self.emit(|h| h.on_command_parsed(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
