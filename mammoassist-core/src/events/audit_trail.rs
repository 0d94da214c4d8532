//! AuditTrailHandler — bridges domain events into the audit store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::handler::AssistEventHandler;
use super::store::AuditStore;
use super::types::*;
use crate::types::{AuditAction, AuditEvent};

/// An event handler that appends an audit entry for each observed
/// user-facing domain event. Entry ids are sequential within one
/// handler instance.
pub struct AuditTrailHandler {
    store: Arc<dyn AuditStore>,
    next_id: AtomicU64,
}

impl AuditTrailHandler {
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self {
            store,
            next_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("audit-{n}")
    }
}

impl AssistEventHandler for AuditTrailHandler {
    fn on_case_viewed(&self, event: &CaseViewedEvent) {
        self.store.append(AuditEvent {
            id: self.next_id(),
            timestamp: event.timestamp.clone(),
            user: event.user.clone(),
            case_id: event.case_id.clone(),
            action: AuditAction::Viewed,
            details: format!("Viewed case {}", event.case_id),
        });
    }

    fn on_decision_recorded(&self, event: &DecisionRecordedEvent) {
        self.store.append(AuditEvent {
            id: self.next_id(),
            timestamp: event.timestamp.clone(),
            user: event.user_id.clone(),
            case_id: event.case_id.clone(),
            action: AuditAction::DecisionMade,
            details: format!("Recorded decision: {}", event.verdict.as_str()),
        });
    }

    fn on_command_parsed(&self, event: &CommandParsedEvent) {
        self.store.append(AuditEvent {
            id: self.next_id(),
            timestamp: event.timestamp.clone(),
            user: event.user.clone(),
            case_id: String::new(),
            action: AuditAction::VoiceCommand,
            details: format!("Voice command \"{}\" -> {}", event.transcript, event.rule),
        });
    }
}
