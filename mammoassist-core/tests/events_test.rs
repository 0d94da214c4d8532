//! Tests for the event system: dispatcher, audit store, audit trail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mammoassist_core::events::dispatcher::EventDispatcher;
use mammoassist_core::events::handler::AssistEventHandler;
use mammoassist_core::events::store::{AuditQuery, AuditStore, InMemoryAuditStore};
use mammoassist_core::events::types::*;
use mammoassist_core::events::AuditTrailHandler;
use mammoassist_core::types::{AuditAction, AuditEvent, Verdict};

/// A test handler that counts events.
struct CountingHandler {
    case_viewed: AtomicUsize,
    decision_recorded: AtomicUsize,
    metrics_computed: AtomicUsize,
    subgroup_flagged: AtomicUsize,
    command_parsed: AtomicUsize,
    error_count: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            case_viewed: AtomicUsize::new(0),
            decision_recorded: AtomicUsize::new(0),
            metrics_computed: AtomicUsize::new(0),
            subgroup_flagged: AtomicUsize::new(0),
            command_parsed: AtomicUsize::new(0),
            error_count: AtomicUsize::new(0),
        }
    }
}

impl AssistEventHandler for CountingHandler {
    fn on_case_viewed(&self, _event: &CaseViewedEvent) {
        self.case_viewed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_decision_recorded(&self, _event: &DecisionRecordedEvent) {
        self.decision_recorded.fetch_add(1, Ordering::Relaxed);
    }

    fn on_metrics_computed(&self, _event: &MetricsComputedEvent) {
        self.metrics_computed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_subgroup_flagged(&self, _event: &SubgroupFlaggedEvent) {
        self.subgroup_flagged.fetch_add(1, Ordering::Relaxed);
    }

    fn on_command_parsed(&self, _event: &CommandParsedEvent) {
        self.command_parsed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_error(&self, _event: &ErrorEvent) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }
}

fn viewed(case_id: &str) -> CaseViewedEvent {
    CaseViewedEvent {
        case_id: case_id.to_string(),
        user: "dr-lee".to_string(),
        timestamp: "2025-06-01T09:00:00Z".to_string(),
    }
}

#[test]
fn handler_noop_defaults_compile() {
    struct NoopHandler;
    impl AssistEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_case_viewed(&viewed("case-1"));
    handler.on_metrics_computed(&MetricsComputedEvent {
        corpus_size: 10,
        metric_count: 11,
        flagged_count: 0,
    });
    handler.on_error(&ErrorEvent {
        message: "test".into(),
        error_code: "TEST".into(),
    });
}

#[test]
fn dispatcher_fans_out_to_all_handlers() {
    let mut dispatcher = EventDispatcher::new();
    let first = Arc::new(CountingHandler::new());
    let second = Arc::new(CountingHandler::new());
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_case_viewed(&viewed("case-1"));
    dispatcher.emit_case_viewed(&viewed("case-2"));
    dispatcher.emit_subgroup_flagged(&SubgroupFlaggedEvent {
        metric_id: "device-type-vendor-b".to_string(),
        subgroup: "Vendor B".to_string(),
        disparity: 0.22,
    });

    assert_eq!(first.case_viewed.load(Ordering::Relaxed), 2);
    assert_eq!(second.case_viewed.load(Ordering::Relaxed), 2);
    assert_eq!(first.subgroup_flagged.load(Ordering::Relaxed), 1);
}

#[test]
fn panicking_handler_does_not_starve_the_rest() {
    struct PanickingHandler;
    impl AssistEventHandler for PanickingHandler {
        fn on_case_viewed(&self, _event: &CaseViewedEvent) {
            panic!("handler bug");
        }
    }

    let mut dispatcher = EventDispatcher::new();
    let counter = Arc::new(CountingHandler::new());
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_case_viewed(&viewed("case-1"));
    assert_eq!(counter.case_viewed.load(Ordering::Relaxed), 1);
}

fn audit_event(id: &str, ts: &str, case_id: &str, action: AuditAction) -> AuditEvent {
    AuditEvent {
        id: id.to_string(),
        timestamp: ts.to_string(),
        user: "dr-lee".to_string(),
        case_id: case_id.to_string(),
        action,
        details: String::new(),
    }
}

#[test]
fn store_query_returns_newest_first() {
    let store = InMemoryAuditStore::new();
    store.append(audit_event("e1", "2025-06-01T09:00:00Z", "case-1", AuditAction::Viewed));
    store.append(audit_event("e2", "2025-06-01T10:00:00Z", "case-1", AuditAction::DecisionMade));
    store.append(audit_event("e3", "2025-06-01T11:00:00Z", "case-2", AuditAction::Viewed));
    assert_eq!(store.len(), 3);

    let all = store.query(&AuditQuery::default());
    let ids: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e3", "e2", "e1"]);
}

#[test]
fn store_filters_by_action_case_and_time() {
    let store = InMemoryAuditStore::new();
    store.append(audit_event("e1", "2025-06-01T09:00:00Z", "case-1", AuditAction::Viewed));
    store.append(audit_event("e2", "2025-06-01T10:00:00Z", "case-1", AuditAction::DecisionMade));
    store.append(audit_event("e3", "2025-06-01T11:00:00Z", "case-2", AuditAction::Viewed));

    let viewed_only = store.query(&AuditQuery {
        action: Some(AuditAction::Viewed),
        ..AuditQuery::default()
    });
    assert_eq!(viewed_only.len(), 2);

    let case_one = store.events_for_case("case-1");
    assert_eq!(case_one.len(), 2);
    assert_eq!(case_one[0].id, "e2");

    // Bounds are inclusive.
    let mid = store.query(&AuditQuery {
        since: Some("2025-06-01T10:00:00Z".to_string()),
        until: Some("2025-06-01T10:00:00Z".to_string()),
        ..AuditQuery::default()
    });
    assert_eq!(mid.len(), 1);
    assert_eq!(mid[0].id, "e2");
}

#[test]
fn audit_trail_handler_maps_domain_events_to_entries() {
    let store = Arc::new(InMemoryAuditStore::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(AuditTrailHandler::new(store.clone())));

    dispatcher.emit_case_viewed(&viewed("case-7"));
    dispatcher.emit_decision_recorded(&DecisionRecordedEvent {
        case_id: "case-7".to_string(),
        verdict: Verdict::ConfirmFinding,
        user_id: "dr-lee".to_string(),
        timestamp: "2025-06-01T09:05:00Z".to_string(),
    });
    dispatcher.emit_command_parsed(&CommandParsedEvent {
        transcript: "open queue".to_string(),
        rule: "open-queue".to_string(),
        recognized: true,
        user: "dr-lee".to_string(),
        timestamp: "2025-06-01T09:06:00Z".to_string(),
    });

    assert_eq!(store.len(), 3);
    let entries = store.query(&AuditQuery::default());
    // Newest first: voice command, decision, view.
    assert_eq!(entries[0].action, AuditAction::VoiceCommand);
    assert_eq!(entries[1].action, AuditAction::DecisionMade);
    assert_eq!(entries[1].details, "Recorded decision: confirm-finding");
    assert_eq!(entries[2].action, AuditAction::Viewed);
    // Sequential ids within one handler.
    assert_eq!(entries[2].id, "audit-1");
    assert_eq!(entries[0].id, "audit-3");
}
