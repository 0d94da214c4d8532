//! Audit store — append/query interface over the audit trail.
//!
//! Replaces shared top-level mutable containers with an explicit store
//! injected into whichever component needs it.

use std::sync::RwLock;

use crate::types::{AuditAction, AuditEvent};

/// Filter for audit queries. All populated fields must match.
/// Timestamp bounds are inclusive and compare lexicographically, which
/// is correct for RFC 3339 strings in a single offset.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    pub action: Option<AuditAction>,
    pub case_id: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl AuditQuery {
    fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(action) = self.action {
            if event.action != action {
                return false;
            }
        }
        if let Some(ref case_id) = self.case_id {
            if &event.case_id != case_id {
                return false;
            }
        }
        if let Some(ref since) = self.since {
            if event.timestamp.as_str() < since.as_str() {
                return false;
            }
        }
        if let Some(ref until) = self.until {
            if event.timestamp.as_str() > until.as_str() {
                return false;
            }
        }
        true
    }
}

/// Append-only audit trail interface.
pub trait AuditStore: Send + Sync {
    /// Append one event. Appends never fail and never reorder.
    fn append(&self, event: AuditEvent);

    /// All events matching the query, newest appended first.
    fn query(&self, query: &AuditQuery) -> Vec<AuditEvent>;

    /// Number of stored events.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All events for one case, newest appended first.
    fn events_for_case(&self, case_id: &str) -> Vec<AuditEvent> {
        self.query(&AuditQuery {
            case_id: Some(case_id.to_string()),
            ..AuditQuery::default()
        })
    }
}

/// In-memory audit store. Insertion order is preserved internally;
/// queries return newest-first.
pub struct InMemoryAuditStore {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuditStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditStore for InMemoryAuditStore {
    fn append(&self, event: AuditEvent) {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        events.push(event);
    }

    fn query(&self, query: &AuditQuery) -> Vec<AuditEvent> {
        let events = self.events.read().unwrap_or_else(|e| e.into_inner());
        events
            .iter()
            .rev()
            .filter(|e| query.matches(e))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        let events = self.events.read().unwrap_or_else(|e| e.into_inner());
        events.len()
    }
}
