//! Synchronous event system: handler trait, dispatcher, audit store.
//!
//! The audit trail lives behind an explicit append/query interface
//! rather than shared mutable state. Nothing here reads a clock;
//! timestamps travel inside the event payloads.

pub mod audit_trail;
pub mod dispatcher;
pub mod handler;
pub mod store;
pub mod types;

pub use audit_trail::AuditTrailHandler;
pub use dispatcher::EventDispatcher;
pub use handler::AssistEventHandler;
pub use store::{AuditQuery, AuditStore, InMemoryAuditStore};
