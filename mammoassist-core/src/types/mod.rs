//! Domain value types: the case record, subgroup attributes, decisions,
//! and audit events.

pub mod attribute;
pub mod audit;
pub mod case;

pub use attribute::SubgroupAttribute;
pub use audit::{AuditAction, AuditEvent, Decision, Verdict};
pub use case::{AgeBand, Case, CaseStatus, DensityCategory, DeviceType, GroundTruth, Modality};
