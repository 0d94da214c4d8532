//! Core types, errors, configuration, and events for the MammoAssist
//! fairness engine.
//!
//! This crate holds everything the analysis crate consumes: the case
//! record and its subgroup enumerations, the per-subsystem error enums,
//! layered configuration, and the synchronous event system (handler
//! trait, dispatcher, audit store).

pub mod config;
pub mod errors;
pub mod events;
pub mod telemetry;
pub mod types;
