//! Fairness metrics engine, queue operations, and command dispatch.
//!
//! Everything in this crate is a pure, synchronous computation over an
//! immutable corpus snapshot: safe to invoke on every render, no shared
//! mutable state, no caching.

pub mod command;
pub mod fairness;
pub mod queue;

pub use command::{CommandAction, CommandTable, ParsedCommand, Route};
pub use fairness::{BiasMetric, FairnessAnalyzer, OverallStatistics, SubgroupStats};
pub use queue::{QueueFilters, QueueStats};
