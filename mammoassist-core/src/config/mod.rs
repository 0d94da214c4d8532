//! Layered configuration for the fairness engine and queue operations.

pub mod assist_config;
pub mod fairness_config;
pub mod queue_config;

pub use assist_config::AssistConfig;
pub use fairness_config::FairnessConfig;
pub use queue_config::QueueConfig;
