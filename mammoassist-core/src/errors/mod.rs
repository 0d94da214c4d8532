//! Error handling for MammoAssist.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod metrics_error;

pub use config_error::ConfigError;
pub use metrics_error::MetricsError;
