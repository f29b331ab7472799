// fishincome - Expected hourly income estimator for AFK fishing farms
//
// This is the library crate containing the estimator and its data structures.
// The binary crate (main.rs) provides the command-line entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{Cli, ConfigArgs};
pub use models::{EstimatorConfig, IncomeReport};
pub use services::{ConfigWarning, compute, diagnose};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
