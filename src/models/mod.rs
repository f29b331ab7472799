//! Data models for the income estimator.
//!
//! - [`EstimatorConfig`]: the flat set of throughput, probability, price and XP
//!   parameters, each with a `DEFAULT_*` constant
//! - [`IncomeReport`]: the fixed-shape result of one estimate, with
//!   [`IncomeReport::entries`] giving a name-keyed view for display
//!
//! Both are plain `Copy` values. A report is computed fresh from a config and
//! never updated afterwards.

pub mod config;
pub mod report;

pub use config::EstimatorConfig;
pub use report::IncomeReport;
