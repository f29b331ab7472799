//! Services module - the income estimate itself.
//!
//! # Components
//!
//! - [`compute`]: turns an [`EstimatorConfig`](crate::models::EstimatorConfig) into an
//!   [`IncomeReport`](crate::models::IncomeReport). Pure and deterministic: one pass of
//!   arithmetic, no I/O, no failure modes.
//! - [`diagnose`]: lists [`ConfigWarning`]s for inputs that `compute` will accept but
//!   that probably produce misleading numbers (rates outside `[0, 1]`, splits that do
//!   not sum to 1, zero divisors). Advisory only.
//!
//! # Revenue streams
//!
//! The total is the sum of six streams:
//! 1. Fish sold by the piece
//! 2. XP dropped by every catch, cashed in
//! 3. Mending books sold (single and multi enchant priced separately)
//! 4. Smite / bane / unbreaking III only books sold
//! 5. All other books ground down for XP, cashed in
//! 6. Enchanted bows and rods ground down for XP, cashed in
//!
//! # Usage Example
//!
//! ```
//! use fishincome::models::EstimatorConfig;
//! use fishincome::services::{compute, diagnose};
//!
//! let config = EstimatorConfig {
//!     catches_per_hour: 600.0,
//!     ..Default::default()
//! };
//!
//! assert!(diagnose(&config).is_empty());
//! let report = compute(&config);
//! assert!(report.total_yen_per_hour > 0.0);
//! ```

pub mod diagnostics;
pub mod estimator;

pub use diagnostics::{ConfigWarning, diagnose};
pub use estimator::compute;
