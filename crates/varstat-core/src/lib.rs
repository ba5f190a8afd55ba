//! Descriptive statistics over one-dimensional numeric samples.
//!
//! This crate computes a fixed set of descriptive statistics (mean, median,
//! mode, sample variance, standard deviation, coefficient of variation, and
//! z-score normalization) using two independent strategies behind one
//! contract:
//!
//! - [`manual::ManualEngine`]: hand-derived arithmetic, the reference
//!   strategy
//! - [`delegated::StatrsEngine`]: delegates the core aggregates to the
//!   `statrs` crate
//!
//! Running both strategies over the same sample and diffing the results is
//! the intended cross-validation workflow; see
//! [`summary::StatisticsSummary::agrees_with`].
//!
//! # Modules
//!
//! - [`engine`]: the [`StatisticsEngine`](engine::StatisticsEngine) strategy
//!   contract
//! - [`manual`]: manual-arithmetic strategy
//! - [`delegated`]: statrs-delegated strategy
//! - [`summary`]: materialized result record and cross-strategy comparison
//! - [`error`]: error taxonomy shared by every operation
//!
//! # Examples
//!
//! ## Computing a single statistic
//!
//! ```
//! use varstat_core::{engine::StatisticsEngine, manual::ManualEngine};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mean = ManualEngine.mean(&sample).unwrap();
//! assert_eq!(mean, 3.0);
//! ```
//!
//! ## Cross-checking the two strategies
//!
//! ```
//! use varstat_core::{
//!     delegated::StatrsEngine, manual::ManualEngine, summary::StatisticsSummary,
//! };
//!
//! let sample = [10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 40.0, 50.0, 50.0, 60.0];
//! let manual = StatisticsSummary::compute(&ManualEngine, &sample).unwrap();
//! let delegated = StatisticsSummary::compute(&StatrsEngine, &sample).unwrap();
//! assert!(manual.agrees_with(&delegated, 1e-9));
//! ```

pub mod delegated;
pub mod engine;
pub mod error;
pub mod manual;
pub mod summary;
