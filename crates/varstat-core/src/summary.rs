//! Materialized result record and cross-strategy comparison.

use serde::Serialize;

use crate::{engine::StatisticsEngine, error::StatsError};

/// Every statistic the engine computes for one sample, as plain primitives.
///
/// Fields are immutable once computed; the record is built in one pass and
/// holds no reference to the sample it came from.
///
/// # Examples
///
/// ```
/// use varstat_core::{manual::ManualEngine, summary::StatisticsSummary};
///
/// let sample = [1.0, 2.0, 2.0, 3.0];
/// let summary = StatisticsSummary::compute(&ManualEngine, &sample).unwrap();
/// assert_eq!(summary.mean, 2.0);
/// assert_eq!(summary.mode, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Standard deviation as a percentage of the mean.
    pub coefficient_of_variation: f64,
    /// One z-score per input element, in input order.
    pub z_scores: Vec<f64>,
}

impl StatisticsSummary {
    /// Runs all seven statistics through one strategy.
    ///
    /// The sample must have at least two elements, a nonzero mean, and at
    /// least two distinct values, since the summary includes the statistics
    /// with those requirements; any failure propagates unchanged.
    pub fn compute<E>(engine: &E, sample: &[f64]) -> Result<Self, StatsError>
    where
        E: StatisticsEngine + ?Sized,
    {
        Ok(Self {
            mean: engine.mean(sample)?,
            median: engine.median(sample)?,
            mode: engine.mode(sample)?,
            variance: engine.variance(sample)?,
            std_dev: engine.std_dev(sample)?,
            coefficient_of_variation: engine.coefficient_of_variation(sample)?,
            z_scores: engine.z_scores(sample)?,
        })
    }

    /// Cross-checks two summaries of the same sample.
    ///
    /// Float fields (z-scores element-wise) must agree within `rel_tol`
    /// relative tolerance; the mode must match exactly, since both
    /// strategies fix the same tie-break policy.
    #[must_use]
    pub fn agrees_with(&self, other: &Self, rel_tol: f64) -> bool {
        self.mode.total_cmp(&other.mode).is_eq()
            && relative_agreement(self.mean, other.mean, rel_tol)
            && relative_agreement(self.median, other.median, rel_tol)
            && relative_agreement(self.variance, other.variance, rel_tol)
            && relative_agreement(self.std_dev, other.std_dev, rel_tol)
            && relative_agreement(
                self.coefficient_of_variation,
                other.coefficient_of_variation,
                rel_tol,
            )
            && self.z_scores.len() == other.z_scores.len()
            && self
                .z_scores
                .iter()
                .zip(&other.z_scores)
                .all(|(a, b)| relative_agreement(*a, *b, rel_tol))
    }
}

fn relative_agreement(a: f64, b: f64, rel_tol: f64) -> bool {
    a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
