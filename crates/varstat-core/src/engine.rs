//! The strategy contract shared by both computation paths.

use crate::error::StatsError;

/// A strategy for computing descriptive statistics over a sample.
///
/// Every operation is a pure function of the borrowed sample: no state is
/// retained between calls and the caller's slice is never mutated (the
/// median sorts a copy). All arithmetic is `f64`, and implementations must
/// return plain primitives regardless of what they delegate to internally.
///
/// # Examples
///
/// ```
/// use varstat_core::{engine::StatisticsEngine, manual::ManualEngine};
///
/// let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(ManualEngine.mean(&sample).unwrap(), 5.0);
/// assert_eq!(ManualEngine.mode(&sample).unwrap(), 4.0);
/// ```
pub trait StatisticsEngine {
    /// Arithmetic mean: sum of elements divided by their count.
    fn mean(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// Middle element of the ascending-sorted sample; for an even count,
    /// the average of the two central elements.
    fn median(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// The most frequent value. When several values share the maximum
    /// frequency, the winner is the value whose first occurrence comes
    /// earliest in the sample.
    fn mode(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// Bessel-corrected sample variance: sum of squared deviations from the
    /// mean divided by `count - 1`.
    fn variance(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// Square root of the sample variance.
    fn std_dev(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// Standard deviation as a percentage of the mean:
    /// `(std_dev / mean) * 100`.
    ///
    /// Fails with [`StatsError::DivisionByZero`] when the mean is zero.
    fn coefficient_of_variation(&self, sample: &[f64]) -> Result<f64, StatsError>;

    /// `(x - mean) / std_dev` for every element, preserving input order and
    /// length.
    ///
    /// Fails with [`StatsError::DivisionByZero`] when the standard deviation
    /// is zero (constant sample).
    fn z_scores(&self, sample: &[f64]) -> Result<Vec<f64>, StatsError>;
}

/// Computes the mode with the first-occurrence tie-break policy.
///
/// Frequencies are accumulated in first-seen order, and only a strictly
/// greater count displaces the current winner. `Iterator::max_by_key` would
/// return the *last* maximum, so the fold is explicit.
///
/// Both engines share this helper so their mode output is identical by
/// construction on multimodal input.
pub(crate) fn first_seen_mode(sample: &[f64]) -> Result<f64, StatsError> {
    let mut frequencies: Vec<(f64, usize)> = Vec::new();
    for &value in sample {
        match frequencies
            .iter_mut()
            .find(|(seen, _)| seen.total_cmp(&value).is_eq())
        {
            Some((_, count)) => *count += 1,
            None => frequencies.push((value, 1)),
        }
    }

    let (&(first, first_count), rest) = frequencies.split_first().ok_or(StatsError::EmptyInput)?;
    let mut best_value = first;
    let mut best_count = first_count;
    for &(value, count) in rest {
        if count > best_count {
            best_value = value;
            best_count = count;
        }
    }
    Ok(best_value)
}
