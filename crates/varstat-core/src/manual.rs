//! Manually derived arithmetic strategy.

use crate::{
    engine::{StatisticsEngine, first_seen_mode},
    error::StatsError,
};

/// Computes every statistic from its defining formula, with no delegation.
///
/// This is the reference strategy the delegated one is cross-checked
/// against.
///
/// # Examples
///
/// ```
/// use varstat_core::{engine::StatisticsEngine, manual::ManualEngine};
///
/// let sample = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(ManualEngine.median(&sample).unwrap(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualEngine;

impl StatisticsEngine for ManualEngine {
    #[expect(clippy::cast_precision_loss)]
    fn mean(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        Ok(sample.iter().sum::<f64>() / sample.len() as f64)
    }

    fn median(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Ok(sorted[mid])
        }
    }

    fn mode(&self, sample: &[f64]) -> Result<f64, StatsError> {
        first_seen_mode(sample)
    }

    #[expect(clippy::cast_precision_loss)]
    fn variance(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if sample.len() == 1 {
            return Err(StatsError::InsufficientData);
        }
        let mean = self.mean(sample)?;
        let squared_deviations = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        Ok(squared_deviations / (sample.len() - 1) as f64)
    }

    fn std_dev(&self, sample: &[f64]) -> Result<f64, StatsError> {
        Ok(self.variance(sample)?.sqrt())
    }

    fn coefficient_of_variation(&self, sample: &[f64]) -> Result<f64, StatsError> {
        let std_dev = self.std_dev(sample)?;
        let mean = self.mean(sample)?;
        if mean == 0.0 {
            return Err(StatsError::DivisionByZero);
        }
        Ok(std_dev / mean * 100.0)
    }

    fn z_scores(&self, sample: &[f64]) -> Result<Vec<f64>, StatsError> {
        let std_dev = self.std_dev(sample)?;
        if std_dev == 0.0 {
            return Err(StatsError::DivisionByZero);
        }
        let mean = self.mean(sample)?;
        Ok(sample.iter().map(|x| (x - mean) / std_dev).collect())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const SAMPLE: [f64; 10] = [10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 40.0, 50.0, 50.0, 60.0];

    #[test]
    fn test_mean() {
        assert_eq!(ManualEngine.mean(&SAMPLE), Ok(34.0));
    }

    #[test]
    fn test_mean_is_permutation_invariant() {
        let reversed: Vec<f64> = SAMPLE.iter().rev().copied().collect();
        assert_relative_eq!(
            ManualEngine.mean(&SAMPLE).unwrap(),
            ManualEngine.mean(&reversed).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(ManualEngine.median(&SAMPLE), Ok(30.0));
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(ManualEngine.median(&[9.0, 1.0, 5.0]), Ok(5.0));
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let sample = [3.0, 1.0, 2.0];
        let _ = ManualEngine.median(&sample).unwrap();
        assert_eq!(sample, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_stable_under_appending_itself() {
        let odd = [1.0, 5.0, 9.0];
        let median = ManualEngine.median(&odd).unwrap();
        let extended = [1.0, 5.0, 9.0, median];
        assert_relative_eq!(
            ManualEngine.median(&extended).unwrap(),
            median,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_mode() {
        assert_eq!(ManualEngine.mode(&SAMPLE), Ok(30.0));
    }

    #[test]
    fn test_variance_is_bessel_corrected() {
        // Squared deviations from 34 sum to exactly 2240.
        assert_eq!(ManualEngine.variance(&SAMPLE), Ok(2240.0 / 9.0));
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let variance = ManualEngine.variance(&SAMPLE).unwrap();
        let std_dev = ManualEngine.std_dev(&SAMPLE).unwrap();
        assert_eq!(std_dev, variance.sqrt());
        assert_relative_eq!(std_dev, 15.776_212_8, max_relative = 1e-8);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let cv = ManualEngine.coefficient_of_variation(&SAMPLE).unwrap();
        assert_relative_eq!(cv, 46.400_626, max_relative = 1e-7);
    }

    #[test]
    fn test_z_scores() {
        let z = ManualEngine.z_scores(&SAMPLE).unwrap();
        assert_eq!(z.len(), SAMPLE.len());
        assert_relative_eq!(z[0], -1.521_277_7, max_relative = 1e-7);
        // Z-scores of any sample sum to zero.
        assert_relative_eq!(z.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_sample_is_rejected_everywhere() {
        let empty: [f64; 0] = [];
        assert_eq!(ManualEngine.mean(&empty), Err(StatsError::EmptyInput));
        assert_eq!(ManualEngine.median(&empty), Err(StatsError::EmptyInput));
        assert_eq!(ManualEngine.mode(&empty), Err(StatsError::EmptyInput));
        assert_eq!(ManualEngine.variance(&empty), Err(StatsError::EmptyInput));
        assert_eq!(ManualEngine.std_dev(&empty), Err(StatsError::EmptyInput));
        assert_eq!(
            ManualEngine.coefficient_of_variation(&empty),
            Err(StatsError::EmptyInput)
        );
        assert_eq!(ManualEngine.z_scores(&empty), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_single_element_variance_is_undefined() {
        assert_eq!(
            ManualEngine.variance(&[7.0]),
            Err(StatsError::InsufficientData)
        );
        assert_eq!(
            ManualEngine.std_dev(&[7.0]),
            Err(StatsError::InsufficientData)
        );
        assert_eq!(
            ManualEngine.z_scores(&[7.0]),
            Err(StatsError::InsufficientData)
        );
    }

    #[test]
    fn test_zero_mean_rejects_coefficient_of_variation() {
        assert_eq!(
            ManualEngine.coefficient_of_variation(&[-1.0, 1.0]),
            Err(StatsError::DivisionByZero)
        );
        assert_eq!(
            ManualEngine.coefficient_of_variation(&[0.0, 0.0, 0.0]),
            Err(StatsError::DivisionByZero)
        );
    }

    #[test]
    fn test_constant_sample_rejects_z_scores() {
        assert_eq!(
            ManualEngine.z_scores(&[5.0, 5.0, 5.0]),
            Err(StatsError::DivisionByZero)
        );
    }
}
