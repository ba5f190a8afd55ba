//! Library-delegated strategy backed by `statrs`.

use statrs::statistics::{Data, Median, Statistics};

use crate::{
    engine::{StatisticsEngine, first_seen_mode},
    error::StatsError,
};

/// Delegates the core aggregates to `statrs` instead of deriving them by
/// hand.
///
/// Mean, variance, and standard deviation go through the
/// [`Statistics`] iterator extension (`statrs` variance is
/// Bessel-corrected, matching [`ManualEngine`](crate::manual::ManualEngine));
/// the median goes through [`Data`]. Count guards run *before* delegation so
/// the error taxonomy stays identical to the manual strategy — `statrs`
/// reports degenerate inputs as `NaN`, which must never leak out of this
/// contract. The mode has no `statrs` equivalent and reuses the shared
/// first-occurrence helper, which keeps the tie-break policy identical
/// across strategies.
///
/// Every return value is a plain `f64`/`Vec<f64>`; no `statrs` wrapper type
/// appears in the public contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsEngine;

impl StatisticsEngine for StatrsEngine {
    fn mean(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        Ok(sample.iter().mean())
    }

    fn median(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        // Data takes ownership of a copy; the caller's slice is untouched.
        Ok(Data::new(sample.to_vec()).median())
    }

    fn mode(&self, sample: &[f64]) -> Result<f64, StatsError> {
        first_seen_mode(sample)
    }

    fn variance(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if sample.len() == 1 {
            return Err(StatsError::InsufficientData);
        }
        Ok(sample.iter().variance())
    }

    fn std_dev(&self, sample: &[f64]) -> Result<f64, StatsError> {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if sample.len() == 1 {
            return Err(StatsError::InsufficientData);
        }
        Ok(sample.iter().std_dev())
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
        assert_relative_eq!(
            StatrsEngine.mean(&SAMPLE).unwrap(),
            34.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_median_even_count() {
        assert_relative_eq!(
            StatrsEngine.median(&SAMPLE).unwrap(),
            30.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_median_odd_count() {
        assert_relative_eq!(
            StatrsEngine.median(&[9.0, 1.0, 5.0]).unwrap(),
            5.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_mode_uses_first_occurrence_policy() {
        assert_eq!(StatrsEngine.mode(&SAMPLE), Ok(30.0));
        assert_eq!(StatrsEngine.mode(&[3.0, 1.0, 3.0, 1.0]), Ok(3.0));
    }

    #[test]
    fn test_variance_is_bessel_corrected() {
        assert_relative_eq!(
            StatrsEngine.variance(&SAMPLE).unwrap(),
            2240.0 / 9.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_coefficient_of_variation() {
        let cv = StatrsEngine.coefficient_of_variation(&SAMPLE).unwrap();
        assert_relative_eq!(cv, 46.400_626, max_relative = 1e-7);
    }

    #[test]
    fn test_z_scores_sum_to_zero() {
        let z = StatrsEngine.z_scores(&SAMPLE).unwrap();
        assert_eq!(z.len(), SAMPLE.len());
        assert_relative_eq!(z.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_error_instead_of_nan() {
        let empty: [f64; 0] = [];
        assert_eq!(StatrsEngine.mean(&empty), Err(StatsError::EmptyInput));
        assert_eq!(StatrsEngine.median(&empty), Err(StatsError::EmptyInput));
        assert_eq!(StatrsEngine.variance(&empty), Err(StatsError::EmptyInput));
        assert_eq!(
            StatrsEngine.variance(&[7.0]),
            Err(StatsError::InsufficientData)
        );
        assert_eq!(
            StatrsEngine.std_dev(&[7.0]),
            Err(StatsError::InsufficientData)
        );
        assert_eq!(
            StatrsEngine.coefficient_of_variation(&[0.0, 0.0]),
            Err(StatsError::DivisionByZero)
        );
        assert_eq!(
            StatrsEngine.z_scores(&[5.0, 5.0, 5.0]),
            Err(StatsError::DivisionByZero)
        );
    }
}
