//! Summary statistics over error arrays with missing samples.
//!
//! Missing samples are NaN. They are skipped, never counted as zero.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root-mean-square of the finite values in `values`.
///
/// Fails with [`Error::AllValuesMissing`] when there is nothing finite to
/// average, rather than reporting a misleading zero.
pub fn rms(values: &[f64]) -> Result<f64> {
    let (sum_sq, count) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v * v, n + 1));

    if count == 0 {
        return Err(Error::AllValuesMissing(format!(
            "no finite values among {} samples",
            values.len()
        )));
    }

    Ok((sum_sq / count as f64).sqrt())
}

/// Error statistics for one error series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatistics {
    /// Root mean square error
    pub rmse: f64,

    /// Mean error (signed)
    pub mean: f64,

    /// Standard deviation
    pub std: f64,

    /// Minimum error
    pub min: f64,

    /// Maximum error
    pub max: f64,

    /// Median error
    pub median: f64,

    /// Largest absolute error
    pub max_abs: f64,

    /// Number of finite samples
    pub count: usize,

    /// Number of NaN samples skipped
    pub missing: usize,
}

impl ErrorStatistics {
    /// Compute statistics from a list of errors, skipping non-finite entries.
    ///
    /// With no finite entries every statistic is NaN and `count` is zero.
    pub fn from_errors(errors: &[f64]) -> Self {
        let mut finite: Vec<f64> = errors.iter().copied().filter(|e| e.is_finite()).collect();
        let count = finite.len();
        let missing = errors.len() - count;

        if count == 0 {
            return Self {
                rmse: f64::NAN,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
                median: f64::NAN,
                max_abs: f64::NAN,
                count,
                missing,
            };
        }

        let n = count as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let rmse = (finite.iter().map(|e| e * e).sum::<f64>() / n).sqrt();
        let variance = finite.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;

        finite.sort_by(f64::total_cmp);
        let median = if count.is_multiple_of(2) {
            (finite[count / 2 - 1] + finite[count / 2]) / 2.0
        } else {
            finite[count / 2]
        };
        let min = finite[0];
        let max = finite[count - 1];

        Self {
            rmse,
            mean,
            std: variance.sqrt(),
            min,
            max,
            median,
            max_abs: min.abs().max(max.abs()),
            count,
            missing,
        }
    }

    /// True if no finite sample contributed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Format as a single-line summary.
    pub fn summary(&self) -> String {
        format!(
            "rmse: {:.4}, mean: {:.4}, std: {:.4}, min: {:.4}, max: {:.4}, missing: {}",
            self.rmse, self.mean, self.std, self.min, self.max, self.missing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rms_all_finite() {
        assert_relative_eq!(rms(&[3.0, -4.0]).unwrap(), (12.5f64).sqrt());
        assert_relative_eq!(rms(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_rms_skips_nan() {
        let with_gaps = rms(&[1.0, f64::NAN, -1.0, f64::NAN, 2.0]).unwrap();
        let finite_only = rms(&[1.0, -1.0, 2.0]).unwrap();
        assert_relative_eq!(with_gaps, finite_only);
        assert_relative_eq!(with_gaps, 2.0f64.sqrt());
    }

    #[test]
    fn test_rms_all_missing() {
        assert!(matches!(
            rms(&[f64::NAN, f64::NAN]),
            Err(Error::AllValuesMissing(_))
        ));
        assert!(matches!(rms(&[]), Err(Error::AllValuesMissing(_))));
    }

    #[test]
    fn test_statistics() {
        let stats = ErrorStatistics::from_errors(&[1.0, 2.0, f64::NAN, 3.0, 4.0, -5.0]);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.missing, 1);
        assert_relative_eq!(stats.mean, 1.0);
        assert_relative_eq!(stats.min, -5.0);
        assert_relative_eq!(stats.max, 4.0);
        assert_relative_eq!(stats.median, 2.0);
        assert_relative_eq!(stats.max_abs, 5.0);
        assert_relative_eq!(stats.rmse, 11.0f64.sqrt());
        assert_relative_eq!(stats.std, 10.0f64.sqrt());
    }

    #[test]
    fn test_statistics_even_median() {
        let stats = ErrorStatistics::from_errors(&[4.0, 1.0, 3.0, 2.0]);
        assert_relative_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = ErrorStatistics::from_errors(&[f64::NAN]);
        assert!(stats.is_empty());
        assert_eq!(stats.missing, 1);
        assert!(stats.rmse.is_nan());
    }
}
