use tracing::debug;

use crate::errors::AnalysisError;
use crate::experiment::samples::SampleSet;

/// Least squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn new(slope: f64, intercept: f64) -> Self {
        LinearFit { slope, intercept }
    }

    /// Ordinary least squares fit of a degree one polynomial.
    ///
    /// Closed form on centered sums:
    /// `slope = Sxy / Sxx`, `intercept = mean(y) - slope * mean(x)`.
    /// Needs at least two samples and some spread in `x`.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, AnalysisError> {
        if x.len() != y.len() {
            return Err(AnalysisError::FitError(format!(
                "x has {} values but y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(AnalysisError::FitError(format!(
                "need at least 2 samples, got {}",
                x.len()
            )));
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(AnalysisError::FitError(
                "samples contain non-finite values".to_string(),
            ));
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| {
                let dx = xi - mean_x;
                (sxx + dx * dx, sxy + dx * (yi - mean_y))
            });

        // All x equal up to rounding: the normal equations are singular.
        let scale = x.iter().map(|xi| xi * xi).sum::<f64>();
        if sxx <= n * f64::EPSILON * scale {
            return Err(AnalysisError::FitError(
                "x values have zero variance, slope is undefined".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        debug!(slope, intercept, samples = x.len(), "Linear fit");

        Ok(LinearFit { slope, intercept })
    }

    /// Fits the measured range against `sqrt(h)`.
    pub fn fit_samples(samples: &SampleSet) -> Result<Self, AnalysisError> {
        LinearFit::fit(&samples.sqrt_heights(), samples.ranges())
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter().zip(y).map(|(xi, yi)| yi - self.predict(*xi)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_normal_equations(fit: &LinearFit, x: &[f64], y: &[f64]) {
        let residuals = fit.residuals(x, y);
        let sum_r: f64 = residuals.iter().sum();
        let sum_xr: f64 = x.iter().zip(&residuals).map(|(xi, r)| xi * r).sum();

        let scale_r: f64 = y.iter().map(|v| v.abs()).sum::<f64>().max(1.0);
        let scale_xr: f64 = x
            .iter()
            .zip(y)
            .map(|(xi, yi)| (xi * yi).abs())
            .sum::<f64>()
            .max(1.0);
        assert!(sum_r.abs() <= 1e-9 * scale_r, "sum of residuals {}", sum_r);
        assert!(sum_xr.abs() <= 1e-9 * scale_xr, "sum of x * residuals {}", sum_xr);
    }

    #[test]
    fn test_exact_line_is_recovered() {
        let x: Vec<f64> = (0..10).map(|i| 0.1 + i as f64 * 0.05).collect();
        let y: Vec<f64> = x.iter().map(|xi| 1.7 * xi - 0.03).collect();

        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 1.7, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, -0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_two_points() {
        let fit = LinearFit::fit(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.predict(2.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_regression() {
        // y = 0.6 x + 2.2 by hand
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]).unwrap();
        assert_abs_diff_eq!(fit.slope, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 2.2, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_equations_hold_for_noisy_data() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let n = rng.gen_range(2..40);
            let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
            let y: Vec<f64> = x
                .iter()
                .map(|xi| 1.5 * xi + 0.2 + rng.gen_range(-0.05..0.05))
                .collect();

            let fit = LinearFit::fit(&x, &y).unwrap();
            assert_normal_equations(&fit, &x, &y);
        }
    }

    #[test]
    fn test_too_few_samples() {
        assert!(matches!(
            LinearFit::fit(&[0.3], &[0.5]),
            Err(AnalysisError::FitError(_))
        ));
        assert!(LinearFit::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_mismatched_lengths() {
        assert!(LinearFit::fit(&[0.1, 0.2, 0.3], &[0.5, 0.6]).is_err());
    }

    #[test]
    fn test_zero_variance_x() {
        let x = [0.1; 6];
        let y = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        assert!(matches!(
            LinearFit::fit(&x, &y),
            Err(AnalysisError::FitError(_))
        ));
    }

    #[test]
    fn test_non_finite_values() {
        assert!(LinearFit::fit(&[0.1, f64::NAN], &[0.5, 0.6]).is_err());
        assert!(LinearFit::fit(&[0.1, 0.2], &[0.5, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_fit_samples_uses_sqrt_height() {
        let heights = vec![0.04, 0.09, 0.16, 0.25];
        let ranges: Vec<f64> = heights.iter().map(|h: &f64| 1.5 * h.sqrt() + 0.01).collect();
        let samples = SampleSet::new(heights, ranges).unwrap();

        let fit = LinearFit::fit_samples(&samples).unwrap();
        assert_abs_diff_eq!(fit.slope, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 0.01, epsilon = 1e-12);
    }
}
