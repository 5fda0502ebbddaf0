use tracing::info;

use crate::analysis::comparison::Comparison;
use crate::analysis::fit::LinearFit;
use crate::analysis::models::ModelSlopes;
use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::experiment::data_source::RangeSource;
use crate::experiment::samples::SampleSet;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub launch_height: f64,
    pub samples: SampleSet,
    pub slopes: ModelSlopes,
    pub fit: LinearFit,
    pub comparison: Comparison,
}

pub struct RangeAnalysis {
    pub config: AnalysisConfig,
}

impl RangeAnalysis {
    pub fn new(config: AnalysisConfig) -> Self {
        RangeAnalysis { config }
    }

    pub fn run(&self, samples: SampleSet) -> Result<AnalysisResult, AnalysisError> {
        self.config.validate()?;
        let launch_height = self.config.launch_height;
        info!(launch_height, samples = samples.len(), "Starting range analysis");

        let slopes = ModelSlopes::new(launch_height)?;
        info!(
            point_mass = slopes.point_mass,
            rigid_body = slopes.rigid_body,
            "Theoretical slopes"
        );

        let fit = LinearFit::fit_samples(&samples)?;
        info!(slope = fit.slope, intercept = fit.intercept, "Fitted A against sqrt(h)");

        let comparison = Comparison::evaluate(fit.slope, &slopes, self.config.tie_break)?;
        info!(
            winner = comparison.winner.short_name(),
            tied = comparison.tied,
            "Comparison done"
        );

        Ok(AnalysisResult {
            launch_height,
            samples,
            slopes,
            fit,
            comparison,
        })
    }

    /// Collects ranges from `source` for the given heights, then runs.
    pub fn run_with_source<S: RangeSource + ?Sized>(
        &self,
        heights: Vec<f64>,
        source: &mut S,
    ) -> Result<AnalysisResult, AnalysisError> {
        let samples = SampleSet::from_source(heights, self.config.launch_height, source)?;
        self.run(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::RangeModel;
    use crate::constants::DEFAULT_HEIGHTS;
    use crate::experiment::data_source::{MeasuredRanges, SyntheticRanges};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noisy_rigid_body_data_picks_rigid_body() {
        let analysis = RangeAnalysis::new(AnalysisConfig::default());
        let mut source = SyntheticRanges::new(StdRng::seed_from_u64(11));
        let result = analysis
            .run_with_source(DEFAULT_HEIGHTS.to_vec(), &mut source)
            .unwrap();

        assert_eq!(result.samples.len(), DEFAULT_HEIGHTS.len());
        assert_eq!(result.comparison.winner, RangeModel::RigidBody);
        assert_abs_diff_eq!(result.fit.slope, result.slopes.rigid_body, epsilon = 0.15);
    }

    #[test]
    fn test_point_mass_data_picks_point_mass() {
        let analysis = RangeAnalysis::new(AnalysisConfig::new(0.5));
        let mut source = SyntheticRanges::new(StdRng::seed_from_u64(5))
            .with_model(RangeModel::PointMass)
            .with_noise_amplitude(0.0);
        let result = analysis
            .run_with_source(DEFAULT_HEIGHTS.to_vec(), &mut source)
            .unwrap();

        assert_eq!(result.comparison.winner, RangeModel::PointMass);
        assert_abs_diff_eq!(result.comparison.error_point_mass, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_launch_height_fails_before_fitting() {
        let analysis = RangeAnalysis::new(AnalysisConfig::new(-0.85));
        let samples = SampleSet::new(vec![0.02, 0.04], vec![0.2, 0.3]).unwrap();
        assert!(matches!(
            analysis.run(samples),
            Err(AnalysisError::ValidationError(_))
        ));
    }

    #[test]
    fn test_single_sample_fails_in_fit() {
        let analysis = RangeAnalysis::new(AnalysisConfig::default());
        let mut source = MeasuredRanges::new(vec![0.22]);
        assert!(matches!(
            analysis.run_with_source(vec![0.02], &mut source),
            Err(AnalysisError::FitError(_))
        ));
    }
}
